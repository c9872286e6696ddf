mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{birthdays, contacts, fields, Context};
use crate::error::{exit_code_for, report_error};
use addrbook_config as config;
use addrbook_store::{paths, LoadStatus};

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "addrbook CLI")]
struct Cli {
    /// Contacts file to read and write
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    /// Add phones, emails or a birthday to an existing contact
    Update(contacts::UpdateArgs),
    Show(contacts::ShowArgs),
    List,
    Delete(contacts::DeleteArgs),
    #[command(subcommand)]
    Phone(fields::PhoneCommand),
    #[command(subcommand)]
    Email(fields::EmailCommand),
    #[command(subcommand)]
    Birthday(fields::BirthdayCommand),
    /// List birthdays coming up in the next few days
    Birthdays(birthdays::BirthdaysArgs),
}

impl Command {
    fn mutates(&self) -> bool {
        !matches!(self, Command::Show(_) | Command::List | Command::Birthdays(_))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        file,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let contacts_path = paths::resolve_contacts_path(file, app_config.contacts_file.clone())
        .with_context(|| "resolve contacts path")?;
    debug!(path = %contacts_path.display(), "contacts path resolved");

    let report = addrbook_store::load(&contacts_path);
    if !report.skipped.is_empty() {
        debug!(skipped = report.skipped.len(), "invalid stored values dropped");
    }
    let unreadable = report.status == LoadStatus::Unreadable;
    let mut book = report.book;
    let mutates = command.mutates();

    let mut ctx = Context {
        book: &mut book,
        json,
        config: &app_config,
    };

    match command {
        Command::AddContact(args) => contacts::add_contact(&mut ctx, args)?,
        Command::Update(args) => contacts::update_contact(&mut ctx, args)?,
        Command::Show(args) => contacts::show_contact(&ctx, args)?,
        Command::List => contacts::list_contacts(&ctx)?,
        Command::Delete(args) => contacts::delete_contact(&mut ctx, args)?,
        Command::Phone(cmd) => match cmd {
            fields::PhoneCommand::Add(args) => fields::add_phone(&mut ctx, args)?,
            fields::PhoneCommand::Edit(args) => fields::edit_phone(&mut ctx, args)?,
            fields::PhoneCommand::Rm(args) => fields::remove_phone(&mut ctx, args)?,
        },
        Command::Email(cmd) => match cmd {
            fields::EmailCommand::Add(args) => fields::add_email(&mut ctx, args)?,
            fields::EmailCommand::Edit(args) => fields::edit_email(&mut ctx, args)?,
            fields::EmailCommand::Rm(args) => fields::remove_email(&mut ctx, args)?,
        },
        Command::Birthday(cmd) => match cmd {
            fields::BirthdayCommand::Set(args) => fields::set_birthday(&mut ctx, args)?,
            fields::BirthdayCommand::Rm(args) => fields::remove_birthday(&mut ctx, args)?,
        },
        Command::Birthdays(args) => birthdays::upcoming(&ctx, args)?,
    }

    if mutates {
        if unreadable {
            let sidecar = addrbook_store::preserve_unreadable(&contacts_path)
                .with_context(|| "keep unreadable contacts file")?;
            eprintln!(
                "warning: unreadable contacts file moved to {}",
                sidecar.display()
            );
        }
        addrbook_store::save(&book, &contacts_path);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
