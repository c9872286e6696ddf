use addrbook_config::ConfigError;
use addrbook_core::{CoreError, CoreErrorKind};
use addrbook_store::error::{StoreError, StoreErrorKind};
use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
    if let Some(core_err) = err.downcast_ref::<CoreError>() {
        tracing::debug!(
            code = core_err.kind().as_str(),
            context = ?core_err.context(),
            "core error"
        );
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            });
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(core_exit_code(core_err.kind()));
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn core_exit_code(kind: CoreErrorKind) -> u8 {
    match kind {
        CoreErrorKind::ContactNotFound
        | CoreErrorKind::PhoneNotFound
        | CoreErrorKind::EmailNotFound
        | CoreErrorKind::BirthdayNotSet
        | CoreErrorKind::EmptyContacts => EXIT_NOT_FOUND,
        CoreErrorKind::InvalidContactName
        | CoreErrorKind::InvalidPhone
        | CoreErrorKind::InvalidEmail
        | CoreErrorKind::InvalidBirthday
        | CoreErrorKind::ContactExists
        | CoreErrorKind::DuplicatePhone
        | CoreErrorKind::DuplicateEmail
        | CoreErrorKind::InvalidIndex
        | CoreErrorKind::EmptyContactFields => EXIT_INVALID_INPUT,
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir | StoreErrorKind::Json | StoreErrorKind::Io => {
            EXIT_FAILURE
        }
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidUpcomingDays(_)
        | ConfigError::InvalidContactsFile(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
