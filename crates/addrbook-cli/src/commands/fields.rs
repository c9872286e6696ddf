use crate::commands::{print_json, Context};
use addrbook_core::dto::ContactDto;
use addrbook_core::{parse_index, Record};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum PhoneCommand {
    Add(AddValueArgs),
    Edit(EditValueArgs),
    Rm(RemoveValueArgs),
}

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    Add(AddValueArgs),
    Edit(EditValueArgs),
    Rm(RemoveValueArgs),
}

#[derive(Debug, Subcommand)]
pub enum BirthdayCommand {
    Set(SetBirthdayArgs),
    Rm(RemoveBirthdayArgs),
}

#[derive(Debug, Args)]
pub struct AddValueArgs {
    pub name: String,
    pub value: String,
}

/// Indices are positions as printed by `show`; they shift after a removal.
#[derive(Debug, Args)]
pub struct EditValueArgs {
    pub name: String,
    pub index: String,
    pub value: String,
}

#[derive(Debug, Args)]
pub struct RemoveValueArgs {
    pub name: String,
    pub index: String,
}

#[derive(Debug, Args)]
pub struct SetBirthdayArgs {
    pub name: String,
    #[arg(value_name = "DD.MM.YYYY")]
    pub date: String,
}

#[derive(Debug, Args)]
pub struct RemoveBirthdayArgs {
    pub name: String,
}

pub fn add_phone(ctx: &mut Context<'_>, args: AddValueArgs) -> Result<()> {
    let record = ctx.book.find_mut(&args.name)?;
    record.add_phone(&args.value)?;
    report(ctx.json, record, &format!("added phone {}", args.value))
}

pub fn edit_phone(ctx: &mut Context<'_>, args: EditValueArgs) -> Result<()> {
    let index = parse_index(&args.index)?;
    let record = ctx.book.find_mut(&args.name)?;
    record.edit_phone(index, &args.value)?;
    report(
        ctx.json,
        record,
        &format!("updated phone [{}] {}", index, args.value),
    )
}

pub fn remove_phone(ctx: &mut Context<'_>, args: RemoveValueArgs) -> Result<()> {
    let index = parse_index(&args.index)?;
    let record = ctx.book.find_mut(&args.name)?;
    let removed = record.remove_phone(index)?;
    report(ctx.json, record, &format!("removed phone {}", removed))
}

pub fn add_email(ctx: &mut Context<'_>, args: AddValueArgs) -> Result<()> {
    let record = ctx.book.find_mut(&args.name)?;
    record.add_email(&args.value)?;
    report(ctx.json, record, &format!("added email {}", args.value))
}

pub fn edit_email(ctx: &mut Context<'_>, args: EditValueArgs) -> Result<()> {
    let index = parse_index(&args.index)?;
    let record = ctx.book.find_mut(&args.name)?;
    record.edit_email(index, &args.value)?;
    report(
        ctx.json,
        record,
        &format!("updated email [{}] {}", index, args.value),
    )
}

pub fn remove_email(ctx: &mut Context<'_>, args: RemoveValueArgs) -> Result<()> {
    let index = parse_index(&args.index)?;
    let record = ctx.book.find_mut(&args.name)?;
    let removed = record.remove_email(index)?;
    report(ctx.json, record, &format!("removed email {}", removed))
}

pub fn set_birthday(ctx: &mut Context<'_>, args: SetBirthdayArgs) -> Result<()> {
    let record = ctx.book.find_mut(&args.name)?;
    record.add_birthday(&args.date)?;
    let message = match record.birthday() {
        Some(birthday) => format!("set birthday {}", birthday),
        None => "set birthday".to_string(),
    };
    report(ctx.json, record, &message)
}

pub fn remove_birthday(ctx: &mut Context<'_>, args: RemoveBirthdayArgs) -> Result<()> {
    let record = ctx.book.find_mut(&args.name)?;
    let removed = record.remove_birthday()?;
    report(ctx.json, record, &format!("removed birthday {}", removed))
}

fn report(json: bool, record: &Record, message: &str) -> Result<()> {
    if json {
        return print_json(&ContactDto::from(record));
    }
    println!("{}: {}", record.name(), message);
    Ok(())
}
