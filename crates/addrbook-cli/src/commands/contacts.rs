use crate::commands::{print_json, Context};
use crate::util::print_contact;
use addrbook_core::dto::ContactDto;
use addrbook_core::{Record, RecordUpdate};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, value_name = "PHONE")]
    pub phone: Vec<String>,
    #[arg(long, value_name = "EMAIL")]
    pub email: Vec<String>,
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub birthday: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub name: String,
    #[arg(long, value_name = "PHONE")]
    pub phone: Vec<String>,
    #[arg(long, value_name = "EMAIL")]
    pub email: Vec<String>,
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub birthday: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub name: String,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let mut record = Record::new(&args.name)?;
    let update = RecordUpdate {
        phones: args.phone,
        emails: args.email,
        birthday: args.birthday,
    };
    if !update.is_empty() {
        record.apply(update)?;
    }

    let dto = ContactDto::from(&record);
    ctx.book.add_record(record)?;

    if ctx.json {
        print_json(&dto)?;
    } else {
        println!("created {}", dto.name);
    }
    Ok(())
}

pub fn update_contact(ctx: &mut Context<'_>, args: UpdateArgs) -> Result<()> {
    let record = ctx.book.find_mut(&args.name)?;
    record.apply(RecordUpdate {
        phones: args.phone,
        emails: args.email,
        birthday: args.birthday,
    })?;

    let dto = ContactDto::from(&*record);
    if ctx.json {
        print_json(&dto)?;
    } else {
        println!("updated {}", dto.name);
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let record = ctx.book.find(&args.name)?;
    let dto = ContactDto::from(record);

    if ctx.json {
        return print_json(&dto);
    }
    print_contact(&dto);
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>) -> Result<()> {
    ctx.book.ensure_not_empty()?;
    let items: Vec<ContactDto> = ctx
        .book
        .records()
        .into_iter()
        .map(ContactDto::from)
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    for (pos, item) in items.iter().enumerate() {
        if pos > 0 {
            println!();
        }
        print_contact(item);
    }
    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let removed = ctx.book.delete(&args.name)?;
    if ctx.json {
        print_json(&serde_json::json!({ "name": removed.name().as_str() }))?;
    } else {
        println!("deleted {}", removed.name());
    }
    Ok(())
}
