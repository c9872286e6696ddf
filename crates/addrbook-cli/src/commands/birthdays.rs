use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use addrbook_core::dto::UpcomingBirthdayDto;
use addrbook_core::rules::{validate_upcoming_days, MAX_UPCOMING_DAYS};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Window size in days, starting today [default: from config, else 7]
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn upcoming(ctx: &Context<'_>, args: BirthdaysArgs) -> Result<()> {
    let days = match args.days {
        Some(days) => validate_upcoming_days(days).ok_or_else(|| {
            invalid_input(format!(
                "invalid --days value {}: expected 1..={}",
                days, MAX_UPCOMING_DAYS
            ))
        })?,
        None => ctx.config.upcoming_days,
    };

    let items: Vec<UpcomingBirthdayDto> = ctx
        .book
        .upcoming_birthdays(days)
        .iter()
        .map(UpcomingBirthdayDto::from)
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no birthdays in the next {} days", days);
        return Ok(());
    }

    for item in items {
        println!(
            "{}  {}  (birthday {}, {})",
            item.congratulation_date, item.name, item.birthday_date, item.weekday
        );
    }
    Ok(())
}
