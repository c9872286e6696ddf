use addrbook_config::AppConfig;
use addrbook_core::AddressBook;
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

pub mod birthdays;
pub mod contacts;
pub mod fields;

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
