use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::birthdays::{sort_upcoming, upcoming_birthday, UpcomingBirthday};
use crate::time::local_today;
use chrono::NaiveDate;
use std::collections::HashMap;

/// All contacts, keyed by their exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> Result<(), CoreError> {
        let key = record.name().to_string();
        if self.records.contains_key(&key) {
            return Err(CoreError::ContactExists { name: key });
        }
        self.records.insert(key, record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record, CoreError> {
        self.records.get(name).ok_or_else(|| not_found(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        self.records.get_mut(name).ok_or_else(|| not_found(name))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        self.records.remove(name).ok_or_else(|| not_found(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ensure_not_empty(&self) -> Result<(), CoreError> {
        if self.records.is_empty() {
            return Err(CoreError::EmptyContacts);
        }
        Ok(())
    }

    /// Records ordered by name.
    pub fn records(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }

    pub fn upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(local_today(), days)
    }

    /// Birthdays occurring within `[today, today + days)`, ordered by
    /// congratulation date and then by name.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                upcoming_birthday(record.name().as_str(), birthday.date(), today, days)
            })
            .collect();
        sort_upcoming(&mut upcoming);
        upcoming
    }
}

fn not_found(name: &str) -> CoreError {
    CoreError::ContactNotFound {
        name: name.to_string(),
    }
}
