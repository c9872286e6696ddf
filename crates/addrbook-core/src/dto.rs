use crate::domain::Record;
use crate::rules::UpcomingBirthday;
use crate::time::format_date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for ContactDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
            emails: record.emails().iter().map(ToString::to_string).collect(),
            birthday: record.birthday().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    pub congratulation_date: String,
    pub birthday_date: String,
    pub weekday: String,
}

impl From<&UpcomingBirthday> for UpcomingBirthdayDto {
    fn from(entry: &UpcomingBirthday) -> Self {
        Self {
            name: entry.name.clone(),
            congratulation_date: format_date(entry.congratulation_date),
            birthday_date: format_date(entry.birthday_date),
            weekday: entry.weekday.to_string(),
        }
    }
}
