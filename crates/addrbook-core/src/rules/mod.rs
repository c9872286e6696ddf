pub mod birthdays;

pub use birthdays::{
    congratulation_date, next_occurrence, validate_upcoming_days, UpcomingBirthday,
    DEFAULT_UPCOMING_DAYS, MAX_UPCOMING_DAYS,
};
