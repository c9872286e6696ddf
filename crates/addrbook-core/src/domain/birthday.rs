use crate::error::CoreError;
use crate::time::{format_date, local_today, parse_date};
use chrono::NaiveDate;
use std::fmt;

/// Date of birth that is never later than the day it was validated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::parse_on(raw, local_today())
    }

    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidBirthday {
            name: None,
            birthday: raw.to_string(),
        };
        let date = parse_date(raw).ok_or_else(invalid)?;
        if date > today {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    /// Replaces the stored date, applying the same checks as [`Birthday::parse`].
    /// The current value is kept when `raw` is rejected.
    pub fn set(&mut self, raw: &str) -> Result<(), CoreError> {
        *self = Self::parse(raw)?;
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Birthday;
    use crate::error::CoreErrorKind;
    use crate::time::{format_date, local_today};
    use chrono::{Days, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_accepts_leap_day_in_leap_year() {
        let birthday = Birthday::parse_on("29.02.2024", date(2024, 6, 10)).unwrap();
        assert_eq!(birthday.date(), date(2024, 2, 29));
    }

    #[test]
    fn birthday_rejects_leap_day_in_common_year() {
        let err = Birthday::parse_on("29.02.2023", date(2024, 6, 10)).unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::InvalidBirthday);
        assert_eq!(err.context().birthday.as_deref(), Some("29.02.2023"));
    }

    #[test]
    fn birthday_today_is_accepted_tomorrow_is_not() {
        let today = local_today();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
        assert!(Birthday::parse(&format_date(today)).is_ok());
        let err = Birthday::parse(&format_date(tomorrow)).unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::InvalidBirthday);
    }

    #[test]
    fn birthday_rejects_other_formats() {
        let today = date(2024, 6, 10);
        for raw in ["1990-06-15", "15/06/1990", "15.13.1990", "birthday", ""] {
            assert!(Birthday::parse_on(raw, today).is_err(), "{raw}");
        }
    }

    #[test]
    fn birthday_rejects_short_year_and_loose_spacing() {
        let today = date(2024, 6, 10);
        for raw in ["15.06.90", "15.06.+1990", " 15.06.1990", "15. 06.1990"] {
            let err = Birthday::parse_on(raw, today).unwrap_err();
            assert_eq!(err.kind(), CoreErrorKind::InvalidBirthday, "{raw:?}");
            assert_eq!(err.context().birthday.as_deref(), Some(raw));
        }
    }

    #[test]
    fn birthday_renders_day_first() {
        let birthday = Birthday::parse_on("05.06.1990", date(2024, 6, 10)).unwrap();
        assert_eq!(birthday.date(), date(1990, 6, 5));
        assert_eq!(birthday.to_string(), "05.06.1990");
    }

    #[test]
    fn set_revalidates_and_keeps_value_on_error() {
        let mut birthday = Birthday::parse("15.06.1990").unwrap();
        birthday.set("01.01.2000").unwrap();
        assert_eq!(birthday.to_string(), "01.01.2000");

        assert!(birthday.set("31.02.2000").is_err());
        assert_eq!(birthday.to_string(), "01.01.2000");
    }
}
