use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const DEFAULT_UPCOMING_DAYS: i64 = 7;
pub const MAX_UPCOMING_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Day to congratulate on: the birthday itself, or the following Monday
    /// when it falls on a weekend.
    pub congratulation_date: NaiveDate,
    /// The birthday projected onto the year it next occurs in.
    pub birthday_date: NaiveDate,
    /// Weekday of `birthday_date`.
    pub weekday: Weekday,
}

pub fn validate_upcoming_days(days: i64) -> Option<i64> {
    (1..=MAX_UPCOMING_DAYS).contains(&days).then_some(days)
}

/// Projects a date of birth onto the first anniversary on or after `today`.
/// Feb 29 falls back to Feb 28 in common years.
pub fn next_occurrence(born: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(born, today.year());
    if this_year < today {
        anniversary_in(born, today.year() + 1)
    } else {
        this_year
    }
}

pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

/// Builds the entry for one contact when its next birthday is fewer than
/// `days` days away.
pub fn upcoming_birthday(
    name: &str,
    born: NaiveDate,
    today: NaiveDate,
    days: i64,
) -> Option<UpcomingBirthday> {
    let birthday_date = next_occurrence(born, today);
    let days_until = (birthday_date - today).num_days();
    if !(0..days).contains(&days_until) {
        return None;
    }
    Some(UpcomingBirthday {
        name: name.to_string(),
        congratulation_date: congratulation_date(birthday_date),
        birthday_date,
        weekday: birthday_date.weekday(),
    })
}

/// Orders entries by congratulation date, then by name.
pub fn sort_upcoming(entries: &mut [UpcomingBirthday]) {
    entries.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn anniversary_in(born: NaiveDate, year: i32) -> NaiveDate {
    if born.month() == 2 && born.day() == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(born);
    }
    born.with_year(year).unwrap_or(born)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
