use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Day-first format used for every birthday the address book accepts or
/// renders.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono's `%Y` takes a sign and any digit count and numeric fields skip
// leading spaces, so the layout is pinned down before parsing.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("valid date regex"));

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
