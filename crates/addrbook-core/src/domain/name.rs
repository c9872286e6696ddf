use crate::error::CoreError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яІіЇїЄєҐґ' -]{1,50}$").expect("valid contact name regex")
});

/// Contact name: 1 to 50 Latin or Cyrillic letters, apostrophes, spaces or
/// hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !is_valid_name(raw) {
            return Err(CoreError::InvalidContactName {
                name: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_name(raw: &str) -> bool {
    NAME_RE.is_match(raw)
}
