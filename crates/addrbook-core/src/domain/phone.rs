use crate::error::CoreError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !PHONE_RE.is_match(raw) {
            return Err(CoreError::InvalidPhone {
                name: None,
                phone: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Phone;
    use crate::error::CoreErrorKind;

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert!(Phone::new("050123456").is_err());
        assert!(Phone::new("05012345678").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn phone_rejects_formatting_and_non_ascii_digits() {
        for raw in ["050-123-456", "+380501234", " 050123456", "٠١٢٣٤٥٦٧٨٩"] {
            let err = Phone::new(raw).unwrap_err();
            assert_eq!(err.kind(), CoreErrorKind::InvalidPhone);
        }
    }
}
