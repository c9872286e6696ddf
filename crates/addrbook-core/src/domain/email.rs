use crate::error::CoreError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !EMAIL_RE.is_match(raw) {
            return Err(CoreError::InvalidEmail {
                name: None,
                email: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Email;

    #[test]
    fn email_accepts_basic_addresses() {
        for raw in ["ada@example.com", "ada.lovelace+crm@mail.example.org"] {
            assert_eq!(Email::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn email_is_stored_verbatim() {
        let email = Email::new("Ada@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Ada@Example.COM");
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for raw in [
            "ada",
            "ada@example",
            "ada@example.c",
            "ada@@example.com",
            "ada lovelace@example.com",
            "@example.com",
            "ada@example.c0m",
        ] {
            let err = Email::new(raw).unwrap_err();
            assert_eq!(err.context().email.as_deref(), Some(raw));
        }
    }
}
