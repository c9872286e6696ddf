use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid contact name: {name:?}")]
    InvalidContactName { name: String },
    #[error("invalid phone {phone:?}: expected exactly 10 digits")]
    InvalidPhone { name: Option<String>, phone: String },
    #[error("invalid email {email:?}")]
    InvalidEmail { name: Option<String>, email: String },
    #[error("invalid birthday {birthday:?}: expected a past date as DD.MM.YYYY")]
    InvalidBirthday {
        name: Option<String>,
        birthday: String,
    },
    #[error("contact already exists: {name}")]
    ContactExists { name: String },
    #[error("contact not found: {name}")]
    ContactNotFound { name: String },
    #[error("{name} already has phone {phone}")]
    DuplicatePhone { name: String, phone: String },
    #[error("{name} already has email {email}")]
    DuplicateEmail { name: String, email: String },
    #[error("{name} has no phone at index {index}")]
    PhoneNotFound { name: String, index: usize },
    #[error("{name} has no email at index {index}")]
    EmailNotFound { name: String, index: usize },
    #[error("{name} has no birthday set")]
    BirthdayNotSet { name: String },
    #[error("address book is empty")]
    EmptyContacts,
    #[error("invalid index: {index:?}")]
    InvalidIndex { index: String },
    #[error("no contact fields provided for {name}")]
    EmptyContactFields { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreErrorKind {
    InvalidContactName,
    InvalidPhone,
    InvalidEmail,
    InvalidBirthday,
    ContactExists,
    ContactNotFound,
    DuplicatePhone,
    DuplicateEmail,
    PhoneNotFound,
    EmailNotFound,
    BirthdayNotSet,
    EmptyContacts,
    InvalidIndex,
    EmptyContactFields,
}

impl CoreErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CoreErrorKind::InvalidContactName => "invalid_contact_name",
            CoreErrorKind::InvalidPhone => "invalid_phone",
            CoreErrorKind::InvalidEmail => "invalid_email",
            CoreErrorKind::InvalidBirthday => "invalid_birthday",
            CoreErrorKind::ContactExists => "contact_exists",
            CoreErrorKind::ContactNotFound => "contact_not_found",
            CoreErrorKind::DuplicatePhone => "duplicate_phone",
            CoreErrorKind::DuplicateEmail => "duplicate_email",
            CoreErrorKind::PhoneNotFound => "phone_not_found",
            CoreErrorKind::EmailNotFound => "email_not_found",
            CoreErrorKind::BirthdayNotSet => "birthday_not_set",
            CoreErrorKind::EmptyContacts => "empty_contacts",
            CoreErrorKind::InvalidIndex => "invalid_index",
            CoreErrorKind::EmptyContactFields => "empty_contact_fields",
        }
    }
}

/// Structured payload attached to a [`CoreError`]; unset keys are omitted
/// when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::InvalidContactName { .. } => CoreErrorKind::InvalidContactName,
            CoreError::InvalidPhone { .. } => CoreErrorKind::InvalidPhone,
            CoreError::InvalidEmail { .. } => CoreErrorKind::InvalidEmail,
            CoreError::InvalidBirthday { .. } => CoreErrorKind::InvalidBirthday,
            CoreError::ContactExists { .. } => CoreErrorKind::ContactExists,
            CoreError::ContactNotFound { .. } => CoreErrorKind::ContactNotFound,
            CoreError::DuplicatePhone { .. } => CoreErrorKind::DuplicatePhone,
            CoreError::DuplicateEmail { .. } => CoreErrorKind::DuplicateEmail,
            CoreError::PhoneNotFound { .. } => CoreErrorKind::PhoneNotFound,
            CoreError::EmailNotFound { .. } => CoreErrorKind::EmailNotFound,
            CoreError::BirthdayNotSet { .. } => CoreErrorKind::BirthdayNotSet,
            CoreError::EmptyContacts => CoreErrorKind::EmptyContacts,
            CoreError::InvalidIndex { .. } => CoreErrorKind::InvalidIndex,
            CoreError::EmptyContactFields { .. } => CoreErrorKind::EmptyContactFields,
        }
    }

    /// Attaches the owning contact's name to a field validation error.
    /// Errors that already carry a mandatory name are returned unchanged.
    pub fn with_name(self, contact: &str) -> Self {
        let contact = Some(contact.to_string());
        match self {
            CoreError::InvalidPhone { phone, .. } => CoreError::InvalidPhone {
                name: contact,
                phone,
            },
            CoreError::InvalidEmail { email, .. } => CoreError::InvalidEmail {
                name: contact,
                email,
            },
            CoreError::InvalidBirthday { birthday, .. } => CoreError::InvalidBirthday {
                name: contact,
                birthday,
            },
            other => other,
        }
    }

    pub fn context(&self) -> ErrorContext {
        let mut ctx = ErrorContext::default();
        match self {
            CoreError::InvalidContactName { name }
            | CoreError::ContactExists { name }
            | CoreError::ContactNotFound { name }
            | CoreError::BirthdayNotSet { name }
            | CoreError::EmptyContactFields { name } => {
                ctx.name = Some(name.clone());
            }
            CoreError::InvalidPhone { name, phone } => {
                ctx.name = name.clone();
                ctx.phone = Some(phone.clone());
            }
            CoreError::InvalidEmail { name, email } => {
                ctx.name = name.clone();
                ctx.email = Some(email.clone());
            }
            CoreError::InvalidBirthday { name, birthday } => {
                ctx.name = name.clone();
                ctx.birthday = Some(birthday.clone());
            }
            CoreError::DuplicatePhone { name, phone } => {
                ctx.name = Some(name.clone());
                ctx.phone = Some(phone.clone());
            }
            CoreError::DuplicateEmail { name, email } => {
                ctx.name = Some(name.clone());
                ctx.email = Some(email.clone());
            }
            CoreError::PhoneNotFound { name, index } | CoreError::EmailNotFound { name, index } => {
                ctx.name = Some(name.clone());
                ctx.index = Some(index.to_string());
            }
            CoreError::InvalidIndex { index } => {
                ctx.index = Some(index.clone());
            }
            CoreError::EmptyContacts => {}
        }
        ctx
    }
}
