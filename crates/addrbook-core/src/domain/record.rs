use crate::domain::{Birthday, Email, Name, Phone};
use crate::error::CoreError;

/// One contact: a fixed name plus ordered phone and email lists and an
/// optional birthday.
///
/// Phones and emails are addressed by their 0-based position. Removing the
/// entry at index `i` shifts every later entry down by one, so callers must
/// re-read indices after a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    emails: Vec<Email>,
    birthday: Option<Birthday>,
}

/// Fields to add to an existing record in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub birthday: Option<String>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty() && self.emails.is_empty() && self.birthday.is_none()
    }
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        if self.phones.iter().any(|phone| phone.as_str() == raw) {
            return Err(CoreError::DuplicatePhone {
                name: self.name.to_string(),
                phone: raw.to_string(),
            });
        }
        let phone = Phone::new(raw).map_err(|err| err.with_name(self.name.as_str()))?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn edit_phone(&mut self, index: usize, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::new(raw).map_err(|err| err.with_name(self.name.as_str()))?;
        if index >= self.phones.len() {
            return Err(self.phone_not_found(index));
        }
        let taken = self
            .phones
            .iter()
            .enumerate()
            .any(|(pos, existing)| pos != index && existing == &phone);
        if taken {
            return Err(CoreError::DuplicatePhone {
                name: self.name.to_string(),
                phone: raw.to_string(),
            });
        }
        self.phones[index] = phone;
        Ok(())
    }

    pub fn remove_phone(&mut self, index: usize) -> Result<Phone, CoreError> {
        if index >= self.phones.len() {
            return Err(self.phone_not_found(index));
        }
        Ok(self.phones.remove(index))
    }

    pub fn add_email(&mut self, raw: &str) -> Result<(), CoreError> {
        if self.emails.iter().any(|email| email.as_str() == raw) {
            return Err(CoreError::DuplicateEmail {
                name: self.name.to_string(),
                email: raw.to_string(),
            });
        }
        let email = Email::new(raw).map_err(|err| err.with_name(self.name.as_str()))?;
        self.emails.push(email);
        Ok(())
    }

    pub fn edit_email(&mut self, index: usize, raw: &str) -> Result<(), CoreError> {
        let email = Email::new(raw).map_err(|err| err.with_name(self.name.as_str()))?;
        if index >= self.emails.len() {
            return Err(self.email_not_found(index));
        }
        let taken = self
            .emails
            .iter()
            .enumerate()
            .any(|(pos, existing)| pos != index && existing == &email);
        if taken {
            return Err(CoreError::DuplicateEmail {
                name: self.name.to_string(),
                email: raw.to_string(),
            });
        }
        self.emails[index] = email;
        Ok(())
    }

    pub fn remove_email(&mut self, index: usize) -> Result<Email, CoreError> {
        if index >= self.emails.len() {
            return Err(self.email_not_found(index));
        }
        Ok(self.emails.remove(index))
    }

    /// Sets or overwrites the birthday.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        if let Some(existing) = self.birthday.as_mut() {
            return existing
                .set(raw)
                .map_err(|err| err.with_name(self.name.as_str()));
        }
        let birthday = Birthday::parse(raw).map_err(|err| err.with_name(self.name.as_str()))?;
        self.birthday = Some(birthday);
        Ok(())
    }

    pub fn remove_birthday(&mut self) -> Result<Birthday, CoreError> {
        self.birthday.take().ok_or_else(|| CoreError::BirthdayNotSet {
            name: self.name.to_string(),
        })
    }

    /// Applies every field in `update`, or nothing at all if any of them is
    /// rejected.
    pub fn apply(&mut self, update: RecordUpdate) -> Result<(), CoreError> {
        if update.is_empty() {
            return Err(CoreError::EmptyContactFields {
                name: self.name.to_string(),
            });
        }

        let mut staged = self.clone();
        for phone in &update.phones {
            staged.add_phone(phone)?;
        }
        for email in &update.emails {
            staged.add_email(email)?;
        }
        if let Some(birthday) = update.birthday.as_deref() {
            staged.add_birthday(birthday)?;
        }

        *self = staged;
        Ok(())
    }

    fn phone_not_found(&self, index: usize) -> CoreError {
        CoreError::PhoneNotFound {
            name: self.name.to_string(),
            index,
        }
    }

    fn email_not_found(&self, index: usize) -> CoreError {
        CoreError::EmailNotFound {
            name: self.name.to_string(),
            index,
        }
    }
}

/// Parses a user supplied list position.
pub fn parse_index(raw: &str) -> Result<usize, CoreError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| CoreError::InvalidIndex {
            index: raw.to_string(),
        })
}
