use addrbook_core::{AddressBook, CoreErrorKind, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// On-disk shape of the address book: contact name to stored fields.
pub type ContactsDocument = BTreeMap<String, StoredContact>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredContact {
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedField {
    Record,
    Phone,
    Email,
    Birthday,
}

impl SkippedField {
    pub fn as_str(self) -> &'static str {
        match self {
            SkippedField::Record => "record",
            SkippedField::Phone => "phone",
            SkippedField::Email => "email",
            SkippedField::Birthday => "birthday",
        }
    }
}

/// A value dropped while rebuilding the book from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub name: String,
    pub field: SkippedField,
    pub value: String,
    pub kind: CoreErrorKind,
}

pub fn document_from_book(book: &AddressBook) -> ContactsDocument {
    book.records()
        .into_iter()
        .map(|record| {
            let stored = StoredContact {
                phones: record.phones().iter().map(ToString::to_string).collect(),
                emails: record.emails().iter().map(ToString::to_string).collect(),
                birthday: record.birthday().map(ToString::to_string),
            };
            (record.name().to_string(), stored)
        })
        .collect()
}

/// Replays every stored value through the record operations. Values that fail
/// validation are dropped individually; an invalid name drops the whole entry.
pub fn book_from_document(document: ContactsDocument) -> (AddressBook, Vec<SkippedEntry>) {
    let mut book = AddressBook::new();
    let mut skipped = Vec::new();

    for (name, stored) in document {
        let mut record = match Record::new(&name) {
            Ok(record) => record,
            Err(err) => {
                warn!(name = %name, code = err.kind().as_str(), "skipping contact");
                skipped.push(SkippedEntry {
                    name: name.clone(),
                    field: SkippedField::Record,
                    value: name,
                    kind: err.kind(),
                });
                continue;
            }
        };

        let mut skip = |field: SkippedField, value: &str, kind: CoreErrorKind| {
            warn!(
                name = %name,
                field = field.as_str(),
                value = %value,
                code = kind.as_str(),
                "skipping invalid field"
            );
            skipped.push(SkippedEntry {
                name: name.clone(),
                field,
                value: value.to_string(),
                kind,
            });
        };

        for phone in &stored.phones {
            if let Err(err) = record.add_phone(phone) {
                skip(SkippedField::Phone, phone, err.kind());
            }
        }
        for email in &stored.emails {
            if let Err(err) = record.add_email(email) {
                skip(SkippedField::Email, email, err.kind());
            }
        }
        if let Some(birthday) = stored.birthday.as_deref().filter(|raw| !raw.is_empty()) {
            if let Err(err) = record.add_birthday(birthday) {
                skip(SkippedField::Birthday, birthday, err.kind());
            }
        }

        if let Err(err) = book.add_record(record) {
            warn!(name = %name, code = err.kind().as_str(), "skipping contact");
        }
    }

    (book, skipped)
}
