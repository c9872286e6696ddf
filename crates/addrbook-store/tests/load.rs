use addrbook_core::{AddressBook, CoreErrorKind, Record};
use addrbook_store::document::SkippedField;
use addrbook_store::{load, preserve_unreadable, save, LoadStatus};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_yields_empty_book() {
    let temp = TempDir::new().expect("tempdir");
    let report = load(&temp.path().join("contacts.json"));
    assert_eq!(report.status, LoadStatus::Missing);
    assert!(report.book.is_empty());
}

#[test]
fn corrupt_document_yields_empty_book() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("contacts.json");
    fs::write(&path, "{ \"Ada\": { \"phones\": [").expect("write");

    let report = load(&path);
    assert_eq!(report.status, LoadStatus::Unreadable);
    assert!(report.book.is_empty());
}

#[test]
fn malformed_email_is_dropped_and_siblings_survive() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("contacts.json");
    fs::write(
        &path,
        r#"{
    "Ada": {
        "phones": ["0501234567", "12"],
        "emails": ["ada@example.com", "ada-at-example"],
        "birthday": "10.12.1815"
    },
    "Grace": {
        "phones": [],
        "emails": [],
        "birthday": "31.02.1906"
    },
    "HAL 9000": {
        "phones": ["0501234567"]
    },
    "Linus": {}
}"#,
    )
    .expect("write");

    let report = load(&path);
    assert_eq!(report.status, LoadStatus::Loaded);
    assert_eq!(report.book.len(), 3);

    let ada = report.book.find("Ada").expect("ada");
    assert_eq!(ada.phones().len(), 1);
    assert_eq!(ada.emails().len(), 1);
    assert_eq!(ada.emails()[0].as_str(), "ada@example.com");
    assert!(ada.birthday().is_some());

    let grace = report.book.find("Grace").expect("grace");
    assert!(grace.birthday().is_none());

    assert!(report.book.find("HAL 9000").is_err());
    assert!(report.book.find("Linus").is_ok());

    let mut skipped: Vec<(String, SkippedField, CoreErrorKind)> = report
        .skipped
        .iter()
        .map(|entry| (entry.name.clone(), entry.field, entry.kind))
        .collect();
    skipped.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.as_str().cmp(b.1.as_str())));
    assert_eq!(
        skipped,
        vec![
            ("Ada".to_string(), SkippedField::Email, CoreErrorKind::InvalidEmail),
            ("Ada".to_string(), SkippedField::Phone, CoreErrorKind::InvalidPhone),
            (
                "Grace".to_string(),
                SkippedField::Birthday,
                CoreErrorKind::InvalidBirthday
            ),
            (
                "HAL 9000".to_string(),
                SkippedField::Record,
                CoreErrorKind::InvalidContactName
            ),
        ]
    );
}

#[test]
fn two_digit_year_is_not_reinterpreted() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("contacts.json");
    fs::write(&path, r#"{ "Ada": { "birthday": "10.12.15" } }"#).expect("write");

    let report = load(&path);
    let ada = report.book.find("Ada").expect("ada");
    assert!(ada.birthday().is_none());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].kind, CoreErrorKind::InvalidBirthday);
}

#[test]
fn unreadable_file_is_kept_aside_before_save() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("contacts.json");
    let original = "{ \"Ada\": { \"phones\": [";
    fs::write(&path, original).expect("write");

    let report = load(&path);
    assert_eq!(report.status, LoadStatus::Unreadable);
    let sidecar = preserve_unreadable(&path).expect("preserve");

    let mut book = AddressBook::new();
    book.add_record(Record::new("Grace").expect("record"))
        .expect("add record");
    assert!(save(&book, &path));

    assert_eq!(fs::read_to_string(&sidecar).expect("read"), original);
    let reloaded = load(&path);
    assert_eq!(reloaded.status, LoadStatus::Loaded);
    assert!(reloaded.book.find("Grace").is_ok());
}
