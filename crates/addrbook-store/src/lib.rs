//! JSON persistence for an [`AddressBook`].
//!
//! Loading is resilient: a missing file yields an empty book, a corrupt
//! document is reported and also yields an empty book, and individual
//! invalid values are dropped while the rest of their contact survives.
//! Callers that go on to save after an unreadable load should first call
//! [`preserve_unreadable`] so the original bytes are not lost.

pub mod document;
pub mod error;
pub mod file;
pub mod paths;

use crate::document::{book_from_document, document_from_book, SkippedEntry};
use crate::error::Result;
use addrbook_core::AddressBook;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Unreadable,
}

#[derive(Debug)]
pub struct LoadReport {
    pub book: AddressBook,
    pub status: LoadStatus,
    pub skipped: Vec<SkippedEntry>,
}

pub fn load(path: &Path) -> LoadReport {
    match file::read_document(path) {
        Ok(Some(document)) => {
            let (book, skipped) = book_from_document(document);
            debug!(
                path = %path.display(),
                contacts = book.len(),
                skipped = skipped.len(),
                "contacts loaded"
            );
            LoadReport {
                book,
                status: LoadStatus::Loaded,
                skipped,
            }
        }
        Ok(None) => {
            info!(path = %path.display(), "contacts file not found, starting empty");
            empty_report(LoadStatus::Missing)
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to read contacts file");
            empty_report(LoadStatus::Unreadable)
        }
    }
}

pub fn try_save(book: &AddressBook, path: &Path) -> Result<()> {
    let document = document_from_book(book);
    file::write_document(path, &document)?;
    debug!(path = %path.display(), contacts = book.len(), "contacts saved");
    Ok(())
}

/// Moves a file that [`load`] reported as [`LoadStatus::Unreadable`] out of
/// the way before anything is saved over it.
pub fn preserve_unreadable(path: &Path) -> Result<PathBuf> {
    let sidecar = file::set_aside(path)?;
    warn!(
        path = %path.display(),
        sidecar = %sidecar.display(),
        "unreadable contacts file kept aside"
    );
    Ok(sidecar)
}

/// Best-effort save: failures are logged and reported as `false`.
pub fn save(book: &AddressBook, path: &Path) -> bool {
    match try_save(book, path) {
        Ok(()) => true,
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to save contacts file");
            false
        }
    }
}

fn empty_report(status: LoadStatus) -> LoadReport {
    LoadReport {
        book: AddressBook::new(),
        status,
        skipped: Vec::new(),
    }
}
