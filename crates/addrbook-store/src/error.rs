use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Json,
    MissingHomeDir,
    InvalidDataPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Json(_) => StoreErrorKind::Json,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
        }
    }
}
