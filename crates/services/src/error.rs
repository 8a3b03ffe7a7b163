//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while fetching the lessons dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonsError {
    #[error("lessons request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unable to read lessons file: {0}")]
    Io(#[from] std::io::Error),
    #[error("lessons data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LessonsError {
    /// Status code to surface on the error page; upstream status when known.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::HttpStatus(status) => status.as_u16(),
            Self::Http(err) => err.status().map_or(500, |status| status.as_u16()),
            Self::Io(_) | Self::Parse(_) => 500,
        }
    }
}

/// Errors emitted by `ProgressStore` mutations.
///
/// Read-side problems (corrupt or unreadable stored progress) never surface
/// here; `ProgressStore::initialize` absorbs them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error("invalid lessons location: {0}")]
    Location(#[from] url::ParseError),
}
