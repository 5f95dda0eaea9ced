use board_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {} {location}", errors.join("; "))]
    Validation {
        errors: Vec<String>,
        location: ErrorLocation,
    },

    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("{op} failed: {message} {location}")]
    Backend {
        op: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot parse error in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    #[track_caller]
    pub fn validation(errors: Vec<String>) -> Self {
        StoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// `entity` is the display name ("Sprint", "Issue"), `id` the missing key.
    #[track_caller]
    pub fn not_found<S: Into<String>>(entity: &'static str, id: S) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<O: Into<String>, M: Into<String>>(op: O, message: M) -> Self {
        StoreError::Backend {
            op: op.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        StoreError::Validation {
            errors: vec![e.client_message()],
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
