use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid issue type: {value} {location}")]
    InvalidIssueType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid issue status: {value} {location}")]
    InvalidIssueStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid issue priority: {value} {location}")]
    InvalidIssuePriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sprint state: {value} {location}")]
    InvalidSprintState {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message as shown to API clients, without the source location
    pub fn client_message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidIssueType { value, .. } => {
                format!("'{value}' is not a known issue type")
            }
            CoreError::InvalidIssueStatus { value, .. } => {
                format!("'{value}' is not a known issue status")
            }
            CoreError::InvalidIssuePriority { value, .. } => {
                format!("'{value}' is not a known issue priority")
            }
            CoreError::InvalidSprintState { value, .. } => {
                format!("'{value}' is not a known sprint state")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
