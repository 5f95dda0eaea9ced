//! REST API error types.
//!
//! Every `/api` failure surfaces as JSON: validation and not-found errors
//! as `{"error": "..."}` and multi-problem issue validation as
//! `{"errors": ["...", ...]}`, with the matching 400/404/500 status.

use board_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Single-message validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Enumerated validation errors (400), used by the issue endpoints
    #[error("Validation failed: {} {location}", errors.join("; "))]
    ValidationList {
        errors: Vec<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

/// `{"error": "..."}` body
#[derive(Debug, Serialize)]
struct SingleErrorBody {
    error: String,
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a store failure to the `{"error": ...}` body shape.
    #[track_caller]
    pub fn from_store(e: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            StoreError::Validation { errors, .. } => ApiError::Validation {
                message: errors.join("; "),
                location,
            },
            other => Self::from_non_validation(other, location),
        }
    }

    /// Map a store failure to the `{"errors": [...]}` body shape used by
    /// the issue create/update endpoints.
    #[track_caller]
    pub fn from_store_list(e: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            StoreError::Validation { errors, .. } => ApiError::ValidationList { errors, location },
            other => Self::from_non_validation(other, location),
        }
    }

    fn from_non_validation(e: StoreError, location: ErrorLocation) -> Self {
        match e {
            StoreError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{entity} {id} not found"),
                location,
            },
            StoreError::Backend { op, message, .. } => {
                log::error!("Backend failure during {op}: {message}");
                ApiError::Internal {
                    message: format!("{op} failed: {message}"),
                    location,
                }
            }
            StoreError::Io { path, source } => {
                log::error!("Snapshot IO failure on {}: {}", path.display(), source);
                ApiError::Internal {
                    message: "snapshot storage failed".to_string(),
                    location,
                }
            }
            StoreError::Corrupt { path, source } => {
                log::error!("Snapshot corrupt at {}: {}", path.display(), source);
                ApiError::Internal {
                    message: "snapshot storage failed".to_string(),
                    location,
                }
            }
            StoreError::Validation { errors, .. } => ApiError::Validation {
                message: errors.join("; "),
                location,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                Json(SingleErrorBody { error: message }),
            )
                .into_response(),
            ApiError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                Json(SingleErrorBody { error: message }),
            )
                .into_response(),
            ApiError::ValidationList { errors, .. } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SingleErrorBody { error: message }),
            )
                .into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
