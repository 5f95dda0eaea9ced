use thiserror::Error;

/// Startup-time failures (config, logger, socket). Request-time errors are
/// `api::error::ApiError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logger initialization failed: {message}")]
    Logger { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
