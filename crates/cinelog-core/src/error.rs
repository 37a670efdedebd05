//! Error types for cinelog.

use thiserror::Error;

/// Result type alias using cinelog's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for cinelog operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected by validation (e.g. rating out of range)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Write rejected because it would duplicate an existing entry
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Message suitable for returning to an API client.
    ///
    /// Validation and conflict errors carry text written for the caller, so
    /// they are returned without the variant prefix.
    pub fn client_message(&self) -> String {
        match self {
            Error::NotFound(msg)
            | Error::InvalidInput(msg)
            | Error::Conflict(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
