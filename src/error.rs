//! Error types for chatter.

use thiserror::Error;

/// Common error type for chatter.
#[derive(Error, Debug)]
pub enum ChatterError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Persisted message unit could not be decoded.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for chatter operations.
pub type Result<T> = std::result::Result<T, ChatterError>;
