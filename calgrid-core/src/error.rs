//! Error types for calgrid.

use thiserror::Error;

/// Errors that can occur while building calendar views.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event source error: {0}")]
    EventSource(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
