//! Error types for lexask.
//!
//! This module defines a unified error enum covering every failure a
//! submission can hit (validation, transport, decode), page wiring problems,
//! and the ambient configuration and I/O errors.

use thiserror::Error;

/// Unified error type for lexask.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// Library code never panics; errors are represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The question was rejected before anything was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network failure or non-success HTTP status from the service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered, but the body was not the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The page is missing an element the controller needs
    #[error("Page error: {0}")]
    Page(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Copyable tag for an [`AppError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
    Validation,
    Transport,
    Decode,
    Page,
    Serialization,
    Other,
}

impl AppError {
    /// The kind of this error, without its detail.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Config(_) => ErrorKind::Config,
            AppError::Io(_) => ErrorKind::Io,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Transport(_) => ErrorKind::Transport,
            AppError::Decode(_) => ErrorKind::Decode,
            AppError::Page(_) => ErrorKind::Page,
            AppError::Serialization(_) => ErrorKind::Serialization,
            AppError::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
