//! lexask core library
//!
//! This crate provides the foundational utilities shared by the lexask crates:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, StaleResponses};
pub use error::{AppError, AppResult, ErrorKind};
