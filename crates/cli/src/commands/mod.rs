//! Command handlers for the lexask CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod search;
pub mod shell;
pub mod status;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use search::{BatchSearchCommand, SearchCommand};
pub use shell::ShellCommand;
pub use status::StatusCommand;
