//! Core error types for the chainreg seeding engine.
//!
//! This module defines transport-agnostic error types. Client crates convert
//! their own failures (HTTP, file system, etc.) into these types.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the seeding engine.
///
/// Any `Err` surfaced to the orchestrator aborts the run. Per-record failures
/// are never represented here; they are recorded as
/// [`ItemFailure`](crate::seed::ItemFailure) data instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read record source: {0}")]
    SourceIo(String),

    #[error("Failed to parse {collection} records: {message}")]
    SourceParse { collection: String, message: String },

    #[error("Registry request failed: {0}")]
    Registry(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether this error was caused by cooperative cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::SourceIo(err.to_string())
    }
}
