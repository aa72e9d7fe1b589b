//! Unified error types for the farmstead persistence layer.
//!
//! Constraint violations (uniqueness, CHECK, not-null, foreign-key) surface
//! from the engine as [`Error::Database`] and are treated as hard failures;
//! there is no retry or recovery layer.

use thiserror::Error;

/// All errors that can occur in the farmstead persistence layer
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// A value was rejected before it reached the database
    #[error("Invalid value for {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Description of what went wrong
        message: String,
    },

    /// Database operation failed, including engine constraint violations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error, typically while reading configuration files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
