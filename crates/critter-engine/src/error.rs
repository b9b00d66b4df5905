//! Error types for critter-engine operations.

use thiserror::Error;

/// Errors that can occur while parsing range expressions or catalog data.
#[derive(Error, Debug)]
pub enum CritterError {
    /// A range expression or time token does not have the expected shape
    /// (wrong number of `-` parts, missing `am`/`pm`, non-numeric hour).
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A month token did not match any of the twelve month keys.
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The catalog document was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout critter-engine.
pub type Result<T> = std::result::Result<T, CritterError>;
