//! Error types for the interest engine

use thiserror::Error;

/// Interest engine error
#[derive(Debug, Error)]
pub enum Error {
    /// A `min` bound exceeds its `max` bound
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Requested amount is malformed or outside the desk bounds
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Requested duration is outside the desk bounds
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Factor computed over a zero-width range
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Result cannot be represented in the output type
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
