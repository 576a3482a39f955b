//! Common error types for ballondor

use thiserror::Error;

/// Common result type for ballondor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the loader, scoring, and API layers
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Prediction could not be computed from the loaded data
    #[error("Prediction error: {0}")]
    Prediction(String),
}
