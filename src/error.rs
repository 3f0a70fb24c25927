//! Error types for the Talentrank library.
//!
//! All fallible operations return [`Result`], whose error side is
//! [`TalentrankError`]. Numeric degeneracies (empty text, empty skill sets,
//! zero-length vectors) are not errors: they resolve to a score of `0.0`.
//! Errors are reserved for invalid input records and invalid configuration.
//!
//! # Examples
//!
//! ```
//! use talentrank::error::{Result, TalentrankError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TalentrankError::invalid_config("weights must sum to 1.0"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Talentrank operations.
#[derive(Error, Debug)]
pub enum TalentrankError {
    /// I/O errors (reading job or candidate files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required field on an input record is missing or blank
    #[error("Validation error: {record} is missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// Other invalid input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid weighting policy or recommendation settings
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors carrying caller-side context
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TalentrankError.
pub type Result<T> = std::result::Result<T, TalentrankError>;

impl TalentrankError {
    /// Create a missing-field error for the given record kind.
    pub fn missing_field(record: &'static str, field: &'static str) -> Self {
        TalentrankError::MissingField { record, field }
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        TalentrankError::Validation(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TalentrankError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TalentrankError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TalentrankError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TalentrankError::missing_field("job", "job_id");
        assert_eq!(
            error.to_string(),
            "Validation error: job is missing required field `job_id`"
        );

        let error = TalentrankError::invalid_config("bad weights");
        assert_eq!(error.to_string(), "Invalid configuration: bad weights");

        let error = TalentrankError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TalentrankError::from(io_error);

        match error {
            TalentrankError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_keeps_context() {
        let error = TalentrankError::from(
            anyhow::anyhow!("file missing").context("failed to read jobs.json"),
        );
        assert_eq!(error.to_string(), "failed to read jobs.json: file missing");
    }
}
