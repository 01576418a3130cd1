//! Core error types for storio-rs.
//!
//! This module provides the error enum [`StorioError`] covering query
//! validation failures, configuration errors, and I/O errors.

use thiserror::Error;

/// The message carried by both query validation errors.
pub const INVALID_QUERY_MESSAGE: &str = "Query is null or empty";

/// The primary error type for storio-rs.
///
/// Query validation errors carry a fixed message and never wrap an
/// underlying cause, so [`std::error::Error::source`] returns `None` for them.
#[derive(Error, Debug)]
pub enum StorioError {
    // ── Query validation ─────────────────────────────────────────────

    /// The query text was absent.
    #[error("{}", INVALID_QUERY_MESSAGE)]
    NullQuery,

    /// The query text was an empty string.
    #[error("{}", INVALID_QUERY_MESSAGE)]
    EmptyQuery,

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration document could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// A configuration file could not be read.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StorioError {
    /// Returns `true` if this error is one of the query text validation failures.
    pub const fn is_invalid_query(&self) -> bool {
        matches!(self, Self::NullQuery | Self::EmptyQuery)
    }
}

/// A convenience type alias for `Result<T, StorioError>`.
pub type StorioResult<T> = Result<T, StorioError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_null_query_message_and_no_source() {
        let err = StorioError::NullQuery;
        assert_eq!(err.to_string(), INVALID_QUERY_MESSAGE);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_empty_query_message_and_no_source() {
        let err = StorioError::EmptyQuery;
        assert_eq!(err.to_string(), "Query is null or empty");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_is_invalid_query() {
        assert!(StorioError::NullQuery.is_invalid_query());
        assert!(StorioError::EmptyQuery.is_invalid_query());
        assert!(!StorioError::ConfigurationError("x".into()).is_invalid_query());
    }

    #[test]
    fn test_configuration_error_display() {
        let err = StorioError::ConfigurationError("bad level".into());
        assert_eq!(err.to_string(), "Configuration error: bad level");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StorioError = io_err.into();
        assert!(!err.is_invalid_query());
        assert!(err.to_string().contains("file missing"));
        assert!(err.source().is_some());
    }
}
