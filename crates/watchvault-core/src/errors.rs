//! Unified error type for Watchvault core
//!
//! Each concern has its own precise error enum (`ValidationError`,
//! `OrderingError`, `StoreError`, `ImportError`, `ConfigError`). Operations
//! that cross a boundary, such as reading a wordlist file and then validating
//! its contents, return `WatchvaultError` so both failure kinds fit one `?`.

use crate::identity::ValidationError;
use serde::{Deserialize, Serialize};

/// Unified error type for operations that span several concerns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum WatchvaultError {
    /// Invalid input or data
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl WatchvaultError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for Watchvault operations
pub type Result<T> = std::result::Result<T, WatchvaultError>;

impl From<ValidationError> for WatchvaultError {
    fn from(err: ValidationError) -> Self {
        Self::invalid(err.to_string())
    }
}

impl From<std::io::Error> for WatchvaultError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = WatchvaultError::invalid("test message");
        assert!(matches!(err, WatchvaultError::Invalid { .. }));
        assert_eq!(err.to_string(), "Invalid: test message");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert!(matches!(
            WatchvaultError::from(io_err),
            WatchvaultError::NotFound { .. }
        ));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            WatchvaultError::from(io_err),
            WatchvaultError::Internal { .. }
        ));
    }

    #[test]
    fn test_word_count_error_keeps_message() {
        let err = WatchvaultError::from(ValidationError::WordCount {
            expected: 12,
            actual: 3,
        });
        assert!(err.to_string().contains("12 words"));
    }
}
