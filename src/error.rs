//! Custom error types for Centime
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Centime operations
#[derive(Error, Debug)]
pub enum CentimeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Ambiguous identifier errors (a prefix matched more than one entity)
    #[error("{entity_type} identifier '{identifier}' is ambiguous ({count} matches)")]
    Ambiguous {
        entity_type: &'static str,
        identifier: String,
        count: usize,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CentimeError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create an "ambiguous identifier" error for expenses
    pub fn expense_ambiguous(identifier: impl Into<String>, count: usize) -> Self {
        Self::Ambiguous {
            entity_type: "Expense",
            identifier: identifier.into(),
            count,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CentimeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CentimeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Centime operations
pub type CentimeResult<T> = Result<T, CentimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CentimeError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CentimeError::expense_not_found("exp-1234");
        assert_eq!(err.to_string(), "Expense not found: exp-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ambiguous_error() {
        let err = CentimeError::expense_ambiguous("exp-1", 3);
        assert_eq!(
            err.to_string(),
            "Expense identifier 'exp-1' is ambiguous (3 matches)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let centime_err: CentimeError = io_err.into();
        assert!(matches!(centime_err, CentimeError::Io(_)));
    }
}
