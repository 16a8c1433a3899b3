//! # Error Types
//!
//! Domain-specific error types for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelf-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Per-field form validation failures             │
//! │                                                                         │
//! │  shelf-client errors (separate crate)                                  │
//! │  └── ClientError      - HTTP transport / status / decode failures      │
//! │                                                                         │
//! │  Store outcome (in app)                                                │
//! │  └── Outcome::Failed  - What the views see (a status message)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, id, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record with this id is held in the local list.
    #[error("Book with ID {0} not found")]
    BookNotFound(String),

    /// A category string outside the fixed set.
    #[error("Unknown category: '{0}'. Valid options: Fiction, Non-Fiction, Science")]
    UnknownCategory(String),

    /// A filter selector outside all/active/deactivated.
    #[error("Unknown filter: '{0}'. Valid options: all, active, deactivated")]
    UnknownFilter(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form validation errors.
///
/// `field` carries the label shown next to the input, so `Display` renders
/// the exact text the form puts under it (e.g. "Title is required").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field may only contain the digits 0-9.
    #[error("{field} must contain only numbers")]
    DigitsOnly { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// The backend call behind the form failed.
    #[error("Something went wrong")]
    SubmitFailed,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "Title".to_string(),
        };
        assert_eq!(err.to_string(), "Title is required");

        let err = ValidationError::DigitsOnly {
            field: "ISBN".to_string(),
        };
        assert_eq!(err.to_string(), "ISBN must contain only numbers");

        assert_eq!(ValidationError::SubmitFailed.to_string(), "Something went wrong");
    }

    #[test]
    fn test_not_found_message() {
        let err = CoreError::BookNotFound("b-42".to_string());
        assert_eq!(err.to_string(), "Book with ID b-42 not found");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "Author".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
