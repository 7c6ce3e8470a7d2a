//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required form field is missing or blank.
    #[error("field is required: {0}")]
    Required(&'static str),

    /// A field is shorter than its minimum length.
    #[error("field {field} must be at least {min} characters")]
    TooShort {
        /// The offending field.
        field: &'static str,
        /// Minimum number of characters.
        min: usize,
    },

    /// A field is not a well-formed email address.
    #[error("invalid email address in field {0}")]
    InvalidEmail(&'static str),

    /// A password does not satisfy the strength rules.
    #[error("password must contain a digit, a lowercase letter, an uppercase letter and a symbol")]
    WeakPassword,

    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
