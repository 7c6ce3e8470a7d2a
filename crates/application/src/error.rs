//! Application error types

use mdd_domain::DomainError;
use mdd_domain::response::StatusCode;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
///
/// None of these ever reach the session store: a failed call simply never
/// produces a session to log in with.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Form input was rejected before sending.
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),

    /// The request could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// The backend answered with a non-success status.
    #[error("server responded {status}: {body}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Response body, for diagnostics.
        body: String,
    },

    /// A request payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// A response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApplicationError {
    /// Returns true if the backend rejected the caller's credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status, .. } if status.0 == 401 || status.0 == 403)
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
