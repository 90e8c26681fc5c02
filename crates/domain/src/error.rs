//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The target URI could not be built from the given parts.
    #[error("malformed target: {0}")]
    MalformedTarget(String),

    /// A query parameter name is empty.
    #[error("invalid query parameter: {0}")]
    InvalidQueryParam(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
