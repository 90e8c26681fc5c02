//! Application error types

use postprobe_domain::{DomainError, StatusCode};
use thiserror::Error;

use crate::decode::DecodeError;
use crate::ports::TransportError;

/// Errors surfaced by a verification.
///
/// None of these are recovered locally; each one fails the calling test case.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The request target could not be built.
    #[error("malformed target: {0}")]
    MalformedTarget(#[from] DomainError),

    /// The request could not be sent or the body could not be read.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The body did not decode into the expected shape.
    #[error("decode failure: {0}")]
    Decode(#[from] DecodeError),

    /// The response status differs from the expected one.
    #[error("expected status {expected}, got {actual}")]
    StatusMismatch {
        /// Status the caller asked for.
        expected: StatusCode,
        /// Status the server returned.
        actual: StatusCode,
    },
}

/// Result type alias for verifications.
pub type VerifyResult<T> = Result<T, VerifyError>;
