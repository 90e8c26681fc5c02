//! The request descriptor handed to the verifier.

use std::fmt;

use super::{HttpMethod, RequestTarget};
use crate::error::DomainResult;

/// An HTTP GET request against a validated target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    /// HTTP method, always `GET`.
    pub method: HttpMethod,
    /// Fully-qualified target.
    pub target: RequestTarget,
}

impl GetRequest {
    /// Wraps an already-built target.
    #[must_use]
    pub const fn new(target: RequestTarget) -> Self {
        Self {
            method: HttpMethod::Get,
            target,
        }
    }

    /// Builds a request from a plain absolute URI.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` if the URI is not valid.
    pub fn parse(uri: &str) -> DomainResult<Self> {
        RequestTarget::parse(uri).map(Self::new)
    }

    /// Renders the request line, e.g. `GET https://host/posts HTTP/1.1`.
    #[must_use]
    pub fn request_line(&self) -> String {
        format!("{} {} HTTP/1.1", self.method, self.target)
    }
}

impl fmt::Display for GetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.target)
    }
}

impl From<RequestTarget> for GetRequest {
    fn from(target: RequestTarget) -> Self {
        Self::new(target)
    }
}
