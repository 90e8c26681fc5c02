//! HTTP transport port

use postprobe_domain::{GetRequest, StatusCode};
use thiserror::Error;

/// Errors raised while sending a request or reading its body.
///
/// There is no retry: every variant ends the verification immediately.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason, TLS included.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport's default timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured redirect limit.
        max: usize,
    },

    /// The response body could not be read.
    #[error("failed to read body: {0}")]
    Body(String),

    /// The response was used after it had been released.
    #[error("response already released")]
    Released,

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// A live HTTP response holding its underlying connection.
///
/// Implementations must give the connection back when `release` is called.
/// Callers normally hold the resource inside a
/// [`ResponseGuard`](crate::guard::ResponseGuard), which releases it on
/// every exit path.
pub trait ResponseResource {
    /// Returns the response status.
    fn status(&self) -> StatusCode;

    /// Returns the `Content-Type` header value, if present.
    fn content_type(&self) -> Option<String>;

    /// Reads the whole body into memory.
    ///
    /// Returns `Ok(None)` when the response carries no body. The body can
    /// only be read once.
    ///
    /// # Errors
    ///
    /// Returns an error if the body stream fails or the response was already
    /// released.
    fn read_body(&mut self) -> Result<Option<Vec<u8>>, TransportError>;

    /// Releases the response and its connection. Must be idempotent.
    fn release(&mut self);
}

/// Port for executing HTTP GET requests synchronously.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpTransport {
    /// Response type produced by this transport.
    type Response: ResponseResource;

    /// Sends the request and blocks until response headers arrive.
    ///
    /// # Errors
    ///
    /// Returns an error on DNS, connection, TLS or protocol failures.
    fn execute(&self, request: &GetRequest) -> Result<Self::Response, TransportError>;
}
