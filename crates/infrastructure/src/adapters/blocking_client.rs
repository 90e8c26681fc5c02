//! HTTP transport implementation using reqwest's blocking client.
//!
//! This adapter implements the `HttpTransport` port. Every call blocks the
//! current thread until the response headers arrive; the body is read on
//! demand through `BlockingResponse`.

use std::error::Error as StdError;

use postprobe_application::ports::{HttpTransport, ResponseResource, TransportError};
use postprobe_domain::{GetRequest, StatusCode};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use super::ClientConfig;

/// HTTP transport backed by `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct BlockingHttpTransport {
    client: Client,
    config: ClientConfig,
}

impl BlockingHttpTransport {
    /// Creates a transport with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a transport with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| TransportError::Client(error_chain(&e)))?;

        Ok(Self { client, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        let message = error_chain(error);
        let host = || {
            error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_timeout() {
            return TransportError::Timeout;
        }

        if error.is_connect() {
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return TransportError::TooManyRedirects {
                max: self.config.max_redirects,
            };
        }

        if error.is_body() || error.is_decode() {
            return TransportError::Body(message);
        }

        TransportError::Other(message)
    }
}

impl HttpTransport for BlockingHttpTransport {
    type Response = BlockingResponse;

    fn execute(&self, request: &GetRequest) -> Result<BlockingResponse, TransportError> {
        let response = self
            .client
            .get(request.target.as_str())
            .send()
            .map_err(|e| {
                let error = self.map_error(&e);
                tracing::debug!(uri = %request.target, error = %error, "request failed");
                error
            })?;

        Ok(BlockingResponse::new(response))
    }
}

/// A response from `BlockingHttpTransport`.
///
/// Holds the reqwest response, and with it the pooled connection, until the
/// body is read or the response is released.
#[derive(Debug)]
pub struct BlockingResponse {
    status: StatusCode,
    content_type: Option<String>,
    inner: Option<Response>,
}

impl BlockingResponse {
    fn new(response: Response) -> Self {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self {
            status: StatusCode::new(response.status().as_u16()),
            content_type,
            inner: Some(response),
        }
    }

    /// Returns true once the underlying response has been consumed or dropped.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.inner.is_none()
    }
}

impl ResponseResource for BlockingResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn content_type(&self) -> Option<String> {
        self.content_type.clone()
    }

    fn read_body(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        let response = self.inner.take().ok_or(TransportError::Released)?;
        let bytes = response
            .bytes()
            .map_err(|e| TransportError::Body(error_chain(&e)))?;
        Ok(Some(bytes.to_vec()))
    }

    fn release(&mut self) {
        self.inner = None;
    }
}

/// Joins an error with all of its sources.
///
/// reqwest keeps the interesting part (for example "Connection refused")
/// in the source chain rather than in its own message.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
