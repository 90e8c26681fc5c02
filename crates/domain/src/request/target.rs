//! Request targets and the builder used when query parameters are involved.

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::{QueryParam, QueryParams};
use crate::error::{DomainError, DomainResult};

/// A fully-qualified, validated request target.
///
/// Only absolute `http`/`https` URIs with a host are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTarget {
    url: Url,
}

impl RequestTarget {
    /// Parses an absolute URI such as `https://host/posts/1`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` if the URI does not parse or
    /// is not an `http`/`https` URI with a host.
    pub fn parse(uri: &str) -> DomainResult<Self> {
        let url = Url::parse(uri).map_err(|e| DomainError::MalformedTarget(format!("{e}: {uri}")))?;
        Self::from_url(url)
    }

    fn from_url(url: Url) -> DomainResult<Self> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::MalformedTarget(format!(
                "unsupported scheme '{}': {url}",
                url.scheme()
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(DomainError::MalformedTarget(format!("missing host: {url}")));
        }
        Ok(Self { url })
    }

    /// Returns a copy of this target with one more path segment appended.
    ///
    /// The segment is percent-encoded as a single path component.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` if the target cannot carry path
    /// segments.
    pub fn with_segment(&self, segment: impl fmt::Display) -> DomainResult<Self> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|()| DomainError::MalformedTarget(format!("cannot append path to {}", self.url)))?
            .pop_if_empty()
            .push(&segment.to_string());
        Ok(Self { url })
    }

    /// Returns the target as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the path component.
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Returns the encoded query string, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl FromStr for RequestTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::parse(s)
    }
}

/// Structured builder for targets carrying query parameters.
///
/// # Example
///
/// ```
/// use postprobe_domain::TargetBuilder;
///
/// let target = TargetBuilder::new()
///     .host("jsonplaceholder.typicode.com")
///     .path("/posts")
///     .param("userId", "1")
///     .param("title", "qui est esse")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     target.as_str(),
///     "https://jsonplaceholder.typicode.com/posts?userId=1&title=qui+est+esse"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBuilder {
    scheme: String,
    host: String,
    path: String,
    params: QueryParams,
}

impl Default for TargetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetBuilder {
    /// Creates a builder for `https` with root path and no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: "https".to_string(),
            host: String::new(),
            path: "/".to_string(),
            params: QueryParams::new(),
        }
    }

    /// Sets the scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Sets the host, optionally with a `:port` suffix.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the path. An empty path means `/`.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.is_empty() { "/".to_string() } else { path };
        self
    }

    /// Sets a query parameter, replacing any earlier value for the same key.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(QueryParam::new(key, value));
        self
    }

    /// Builds the target, form-encoding every parameter value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` for an unsupported scheme, a
    /// missing or invalid host, or a relative path, and
    /// `DomainError::InvalidQueryParam` for an empty parameter name.
    pub fn build(&self) -> DomainResult<RequestTarget> {
        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(DomainError::MalformedTarget(format!(
                "unsupported scheme '{}'",
                self.scheme
            )));
        }
        if self.host.trim().is_empty() {
            return Err(DomainError::MalformedTarget("missing host".to_string()));
        }
        if !self.path.starts_with('/') {
            return Err(DomainError::MalformedTarget(format!(
                "path must be absolute: {}",
                self.path
            )));
        }
        if let Some(param) = self.params.iter().find(|p| p.key.is_empty()) {
            return Err(DomainError::InvalidQueryParam(format!(
                "empty name for value '{}'",
                param.value
            )));
        }

        let base = format!("{}://{}{}", self.scheme, self.host, self.path);
        let mut url =
            Url::parse(&base).map_err(|e| DomainError::MalformedTarget(format!("{e}: {base}")))?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(DomainError::MalformedTarget(format!(
                "host or path carries a query or fragment: {base}"
            )));
        }

        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.params
                    .iter()
                    .map(|p| (p.key.as_str(), p.value.as_str())),
            );
        }

        RequestTarget::from_url(url)
    }
}
