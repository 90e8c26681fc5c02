//! Where the fixture lives.

/// Scheme and host of the fake-data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// `http` or `https`.
    pub scheme: String,
    /// Host name, optionally with a `:port` suffix.
    pub host: String,
}

impl FixtureConfig {
    /// Public jsonplaceholder host.
    pub const DEFAULT_HOST: &'static str = "jsonplaceholder.typicode.com";

    /// Points the fixture somewhere else, e.g. a local mock server.
    #[must_use]
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Returns `scheme://host` without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::new("https", Self::DEFAULT_HOST)
    }
}
