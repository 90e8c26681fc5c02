//! Requests against the `/posts` resource.

use postprobe_domain::{DomainResult, GetRequest, TargetBuilder};

use crate::config::FixtureConfig;

/// Builds requests for the `/posts` endpoints of a fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsEndpoint {
    config: FixtureConfig,
}

impl PostsEndpoint {
    /// Path of the collection.
    pub const PATH: &'static str = "/posts";

    /// Creates the endpoint for a fixture.
    #[must_use]
    pub const fn new(config: FixtureConfig) -> Self {
        Self { config }
    }

    /// `GET /posts`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` if the fixture host is invalid.
    pub fn all(&self) -> DomainResult<GetRequest> {
        GetRequest::parse(&format!("{}{}", self.config.base_url(), Self::PATH))
    }

    /// `GET /posts/{id}`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` if the fixture host is invalid.
    pub fn by_id(&self, id: u32) -> DomainResult<GetRequest> {
        self.all()?.target.with_segment(id).map(GetRequest::new)
    }

    /// `GET /posts?userId={user_id}`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` if the fixture host is invalid.
    pub fn by_user(&self, user_id: u32) -> DomainResult<GetRequest> {
        self.query(&[("userId", user_id.to_string().as_str())])
    }

    /// `GET /posts?userId={user_id}&title={title}` with `title` encoded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTarget` if the fixture host is invalid.
    pub fn by_user_and_title(&self, user_id: u32, title: &str) -> DomainResult<GetRequest> {
        self.query(&[("userId", user_id.to_string().as_str()), ("title", title)])
    }

    /// `GET /posts` with arbitrary query parameters, in the given order.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the fixture host or a parameter is invalid.
    pub fn query(&self, params: &[(&str, &str)]) -> DomainResult<GetRequest> {
        params
            .iter()
            .fold(
                TargetBuilder::new()
                    .scheme(self.config.scheme.as_str())
                    .host(self.config.host.as_str())
                    .path(Self::PATH),
                |builder, (key, value)| builder.param(*key, *value),
            )
            .build()
            .map(GetRequest::new)
    }
}
