//! The `Post` record served by the fixture.

use serde::{Deserialize, Serialize};

/// A single post as returned by the `/posts` endpoints.
///
/// Fields are serialized in declaration order with camelCase names, matching
/// the wire format. Unknown fields are ignored when decoding; every declared
/// field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier of the user owning the post.
    pub user_id: i64,
    /// Identifier of the post itself.
    pub id: i64,
    /// Short title.
    pub title: String,
    /// Post content.
    pub body: String,
}

impl Post {
    /// Creates a new post.
    #[must_use]
    pub fn new(user_id: i64, id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
