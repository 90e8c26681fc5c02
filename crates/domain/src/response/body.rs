//! Decoded response bodies.

use crate::post::Post;

/// Expected JSON shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyShape {
    /// A single JSON object.
    Single,
    /// A JSON array of objects.
    #[default]
    Sequence,
}

/// A response body after charset and JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedBody {
    /// The response carried no body.
    Absent,
    /// A single post.
    Single(Post),
    /// A sequence of posts, possibly empty.
    Sequence(Vec<Post>),
}

impl DecodedBody {
    /// Returns the post shown in diagnostics: the single post, or the first
    /// element of a sequence.
    #[must_use]
    pub fn first(&self) -> Option<&Post> {
        match self {
            Self::Absent => None,
            Self::Single(post) => Some(post),
            Self::Sequence(posts) => posts.first(),
        }
    }

    /// Returns every decoded post.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Absent => &[],
            Self::Single(post) => std::slice::from_ref(post),
            Self::Sequence(posts) => posts,
        }
    }

    /// Returns true if no body was present.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}
