//! Body decoding: charset selection, text decoding, then JSON.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, UTF_8};
use postprobe_domain::{BodyShape, DecodedBody, Post};
use thiserror::Error;

/// Errors raised while turning body bytes into posts.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The declared charset is not one the harness decodes.
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// The bytes are not valid text in the declared charset.
    #[error("body is not valid {charset}: {message}")]
    InvalidText {
        /// Charset used for decoding.
        charset: Charset,
        /// Position or cause of the failure.
        message: String,
    },

    /// The text is not JSON of the expected shape.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

/// A character encoding resolved from a WHATWG label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Default for Charset {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl Charset {
    /// Resolves a charset label such as `utf-8`, `windows-1252` or `UTF-16`.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::UnsupportedCharset` for unknown labels.
    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        let label = label.trim().trim_matches('"');
        Encoding::for_label(label.as_bytes())
            .map(Self)
            .ok_or_else(|| DecodeError::UnsupportedCharset(label.to_ascii_lowercase()))
    }

    /// Picks the charset declared by a `Content-Type` value, or the default.
    ///
    /// An unparseable header is treated as if no charset had been declared.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::UnsupportedCharset` if the declared charset is
    /// unknown.
    pub fn from_content_type(content_type: Option<&str>) -> Result<Self, DecodeError> {
        let Some(raw) = content_type else {
            return Ok(Self::default());
        };
        match raw.parse::<mime::Mime>() {
            Ok(parsed) => parsed
                .get_param(mime::CHARSET)
                .map_or_else(|| Ok(Self::default()), |name| Self::from_label(name.as_str())),
            Err(e) => {
                tracing::debug!(content_type = raw, error = %e, "unparseable content type, using default charset");
                Ok(Self::default())
            }
        }
    }

    /// Returns the underlying encoding.
    #[must_use]
    pub const fn encoding(self) -> &'static Encoding {
        self.0
    }

    /// Decodes bytes into text. A byte order mark is not stripped.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidText` if the bytes are malformed in this
    /// charset.
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
            .ok_or_else(|| DecodeError::InvalidText {
                charset: self,
                message: format!("malformed byte sequence in {} bytes", bytes.len()),
            })
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

/// Decodes body bytes using the charset declared by `content_type`.
///
/// # Errors
///
/// Returns an error if the charset is unsupported or the bytes are invalid.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    Charset::from_content_type(content_type)?.decode(bytes)
}

/// Decodes JSON text into posts of the expected shape.
///
/// # Errors
///
/// Returns `DecodeError::Json` on malformed JSON or a shape mismatch.
pub fn decode_posts(text: &str, shape: BodyShape) -> Result<DecodedBody, DecodeError> {
    Ok(match shape {
        BodyShape::Single => DecodedBody::Single(serde_json::from_str::<Post>(text)?),
        BodyShape::Sequence => DecodedBody::Sequence(serde_json::from_str::<Vec<Post>>(text)?),
    })
}

/// Decodes an optional raw body. A missing or empty body yields
/// `DecodedBody::Absent`.
///
/// # Errors
///
/// Propagates charset and JSON decoding failures.
pub fn decode_body(
    bytes: Option<&[u8]>,
    content_type: Option<&str>,
    shape: BodyShape,
) -> Result<DecodedBody, DecodeError> {
    match bytes {
        None | Some([]) => Ok(DecodedBody::Absent),
        Some(bytes) => decode_posts(&decode_text(bytes, content_type)?, shape),
    }
}
