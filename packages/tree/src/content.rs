//! File contents and their normalization to bytes.

use bytes::Bytes;

use crate::Error;

/// Payload written in place of contents that are neither text nor bytes.
pub const UNSUPPORTED_CONTENTS_MESSAGE: &str =
    "Unsupported file contents. Only string or Uint8Array is accepted.";

/// A scalar leaf value that has no file representation.
///
/// Listings decoded from loosely typed sources (JSON, script bindings) can
/// carry numbers, booleans or nulls where a file body was expected. They are
/// kept around so strict callers can report what they found.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    /// Short name of the scalar's type, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Integer(_) => "integer",
            Scalar::Float(_) => "float",
        }
    }
}

/// The raw contents of a single file in a listing.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Text, stored as UTF-8.
    Text(String),
    /// Binary data, passed through untouched.
    Bytes(Bytes),
    /// Anything else. Normalizes to [`UNSUPPORTED_CONTENTS_MESSAGE`].
    Unsupported(Scalar),
}

impl Content {
    /// Check if these contents have a real byte representation.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Content::Unsupported(_))
    }

    /// Short name of the content's type.
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Text(_) => "text",
            Content::Bytes(_) => "bytes",
            Content::Unsupported(scalar) => scalar.kind(),
        }
    }

    /// Normalize to file bytes.
    ///
    /// Bytes are shared, not copied. Unsupported contents become the
    /// diagnostic message; this never fails.
    pub fn to_bytes(&self) -> Bytes {
        match self {
            Content::Text(text) => Bytes::copy_from_slice(text.as_bytes()),
            Content::Bytes(bytes) => bytes.clone(),
            Content::Unsupported(_) => Bytes::from_static(UNSUPPORTED_CONTENTS_MESSAGE.as_bytes()),
        }
    }

    /// Like [`Content::to_bytes`], but consumes the contents to avoid a copy.
    pub fn into_bytes(self) -> Bytes {
        match self {
            Content::Text(text) => Bytes::from(text),
            Content::Bytes(bytes) => bytes,
            Content::Unsupported(_) => Bytes::from_static(UNSUPPORTED_CONTENTS_MESSAGE.as_bytes()),
        }
    }

    /// Normalize to file bytes, rejecting unsupported contents.
    ///
    /// `path` is only used to label the error.
    pub fn try_to_bytes(&self, path: &str) -> Result<Bytes, Error> {
        match self {
            Content::Unsupported(scalar) => Err(Error::UnsupportedContent {
                path: path.to_string(),
                kind: scalar.kind(),
            }),
            _ => Ok(self.to_bytes()),
        }
    }
}

impl From<String> for Content {
    fn from(v: String) -> Self {
        Content::Text(v)
    }
}

impl From<&str> for Content {
    fn from(v: &str) -> Self {
        Content::Text(v.to_string())
    }
}

impl From<Bytes> for Content {
    fn from(v: Bytes) -> Self {
        Content::Bytes(v)
    }
}

impl From<Vec<u8>> for Content {
    fn from(v: Vec<u8>) -> Self {
        Content::Bytes(Bytes::from(v))
    }
}

impl From<&[u8]> for Content {
    fn from(v: &[u8]) -> Self {
        Content::Bytes(Bytes::copy_from_slice(v))
    }
}

impl From<Scalar> for Content {
    fn from(v: Scalar) -> Self {
        Content::Unsupported(v)
    }
}

impl From<bool> for Content {
    fn from(v: bool) -> Self {
        Content::Unsupported(Scalar::Bool(v))
    }
}

impl From<i64> for Content {
    fn from(v: i64) -> Self {
        Content::Unsupported(Scalar::Integer(v))
    }
}

impl From<i32> for Content {
    fn from(v: i32) -> Self {
        Content::Unsupported(Scalar::Integer(v as i64))
    }
}

impl From<f64> for Content {
    fn from(v: f64) -> Self {
        Content::Unsupported(Scalar::Float(v))
    }
}
