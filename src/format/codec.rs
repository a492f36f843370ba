//! Codecs backed by the built-in data formats.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::{FormatError, FormatKind, deserialize, serialize};
use crate::codec::Codec;

/// Transcodes text from one data format into another.
///
/// `decode` parses the content as `from`, `encode` renders it as `to`.
/// `Plaintext` to `Plaintext` leaves text untouched.
///
/// # Example
///
/// ```rust
/// use fileout::{Codec, FormatCodec, FormatKind};
///
/// let codec = FormatCodec::new(FormatKind::Json, FormatKind::Json);
/// let pretty = codec.transform(r#"{"a":1}"#).unwrap();
/// assert_eq!(pretty, "{\n  \"a\": 1\n}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatCodec {
    from: FormatKind,
    to: FormatKind,
}

impl FormatCodec {
    pub fn new(from: FormatKind, to: FormatKind) -> Self {
        Self { from, to }
    }

    /// Format the content is parsed as.
    pub fn from_kind(&self) -> FormatKind {
        self.from
    }

    /// Format written to the destination.
    pub fn to_kind(&self) -> FormatKind {
        self.to
    }

    /// Fail early if either side needs a feature that is not compiled in.
    pub fn check_available(&self) -> Result<(), FormatError> {
        for kind in [self.from, self.to] {
            if !kind.is_available() {
                return Err(FormatError::NotEnabled(kind));
            }
        }
        Ok(())
    }
}

impl<C: AsRef<str>> Codec<C> for FormatCodec {
    type Decoded = Value;
    type Encoded = String;
    type Error = FormatError;

    fn decode(&self, content: C) -> Result<Value, FormatError> {
        deserialize(self.from, content.as_ref())
    }

    fn encode(&self, decoded: Value) -> Result<String, FormatError> {
        serialize(self.to, &decoded)
    }
}

/// Serializes typed values into a data format.
///
/// `decode` converts any `Serialize` value into a generic value, `encode`
/// renders it as the configured format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerdeCodec {
    kind: FormatKind,
}

impl SerdeCodec {
    pub fn new(kind: FormatKind) -> Self {
        Self { kind }
    }

    /// Pick the format from the destination's file extension.
    ///
    /// Returns `None` when the extension is missing or not recognised.
    pub fn for_path(path: impl AsRef<Path>) -> Option<Self> {
        FormatKind::from_path(path.as_ref()).map(Self::new)
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }
}

impl<T: Serialize> Codec<T> for SerdeCodec {
    type Decoded = Value;
    type Encoded = String;
    type Error = FormatError;

    fn decode(&self, content: T) -> Result<Value, FormatError> {
        serde_json::to_value(content).map_err(|e| FormatError::Serde(Box::new(e)))
    }

    fn encode(&self, decoded: Value) -> Result<String, FormatError> {
        serialize(self.kind, &decoded)
    }
}
