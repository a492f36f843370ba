//! Codec abstraction: the decode/encode pair applied before a write.
//!
//! This module provides:
//! - `Codec`: Trait for the two-step transform
//! - `RawCodec`: The identity codec used by default
//! - `FnCodec`: A codec built from a pair of functions

use std::sync::Arc;

mod func;
mod raw;

pub use func::FnCodec;
pub use raw::RawCodec;

/// A pluggable two-step transform applied to content before it is persisted.
///
/// `decode` turns the caller's content into an intermediate value and
/// `encode` turns that value into the text that ends up in the file. The
/// output writer never inspects either value, and errors from both steps are
/// handed back to the caller unchanged.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use fileout::Codec;
///
/// #[derive(Debug)]
/// struct Upper;
///
/// impl<'a> Codec<&'a str> for Upper {
///     type Decoded = String;
///     type Encoded = String;
///     type Error = Infallible;
///
///     fn decode(&self, content: &'a str) -> Result<String, Infallible> {
///         Ok(content.to_owned())
///     }
///
///     fn encode(&self, decoded: String) -> Result<String, Infallible> {
///         Ok(decoded.to_uppercase())
///     }
/// }
///
/// assert_eq!(Upper.transform("abc").unwrap(), "ABC");
/// ```
pub trait Codec<C> {
    /// Intermediate value produced by `decode`.
    type Decoded;
    /// Text written to the destination.
    type Encoded: AsRef<str>;
    /// Error raised by either step.
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, content: C) -> Result<Self::Decoded, Self::Error>;

    fn encode(&self, decoded: Self::Decoded) -> Result<Self::Encoded, Self::Error>;

    /// Run `decode` then `encode`.
    fn transform(&self, content: C) -> Result<Self::Encoded, Self::Error> {
        let decoded = self.decode(content)?;
        self.encode(decoded)
    }
}

impl<C, K> Codec<C> for &K
where
    K: Codec<C> + ?Sized,
{
    type Decoded = K::Decoded;
    type Encoded = K::Encoded;
    type Error = K::Error;

    fn decode(&self, content: C) -> Result<Self::Decoded, Self::Error> {
        (**self).decode(content)
    }

    fn encode(&self, decoded: Self::Decoded) -> Result<Self::Encoded, Self::Error> {
        (**self).encode(decoded)
    }
}

impl<C, K> Codec<C> for Arc<K>
where
    K: Codec<C> + ?Sized,
{
    type Decoded = K::Decoded;
    type Encoded = K::Encoded;
    type Error = K::Error;

    fn decode(&self, content: C) -> Result<Self::Decoded, Self::Error> {
        (**self).decode(content)
    }

    fn encode(&self, decoded: Self::Decoded) -> Result<Self::Encoded, Self::Error> {
        (**self).encode(decoded)
    }
}
