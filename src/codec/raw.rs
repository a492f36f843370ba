//! Identity codec.

use std::convert::Infallible;

use super::Codec;

/// The pass-through codec: `decode` and `encode` both return their input.
///
/// This is the default codec of [`OutputWriter`](crate::OutputWriter). It is
/// a unit value, so every writer gets its own immutable instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodec;

impl<C: AsRef<str>> Codec<C> for RawCodec {
    type Decoded = C;
    type Encoded = C;
    type Error = Infallible;

    fn decode(&self, content: C) -> Result<C, Infallible> {
        Ok(content)
    }

    fn encode(&self, decoded: C) -> Result<C, Infallible> {
        Ok(decoded)
    }
}
