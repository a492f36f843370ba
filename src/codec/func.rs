//! Codecs built from a pair of functions.
//!
//! This lets callers plug in a transform without declaring a type for it.

use std::fmt;
use std::marker::PhantomData;

use super::Codec;

/// A codec whose steps are two function values.
///
/// # Example
///
/// ```rust
/// use fileout::{Codec, FnCodec};
///
/// let trim = FnCodec::new(
///     |s: &str| Ok::<_, std::fmt::Error>(s.trim().to_owned()),
///     |s: String| Ok::<_, std::fmt::Error>(format!("{s}\n")),
/// );
///
/// assert_eq!(trim.transform("  hi  ").unwrap(), "hi\n");
/// ```
pub struct FnCodec<D, E, Err> {
    decode_fn: D,
    encode_fn: E,
    _error: PhantomData<fn() -> Err>,
}

impl<D, E, Err> FnCodec<D, E, Err> {
    /// Create a codec from a decode function and an encode function.
    pub fn new(decode_fn: D, encode_fn: E) -> Self {
        Self {
            decode_fn,
            encode_fn,
            _error: PhantomData,
        }
    }
}

impl<D: Clone, E: Clone, Err> Clone for FnCodec<D, E, Err> {
    fn clone(&self) -> Self {
        Self::new(self.decode_fn.clone(), self.encode_fn.clone())
    }
}

impl<D, E, Err> fmt::Debug for FnCodec<D, E, Err> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec").finish_non_exhaustive()
    }
}

impl<C, M, O, Err, D, E> Codec<C> for FnCodec<D, E, Err>
where
    D: Fn(C) -> Result<M, Err>,
    E: Fn(M) -> Result<O, Err>,
    O: AsRef<str>,
    Err: std::error::Error + Send + Sync + 'static,
{
    type Decoded = M;
    type Encoded = O;
    type Error = Err;

    fn decode(&self, content: C) -> Result<M, Err> {
        (self.decode_fn)(content)
    }

    fn encode(&self, decoded: M) -> Result<O, Err> {
        (self.encode_fn)(decoded)
    }
}
