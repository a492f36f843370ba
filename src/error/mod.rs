//! Error types for fileout operations.
//!
//! This module provides:
//! - `Stage`: Indicates where an error occurred in the output pipeline
//! - `OutputError`: A single output error with context

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while validating the writer or its configuration
    ResolveOutput,
    /// Error while creating the destination's parent directory
    CreateDir,
    /// The codec's decode step failed
    Decode,
    /// The codec's encode step failed
    Encode,
    /// Error while opening the destination file
    Open,
    /// Error while writing or flushing the destination file
    Write,
}

impl Stage {
    /// Returns true for the stages owned by the codec.
    pub fn is_codec(&self) -> bool {
        matches!(self, Stage::Decode | Stage::Encode)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolveOutput => write!(f, "ResolveOutput"),
            Stage::CreateDir => write!(f, "CreateDir"),
            Stage::Decode => write!(f, "Decode"),
            Stage::Encode => write!(f, "Encode"),
            Stage::Open => write!(f, "Open"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// An error raised by a single `output` call or by writer construction.
///
/// The `error` field holds the underlying failure as-is: an
/// `std::io::Error` for filesystem stages, or the codec's own error value
/// for `Decode` and `Encode`.
#[derive(Debug)]
pub struct OutputError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (the destination path)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl OutputError {
    pub fn new<E>(stage: Stage, target: impl Into<String>, error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }

    /// Check whether the codec raised this error.
    pub fn is_codec_error(&self) -> bool {
        self.stage.is_codec()
    }

    /// Borrow the underlying error as a concrete type.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    /// Consume the error and return the underlying error.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.error
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
