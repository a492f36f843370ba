//! # fileout
//!
//! Write content to a file through a pluggable decode/encode codec.
//!
//! ## Overview
//!
//! fileout provides:
//! - **Output writer**: `OutputWriter` creates the destination's parent
//!   directory, transforms the content and overwrites the file
//! - **Codec abstraction**: implement the `Codec` trait, or pass two
//!   functions to `FnCodec`; `RawCodec` is the identity default
//! - **Format codecs**: `FormatCodec` transcodes between JSON, YAML, TOML,
//!   CSV and plaintext; `SerdeCodec` writes any `Serialize` value
//! - **Configuration**: describe a writer in YAML/JSON with `OutputConfig`
//! - **Error handling**: every failure is an `OutputError` tagged with the
//!   `Stage` it came from
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fileout::{FormatCodec, FormatKind, OutputWriter};
//!
//! fn main() -> Result<(), fileout::OutputError> {
//!     // Identity codec: the file ends up containing exactly "hello".
//!     let writer = OutputWriter::new("out/data.txt")?;
//!     writer.output("hello")?;
//!
//!     // JSON in, YAML out.
//!     let codec = FormatCodec::new(FormatKind::Json, FormatKind::Yaml);
//!     let writer = OutputWriter::with_codec("out/data.yaml", codec)?;
//!     writer.output(r#"{"name": "a", "value": 1}"#)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! - Directories are created before the codec runs; the file is opened
//!   (and truncated) only after both codec steps succeed.
//! - Writes are not atomic: a failure while writing can leave a truncated
//!   file behind.
//! - Nothing is coordinated across calls or threads. Concurrent writers to
//!   the same path race, and the last one wins.
//!
//! ## Features
//!
//! - `yaml` - YAML format support (enabled by default)
//! - `toml` - TOML format support
//! - `csv` - CSV format support
//! - `miette` - Pretty error reporting with miette

pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod writer;

// Re-exports for convenience
pub use codec::{Codec, FnCodec, RawCodec};
pub use config::OutputConfig;
pub use error::{OutputError, Stage};
pub use format::{FormatCodec, FormatError, FormatKind, SerdeCodec};
pub use io::FileOutput;
pub use writer::OutputWriter;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::OutputDiagnostic;
