//! Filesystem primitives used by the output writer.
//!
//! This module provides:
//! - `FileOutput`: a destination path with directory-ensure and
//!   create-or-truncate helpers

mod file;

pub use file::FileOutput;
