//! Configuration for output writers.
//!
//! This module provides:
//! - `OutputConfig`: serde-deserializable description of one output
//!   (path plus decode/encode formats)

mod output;

pub use output::OutputConfig;
