//! Data formats for the ready-made codecs.
//!
//! This module provides:
//! - `FormatKind`: Enum representing different data formats
//! - `FormatError`: Errors that can occur during format operations
//! - `deserialize` / `serialize`: text <-> `serde_json::Value` per format
//! - `FormatCodec` and `SerdeCodec`: codecs built on those functions

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

mod codec;
pub use codec::{FormatCodec, SerdeCodec};

/// Represents different data format types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatKind {
    /// Plain text format
    #[default]
    Plaintext,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// TOML format
    Toml,
    /// CSV format
    Csv,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Plaintext => write!(f, "plaintext"),
            FormatKind::Json => write!(f, "json"),
            FormatKind::Yaml => write!(f, "yaml"),
            FormatKind::Toml => write!(f, "toml"),
            FormatKind::Csv => write!(f, "csv"),
        }
    }
}

impl FormatKind {
    /// Parse a format kind from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plaintext" | "text" | "txt" | "raw" => Some(FormatKind::Plaintext),
            "json" => Some(FormatKind::Json),
            "yaml" | "yml" => Some(FormatKind::Yaml),
            "toml" => Some(FormatKind::Toml),
            "csv" => Some(FormatKind::Csv),
            _ => None,
        }
    }

    /// Get file extensions for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Plaintext => &["txt", "text"],
            FormatKind::Json => &["json"],
            FormatKind::Yaml => &["yaml", "yml"],
            FormatKind::Toml => &["toml"],
            FormatKind::Csv => &["csv"],
        }
    }

    /// Get the format kind for a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        [
            FormatKind::Plaintext,
            FormatKind::Json,
            FormatKind::Yaml,
            FormatKind::Toml,
            FormatKind::Csv,
        ]
        .into_iter()
        .find(|kind| {
            kind.extensions()
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext))
        })
    }

    /// Get the format kind from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Check if this format is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            FormatKind::Plaintext | FormatKind::Json => true,

            #[cfg(feature = "yaml")]
            FormatKind::Yaml => true,
            #[cfg(not(feature = "yaml"))]
            FormatKind::Yaml => false,

            #[cfg(feature = "toml")]
            FormatKind::Toml => true,
            #[cfg(not(feature = "toml"))]
            FormatKind::Toml => false,

            #[cfg(feature = "csv")]
            FormatKind::Csv => true,
            #[cfg(not(feature = "csv"))]
            FormatKind::Csv => false,
        }
    }
}

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The requested format name is unknown
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Format feature not enabled
    #[error("Format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(FormatKind),

    /// Serialization/deserialization error
    #[error("Serde error: {0}")]
    Serde(Box<dyn std::error::Error + Send + Sync>),

    /// Other format-specific error
    #[error("Format error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl FormatError {
    fn serde(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        FormatError::Serde(Box::new(e))
    }
}

/// Parse text in the given format into a generic value.
pub fn deserialize(kind: FormatKind, text: &str) -> Result<Value, FormatError> {
    match kind {
        FormatKind::Plaintext => Ok(Value::String(text.to_owned())),

        FormatKind::Json => serde_json::from_str(text).map_err(FormatError::serde),

        #[cfg(feature = "yaml")]
        FormatKind::Yaml => serde_yaml::from_str(text).map_err(FormatError::serde),

        #[cfg(feature = "toml")]
        FormatKind::Toml => toml::from_str(text).map_err(FormatError::serde),

        #[cfg(feature = "csv")]
        FormatKind::Csv => deserialize_csv(text),

        #[allow(unreachable_patterns)]
        _ => Err(FormatError::NotEnabled(kind)),
    }
}

/// Render a generic value as text in the given format.
pub fn serialize(kind: FormatKind, value: &Value) -> Result<String, FormatError> {
    match kind {
        FormatKind::Plaintext => serialize_plaintext(value),

        FormatKind::Json => serde_json::to_string_pretty(value).map_err(FormatError::serde),

        #[cfg(feature = "yaml")]
        FormatKind::Yaml => serde_yaml::to_string(value).map_err(FormatError::serde),

        #[cfg(feature = "toml")]
        FormatKind::Toml => toml::to_string_pretty(value).map_err(FormatError::serde),

        #[cfg(feature = "csv")]
        FormatKind::Csv => serialize_csv(value),

        #[allow(unreachable_patterns)]
        _ => Err(FormatError::NotEnabled(kind)),
    }
}

// === Plaintext implementation ===
fn serialize_plaintext(value: &Value) -> Result<String, FormatError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => serde_json::to_string_pretty(other).map_err(FormatError::serde),
    }
}

// === CSV implementation ===
#[cfg(feature = "csv")]
fn deserialize_csv(text: &str) -> Result<Value, FormatError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .map_err(FormatError::serde)?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(FormatError::serde)?;
        let obj: serde_json::Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, field)| (h.clone(), Value::String(field.to_owned())))
            .collect();
        rows.push(Value::Object(obj));
    }

    Ok(Value::Array(rows))
}

#[cfg(feature = "csv")]
fn csv_field(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        _ => v.to_string(),
    }
}

#[cfg(feature = "csv")]
fn serialize_csv(value: &Value) -> Result<String, FormatError> {
    let rows: Vec<&serde_json::Map<String, Value>> = match value {
        Value::Array(arr) => arr
            .iter()
            .map(|item| match item {
                Value::Object(obj) => Ok(obj),
                _ => Err(csv_shape_error()),
            })
            .collect::<Result<_, _>>()?,
        Value::Object(obj) => vec![obj],
        _ => return Err(csv_shape_error()),
    };

    let mut wtr = csv::Writer::from_writer(Vec::new());

    if let Some(first) = rows.first() {
        let headers: Vec<&str> = first.keys().map(|s| s.as_str()).collect();
        wtr.write_record(&headers).map_err(FormatError::serde)?;

        for obj in &rows {
            let record: Vec<String> = headers
                .iter()
                .map(|h| obj.get(*h).map(csv_field).unwrap_or_default())
                .collect();
            wtr.write_record(&record).map_err(FormatError::serde)?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| FormatError::Other(Box::new(e.into_error())))?;
    String::from_utf8(bytes).map_err(|e| FormatError::Other(Box::new(e)))
}

#[cfg(feature = "csv")]
fn csv_shape_error() -> FormatError {
    FormatError::Other(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "CSV format requires an object or an array of objects",
    )))
}
