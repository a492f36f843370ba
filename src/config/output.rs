//! Output configuration for defining a writer in YAML/JSON files.

use std::path::Path;

use serde::Deserialize;

use crate::error::{OutputError, Stage};
use crate::format::{FormatCodec, FormatError, FormatKind};
use crate::writer::OutputWriter;

/// Configuration for a single output file.
///
/// ```yaml
/// path: reports/summary.yaml
/// decode: json
/// encode: yaml
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Destination file path
    pub path: String,
    /// Format the content is parsed as: "json", "yaml", etc.
    ///
    /// Defaults to the encode format, so a config holding only
    /// `path: r.json` reformats JSON content instead of wrapping the text in
    /// a JSON string. Set it to "plaintext" to get the string behavior.
    #[serde(default)]
    pub decode: Option<String>,
    /// Format written to the file. Inferred from the path's extension if unset.
    #[serde(default)]
    pub encode: Option<String>,
}

impl OutputConfig {
    /// Create a configuration for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the decode format.
    pub fn with_decode(mut self, format: impl Into<String>) -> Self {
        self.decode = Some(format.into());
        self
    }

    /// Set the encode format.
    pub fn with_encode(mut self, format: impl Into<String>) -> Self {
        self.encode = Some(format.into());
        self
    }

    /// Resolve the configured formats into a codec.
    pub fn codec(&self) -> Result<FormatCodec, FormatError> {
        let to = match parse_kind(self.encode.as_deref())? {
            Some(kind) => kind,
            None => FormatKind::from_path(Path::new(&self.path)).unwrap_or_default(),
        };
        let from = parse_kind(self.decode.as_deref())?.unwrap_or(to);

        let codec = FormatCodec::new(from, to);
        codec.check_available()?;
        Ok(codec)
    }
}

fn parse_kind(name: Option<&str>) -> Result<Option<FormatKind>, FormatError> {
    name.map(|n| FormatKind::from_str(n).ok_or_else(|| FormatError::UnknownFormat(n.to_owned())))
        .transpose()
}

impl OutputWriter<FormatCodec> {
    /// Build a writer from an [`OutputConfig`].
    ///
    /// Unknown or disabled formats and an empty path fail with
    /// [`Stage::ResolveOutput`].
    pub fn from_config(config: &OutputConfig) -> Result<Self, OutputError> {
        let codec = config
            .codec()
            .map_err(|e| OutputError::new(Stage::ResolveOutput, config.path.as_str(), e))?;
        OutputWriter::with_codec(config.path.as_str(), codec)
    }
}
