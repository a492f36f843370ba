//! The output writer: transform content through a codec and persist it.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec::{Codec, RawCodec};
use crate::error::{OutputError, Stage};
use crate::io::FileOutput;

/// Writes content to a fixed destination path through a codec.
///
/// Each [`output`](OutputWriter::output) call creates the parent directory if
/// needed, runs `codec.decode` then `codec.encode`, and replaces the file with
/// the result. The writer keeps no state between calls, so it can be reused
/// freely.
///
/// The codec may be owned (`K`), borrowed (`&K`) or shared (`Arc<K>`).
#[derive(Debug, Clone)]
pub struct OutputWriter<K = RawCodec> {
    target: FileOutput,
    codec: K,
}

impl OutputWriter<RawCodec> {
    /// Create a writer with the identity codec.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, OutputError> {
        Self::with_codec(path, RawCodec)
    }
}

impl<K> OutputWriter<K> {
    /// Create a writer with the given codec.
    ///
    /// Fails with [`Stage::ResolveOutput`] when the path is empty.
    pub fn with_codec(path: impl Into<PathBuf>, codec: K) -> Result<Self, OutputError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(OutputError::new(
                Stage::ResolveOutput,
                "",
                "output path must not be empty",
            ));
        }

        Ok(Self {
            target: FileOutput::new(path),
            codec,
        })
    }

    /// Replace the codec, keeping the destination.
    pub fn replace_codec<K2>(self, codec: K2) -> OutputWriter<K2> {
        OutputWriter {
            target: self.target,
            codec,
        }
    }

    /// Get the destination path.
    pub fn path(&self) -> &Path {
        self.target.path()
    }

    /// Destination path as a string, as used in error targets.
    pub fn id(&self) -> &str {
        self.target.id()
    }

    /// Get the codec.
    pub fn codec(&self) -> &K {
        &self.codec
    }

    /// Transform `content` and write it to the destination.
    ///
    /// The destination is opened only after both codec steps succeed, so a
    /// codec failure never touches an existing file. A failure while writing
    /// can leave the file truncated.
    pub fn output<C>(&self, content: C) -> Result<(), OutputError>
    where
        K: Codec<C>,
    {
        self.ensure_dir()?;

        let decoded = self
            .codec
            .decode(content)
            .map_err(|e| self.error(Stage::Decode, e))?;
        let encoded = self
            .codec
            .encode(decoded)
            .map_err(|e| self.error(Stage::Encode, e))?;

        self.write(encoded.as_ref())
    }

    fn ensure_dir(&self) -> Result<(), OutputError> {
        self.target
            .ensure_parent_dir()
            .map_err(|e| self.error(Stage::CreateDir, e))
    }

    fn write(&self, text: &str) -> Result<(), OutputError> {
        let mut file = self
            .target
            .open_overwrite()
            .map_err(|e| self.error(Stage::Open, e))?;

        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| self.error(Stage::Write, e))?;

        tracing::debug!(target_path = %self.id(), bytes = text.len(), "wrote output");
        Ok(())
    }

    fn error<E>(&self, stage: Stage, error: E) -> OutputError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        OutputError::new(stage, self.id(), error)
    }
}
