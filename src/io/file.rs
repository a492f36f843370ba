//! Destination file handling: parent directory creation and truncating writes.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// A destination file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    id: String,
    path: PathBuf,
}

impl FileOutput {
    /// Create a new file output target.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Identifier used in errors and logs: the path as a string.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parent directory portion of the path, or `None` for a bare filename.
    pub fn parent_dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }

    /// Make sure the parent directory exists, creating missing intermediates.
    pub fn ensure_parent_dir(&self) -> io::Result<()> {
        let Some(parent) = self.parent_dir() else {
            tracing::trace!(target_path = %self.id, "bare filename, no directory to create");
            return Ok(());
        };

        if parent.is_dir() {
            tracing::trace!(dir = %parent.display(), "parent directory already exists");
            return Ok(());
        }

        fs::create_dir_all(parent)?;
        tracing::debug!(dir = %parent.display(), "created parent directory");
        Ok(())
    }

    /// Open the target for writing, truncating any existing content.
    pub fn open_overwrite(&self) -> io::Result<File> {
        OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)
    }
}
