//! File-reading capability injected into every analyzer.
//!
//! `FsSource` reads from a repository root on disk. `MemorySource` serves
//! fixtures from a map so analyzers can be exercised without a filesystem.

use crate::error::SourceError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a repository-relative file as UTF-8 text.
pub trait SourceReader: Send + Sync {
    /// Fails with [`SourceError::NotFound`] or [`SourceError::NotReadable`].
    fn read_text(&self, path: &str) -> Result<String, SourceError>;
}

/// Reads files relative to a repository root.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl SourceReader for FsSource {
    fn read_text(&self, path: &str) -> Result<String, SourceError> {
        let full = self.root.join(path);
        let bytes = std::fs::read(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::not_found(path),
            _ => SourceError::not_readable(path, e.to_string()),
        })?;
        String::from_utf8(bytes).map_err(|_| SourceError::not_readable(path, "invalid UTF-8"))
    }
}

/// In-memory file set keyed by repository-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Result<String, String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable file
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), Ok(content.into()));
        self
    }

    /// Add a file that exists but fails to read
    pub fn with_unreadable(mut self, path: impl Into<String>, reason: impl Into<String>) -> Self {
        self.files.insert(path.into(), Err(reason.into()));
        self
    }
}

impl SourceReader for MemorySource {
    fn read_text(&self, path: &str) -> Result<String, SourceError> {
        match self.files.get(path) {
            Some(Ok(content)) => Ok(content.clone()),
            Some(Err(reason)) => Err(SourceError::not_readable(path, reason.clone())),
            None => Err(SourceError::not_found(path)),
        }
    }
}
