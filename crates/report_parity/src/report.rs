//! Report text as loaded from disk and after masking.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Verbatim text of one report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReport {
    label: String,
    content: String,
}

impl RawReport {
    /// Wraps in-memory report text. `label` names the report in diff headers.
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// Reads a report from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAFile`] when `path` exists but is not a regular
    /// file, and [`Error::ReadReport`] when it cannot be opened or is not
    /// valid UTF-8.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_error = |source| Error::ReadReport {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(read_error)?;
        if !metadata.is_file() {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(read_error)?;
        debug!(path = %path.display(), bytes = content.len(), "read report");

        Ok(Self::new(path.display().to_string(), content))
    }

    /// Label used in diff headers (the path for reports read from disk).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The report text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A report with its run-specific fields masked.
///
/// Produced by [`Normalizer::canonicalize`](crate::Normalizer::canonicalize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalReport {
    label: String,
    content: String,
}

impl CanonicalReport {
    pub(crate) const fn new(label: String, content: String) -> Self {
        Self { label, content }
    }

    /// Label of the report this was derived from.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The masked report text.
    pub fn content(&self) -> &str {
        &self.content
    }
}
