//! Error types for report loading and mask compilation.
//!
//! A mismatch between two reports is not an error: it is reported through
//! [`DiffResult`](crate::DiffResult). The variants here cover the cases where
//! a report cannot be obtained or masked at all.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading or masking a report.
#[derive(Error, Debug)]
pub enum Error {
    /// The report file could not be opened or read.
    ///
    /// Content that is not valid UTF-8 lands here too, with
    /// [`io::ErrorKind::InvalidData`] as the source kind.
    #[error("failed to read report {}: {source}", path.display())]
    ReadReport {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The path exists but does not name a regular file.
    #[error("report path is not a regular file: {}", path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// The masking pattern built from a custom root tag does not compile.
    #[error("invalid root tag {tag:?}: {source}")]
    InvalidRootTag {
        /// Root tag as configured.
        tag: String,
        /// Pattern compilation error.
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Returns the report path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadReport { path, .. } | Self::NotAFile { path } => Some(path),
            Self::InvalidRootTag { .. } => None,
        }
    }
}

/// A specialized [`Result`](std::result::Result) for this crate.
pub type Result<T> = std::result::Result<T, Error>;
