//! Command-line interface for `compare-reports`.
//!
//! # Examples
//!
//! ```bash
//! # Silent, exit 0 when the reports match
//! compare-reports catch2.xml bugspray.xml
//!
//! # In a test script
//! compare-reports expected.xml actual.xml || echo "reports diverge"
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::diff::DiffResult;
use crate::error::Result;

/// Exit status when the normalized reports are identical.
pub const EXIT_EQUAL: u8 = 0;

/// Exit status when the normalized reports differ.
pub const EXIT_MISMATCH: u8 = 1;

/// Exit status when a report cannot be read.
pub const EXIT_ERROR: u8 = 2;

/// Compare two Catch2 XML reports, ignoring the program name and source
/// filenames.
///
/// Prints nothing and exits 0 when the reports are equivalent. Otherwise
/// prints a unified diff and exits 1.
#[derive(Parser, Debug, Clone)]
#[command(name = "compare-reports", version, about, long_about = None)]
pub struct Cli {
    /// Report from the reference implementation
    pub expected: PathBuf,

    /// Report from the implementation under test
    pub actual: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}

/// Maps the outcome of a comparison to the process exit status.
#[must_use]
pub fn exit_status(outcome: &Result<DiffResult>) -> u8 {
    match outcome {
        Ok(DiffResult::Equal) => EXIT_EQUAL,
        Ok(DiffResult::Different(_)) => EXIT_MISMATCH,
        Err(_) => EXIT_ERROR,
    }
}
