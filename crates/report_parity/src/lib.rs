#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Report Parity
//!
//! Checks that two XML test reports describe the same test run.
//!
//! A reimplementation of a test framework is expected to write reports that
//! match the reference framework's XML reporter line for line. Two fields
//! legitimately differ between the two runs and are masked before comparing:
//!
//! - the `name` attribute of the `<Catch2TestRun>` root element (the program
//!   name), and
//! - every `filename` attribute (source locations).
//!
//! Everything else must match exactly. When it does not, the result carries a
//! unified diff of the masked reports.
//!
//! ## Quick start (library)
//!
//! ```rust
//! use report_parity::{compare_str, normalize};
//!
//! let catch2 = r#"<Catch2TestRun name="catch_tests">
//!   <TestCase name="adds" filename="/ci/a/test.cpp" line="4"/>
//! </Catch2TestRun>
//! "#;
//! let bugspray = r#"<Catch2TestRun name="bugspray_tests">
//!   <TestCase name="adds" filename="test.cpp" line="4"/>
//! </Catch2TestRun>
//! "#;
//!
//! assert!(compare_str(&normalize(catch2), &normalize(bugspray)).is_equal());
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! compare-reports catch2.xml bugspray.xml
//! ```
//!
//! Exit status is 0 when the reports match, 1 when they differ (the diff is
//! printed to stdout) and 2 when a report cannot be read.

pub mod cli;
pub mod diff;
pub mod error;
pub mod normalize;
pub mod report;

use std::path::Path;

use tracing::debug;

pub use cli::Cli;
pub use diff::{compare, compare_str, unified_diff, DiffResult, ReportDiff};
pub use error::{Error, Result};
pub use normalize::{normalize, MaskRules, Normalizer, PATTERN_SIZE_LIMIT};
pub use report::{CanonicalReport, RawReport};

/// Reads, masks and compares two report files with the default rules.
///
/// # Errors
///
/// Returns an error if either report cannot be read. The expected report is
/// read first; if it fails the actual report is not touched.
pub fn check_files(expected: impl AsRef<Path>, actual: impl AsRef<Path>) -> Result<DiffResult> {
    check_files_with(&Normalizer::default(), expected, actual)
}

/// Reads, masks and compares two report files using `normalizer`.
///
/// # Errors
///
/// Returns an error if either report cannot be read.
pub fn check_files_with(
    normalizer: &Normalizer,
    expected: impl AsRef<Path>,
    actual: impl AsRef<Path>,
) -> Result<DiffResult> {
    let expected = normalizer.canonicalize(&RawReport::read(expected)?);
    let actual = normalizer.canonicalize(&RawReport::read(actual)?);

    let result = compare(&expected, &actual);
    debug!(
        expected = expected.label(),
        actual = actual.label(),
        equal = result.is_equal(),
        "compared reports"
    );
    Ok(result)
}

/// Runs the comparison requested on the command line.
///
/// # Errors
///
/// Returns an error if either report cannot be read.
pub fn run(cli: &Cli) -> Result<DiffResult> {
    check_files(&cli.expected, &cli.actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn check_files_masks_before_comparing() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xml", "<Catch2TestRun name=\"a\">\n<X filename=\"/a/b.cpp\"/>\n");
        let b = write(&dir, "b.xml", "<Catch2TestRun name=\"b\">\n<X filename=\"b.cpp\"/>\n");

        assert!(check_files(&a, &b).unwrap().is_equal());
    }

    #[test]
    fn check_files_reports_difference_with_paths_in_header() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xml", "<R success=\"true\"/>\n");
        let b = write(&dir, "b.xml", "<R success=\"false\"/>\n");

        let result = check_files(&a, &b).unwrap();
        let text = result.diff().unwrap().unified_diff();
        assert!(text.contains(&format!("--- {}", a.display())));
        assert!(text.contains(&format!("+++ {}", b.display())));
    }

    #[test]
    fn check_files_propagates_read_errors() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xml", "x");
        let missing = dir.path().join("missing.xml");

        let err = check_files(&a, &missing).unwrap_err();
        assert_eq!(err.path(), Some(missing.as_path()));
    }

    #[test]
    fn run_uses_cli_paths() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xml", "same\n");
        let b = write(&dir, "b.xml", "same\n");

        let cli = Cli::try_parse_from([
            std::ffi::OsStr::new("compare-reports"),
            a.as_os_str(),
            b.as_os_str(),
        ])
        .unwrap();
        assert!(run(&cli).unwrap().is_equal());
    }

    #[test]
    fn check_files_with_custom_rules() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xml", "<Run name=\"x\"/>\n");
        let b = write(&dir, "b.xml", "<Run name=\"y\"/>\n");
        let normalizer = Normalizer::new(MaskRules::new().root_tag("Run")).unwrap();

        assert!(check_files(&a, &b).unwrap().is_different());
        assert!(check_files_with(&normalizer, &a, &b).unwrap().is_equal());
    }
}
