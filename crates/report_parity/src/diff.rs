//! Equality check and unified diff rendering for canonical reports.

use similar::{ChangeTag, TextDiff};
use tracing::debug;

use crate::report::CanonicalReport;

/// First line of the mismatch report.
pub const MISMATCH_HEADER: &str = "Strings differ:";

/// Lines of unchanged context shown around each changed region.
pub const CONTEXT_RADIUS: usize = 3;

/// Outcome of comparing two canonical reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffResult {
    /// The reports are identical after masking.
    Equal,
    /// The reports differ.
    Different(ReportDiff),
}

impl DiffResult {
    /// Returns true if the reports are identical.
    pub const fn is_equal(&self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns true if the reports differ.
    pub const fn is_different(&self) -> bool {
        matches!(self, Self::Different(_))
    }

    /// Get the diff if the reports differ.
    pub const fn diff(&self) -> Option<&ReportDiff> {
        match self {
            Self::Equal => None,
            Self::Different(diff) => Some(diff),
        }
    }
}

/// Line diff between two reports that are not equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDiff {
    unified_diff: String,
    insertions: usize,
    deletions: usize,
}

impl ReportDiff {
    /// Unified diff text, `---`/`+++` headers included.
    pub fn unified_diff(&self) -> &str {
        &self.unified_diff
    }

    /// Number of lines present only in the actual report.
    pub const fn insertions(&self) -> usize {
        self.insertions
    }

    /// Number of lines present only in the expected report.
    pub const fn deletions(&self) -> usize {
        self.deletions
    }

    /// The full mismatch report: [`MISMATCH_HEADER`] followed by the diff.
    pub fn render(&self) -> String {
        format!("{MISMATCH_HEADER}\n{}", self.unified_diff)
    }
}

/// Compares two canonical reports.
///
/// Equality is exact, line terminators included. The diff headers use the
/// report labels.
pub fn compare(expected: &CanonicalReport, actual: &CanonicalReport) -> DiffResult {
    compare_labeled(
        expected.content(),
        actual.content(),
        expected.label(),
        actual.label(),
    )
}

/// Compares two canonical texts, labeling them `expected` and `actual`.
pub fn compare_str(expected: &str, actual: &str) -> DiffResult {
    compare_labeled(expected, actual, "expected", "actual")
}

fn compare_labeled(
    expected: &str,
    actual: &str,
    expected_label: &str,
    actual_label: &str,
) -> DiffResult {
    if expected == actual {
        debug!(bytes = expected.len(), "reports are equal");
        return DiffResult::Equal;
    }

    let diff = TextDiff::from_lines(expected, actual);
    let (mut insertions, mut deletions) = (0, 0);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => insertions += 1,
            ChangeTag::Delete => deletions += 1,
            ChangeTag::Equal => {}
        }
    }
    debug!(insertions, deletions, "reports differ");

    DiffResult::Different(ReportDiff {
        unified_diff: render_unified(&diff, expected_label, actual_label),
        insertions,
        deletions,
    })
}

/// Generate a unified diff between two texts.
///
/// Lines keep their terminators, so a difference in line endings or in the
/// final newline shows up as a changed line. Returns an empty string for
/// equal inputs.
pub fn unified_diff(
    expected: &str,
    actual: &str,
    expected_label: &str,
    actual_label: &str,
) -> String {
    render_unified(
        &TextDiff::from_lines(expected, actual),
        expected_label,
        actual_label,
    )
}

fn render_unified<'a>(
    diff: &'a TextDiff<'a, 'a, 'a, str>,
    expected: &'a str,
    actual: &'a str,
) -> String {
    diff.unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .missing_newline_hint(true)
        .header(expected, actual)
        .to_string()
}
