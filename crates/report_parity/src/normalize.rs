//! Masking of run-specific fields in report text.
//!
//! Two reports of the same test run differ in the program name recorded on
//! the root element and in the source paths recorded on every test case,
//! section and assertion. The [`Normalizer`] replaces both with fixed
//! placeholders so that what remains can be compared byte for byte.
//!
//! Matching is textual. The report is never parsed; an attribute value is
//! everything between its opening `"` and the next `"`.
//!
//! ```rust
//! use report_parity::normalize;
//!
//! let report = r#"<Catch2TestRun name="bugspray_tests" rng-seed="0">
//!   <TestCase name="sections" filename="/home/ci/src/test.cpp" line="12">"#;
//!
//! assert_eq!(
//!     normalize(report),
//!     r#"<Catch2TestRun name="program_name" rng-seed="0">
//!   <TestCase name="sections" filename="some_file" line="12">"#,
//! );
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::report::{CanonicalReport, RawReport};

/// Root element of the Catch2 XML reporter output.
pub const DEFAULT_ROOT_TAG: &str = "Catch2TestRun";

/// Value substituted for the root element's `name` attribute.
pub const DEFAULT_RUN_PLACEHOLDER: &str = "program_name";

/// Value substituted for every `filename` attribute.
pub const DEFAULT_FILENAME_PLACEHOLDER: &str = "some_file";

/// Upper bound on the compiled size of the masking pattern.
pub const PATTERN_SIZE_LIMIT: usize = 1 << 20;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(|| {
    Normalizer::new(MaskRules::default()).expect("default mask rules compile")
});

/// Which fields to mask and what to put in their place.
///
/// Defaults match the Catch2 XML reporter.
///
/// # Example
///
/// ```rust
/// use report_parity::{MaskRules, Normalizer};
///
/// let normalizer = Normalizer::new(
///     MaskRules::new()
///         .root_tag("TestRun")
///         .run_placeholder("binary"),
/// )?;
/// assert_eq!(
///     normalizer.normalize(r#"<TestRun name="a.out">"#),
///     r#"<TestRun name="binary">"#,
/// );
/// # Ok::<(), report_parity::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRules {
    root_tag: String,
    run_placeholder: String,
    filename_placeholder: String,
}

impl MaskRules {
    /// Creates rules for the Catch2 XML reporter format.
    pub fn new() -> Self {
        Self {
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            run_placeholder: DEFAULT_RUN_PLACEHOLDER.to_string(),
            filename_placeholder: DEFAULT_FILENAME_PLACEHOLDER.to_string(),
        }
    }

    /// Sets the root element whose `name` attribute identifies the run.
    pub fn root_tag(mut self, tag: impl Into<String>) -> Self {
        self.root_tag = tag.into();
        self
    }

    /// Sets the replacement for the run identifier.
    pub fn run_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.run_placeholder = placeholder.into();
        self
    }

    /// Sets the replacement for `filename` attribute values.
    pub fn filename_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.filename_placeholder = placeholder.into();
        self
    }

    /// Returns the configured root tag.
    pub fn tag(&self) -> &str {
        &self.root_tag
    }
}

impl Default for MaskRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces run-specific attribute values with fixed placeholders.
///
/// Patterns are compiled once in [`Normalizer::new`]; normalizing is then a
/// pure function of the input text.
#[derive(Debug, Clone)]
pub struct Normalizer {
    root_tag: String,
    pattern: Regex,
    run_placeholder: String,
    filename_placeholder: String,
}

impl Normalizer {
    /// Compiles the masking pattern for `rules`.
    ///
    /// A `"` inside a placeholder is written as `&quot;`, so masked text
    /// never contains a placeholder that would end the attribute early.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRootTag`] when the root tag makes the pattern
    /// exceed [`PATTERN_SIZE_LIMIT`].
    pub fn new(rules: MaskRules) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(
            r#"(?P<run><{}\s+name=")[^"]*"|(?P<file>\bfilename=")[^"]*""#,
            regex::escape(&rules.root_tag)
        ))
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|source| Error::InvalidRootTag {
            tag: rules.root_tag.clone(),
            source,
        })?;

        Ok(Self {
            root_tag: rules.root_tag,
            pattern,
            run_placeholder: escape_quotes(&rules.run_placeholder),
            filename_placeholder: escape_quotes(&rules.filename_placeholder),
        })
    }

    /// Masks the run identifier and every filename in `text`.
    ///
    /// The text is scanned once, left to right; each attribute is masked
    /// where it starts, so a value can never be mistaken for the start of
    /// another attribute. Only the first `<root name="...">` occurrence is
    /// rewritten; `name` attributes on other elements are left alone. Text
    /// without the expected attributes passes through unchanged.
    ///
    /// `filename` must start at a word boundary: `sourcefilename="..."` is
    /// not masked.
    pub fn normalize(&self, text: &str) -> String {
        let mut run_masked = false;
        let mut filenames = 0usize;
        let masked = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            if let Some(prefix) = caps.name("run") {
                if run_masked {
                    return caps[0].to_string();
                }
                run_masked = true;
                format!("{}{}\"", prefix.as_str(), self.run_placeholder)
            } else {
                filenames += 1;
                format!("{}{}\"", &caps["file"], self.filename_placeholder)
            }
        });
        if !run_masked {
            warn!(
                root_tag = %self.root_tag,
                "run identifier attribute not found; program name left unmasked"
            );
        }
        debug!(run_masked, filenames, "masked run-specific fields");

        masked.into_owned()
    }

    /// Masks a loaded report.
    pub fn canonicalize(&self, raw: &RawReport) -> CanonicalReport {
        debug!(report = raw.label(), "normalizing report");
        CanonicalReport::new(raw.label().to_string(), self.normalize(raw.content()))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

/// Masks `text` with the default Catch2 rules.
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

fn escape_quotes(placeholder: &str) -> String {
    placeholder.replace('"', "&quot;")
}
