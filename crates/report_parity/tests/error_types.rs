//! Unit tests for report loading and masking error types.
//!
//! Tests verify:
//! - Display formatting
//! - Error chaining (source)
//! - The path accessor

use report_parity::Error;
use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};

fn read_error(kind: io::ErrorKind) -> Error {
    Error::ReadReport {
        path: PathBuf::from("reports/catch2.xml"),
        source: io::Error::new(kind, "boom"),
    }
}

fn invalid_root_tag() -> Error {
    let tag = "T".repeat(report_parity::PATTERN_SIZE_LIMIT);
    report_parity::Normalizer::new(report_parity::MaskRules::new().root_tag(tag))
        .expect_err("oversized root tag")
}

mod display_tests {
    use super::*;

    #[test]
    fn test_read_report_display() {
        let msg = read_error(io::ErrorKind::NotFound).to_string();
        assert!(msg.contains("failed to read report"));
        assert!(msg.contains("reports/catch2.xml"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_not_a_file_display() {
        let e = Error::NotAFile {
            path: PathBuf::from("reports"),
        };
        assert_eq!(e.to_string(), "report path is not a regular file: reports");
    }

    #[test]
    fn test_invalid_root_tag_display() {
        let msg = invalid_root_tag().to_string();
        assert!(msg.starts_with("invalid root tag \"TTT"));
    }

    #[test]
    fn test_debug_impl() {
        let debug = format!("{:?}", read_error(io::ErrorKind::PermissionDenied));
        assert!(debug.contains("ReadReport"));
    }
}

mod source_tests {
    use super::*;

    #[test]
    fn test_read_report_has_io_source() {
        let e = read_error(io::ErrorKind::PermissionDenied);
        let source = e.source().expect("io error source");
        let io_err = source.downcast_ref::<io::Error>().expect("io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_invalid_root_tag_has_regex_source() {
        let e = invalid_root_tag();
        let source = e.source().expect("regex error source");
        assert!(source.downcast_ref::<regex::Error>().is_some());
    }

    #[test]
    fn test_not_a_file_has_no_source() {
        let e = Error::NotAFile {
            path: PathBuf::from("reports"),
        };
        assert!(e.source().is_none());
    }
}

mod path_tests {
    use super::*;

    #[test]
    fn test_path_accessor() {
        assert_eq!(
            read_error(io::ErrorKind::NotFound).path(),
            Some(Path::new("reports/catch2.xml"))
        );
        let e = Error::NotAFile {
            path: PathBuf::from("reports"),
        };
        assert_eq!(e.path(), Some(Path::new("reports")));
    }

    #[test]
    fn test_invalid_root_tag_has_no_path() {
        assert!(invalid_root_tag().path().is_none());
    }
}
