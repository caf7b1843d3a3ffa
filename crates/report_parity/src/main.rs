#![forbid(unsafe_code)]

//! # compare-reports
//!
//! Compares two Catch2 XML reports modulo program name and source filenames.
//!
//! ## Usage
//!
//! ```bash
//! compare-reports catch2.xml bugspray.xml
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use report_parity::cli::{exit_status, EXIT_ERROR};
use report_parity::{Cli, DiffResult};

fn main() -> ExitCode {
    // Stdout carries the diff only; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse_args();
    let outcome = report_parity::run(&cli);

    match &outcome {
        Ok(DiffResult::Equal) => {}
        Ok(DiffResult::Different(diff)) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout
                .write_all(diff.render().as_bytes())
                .and_then(|()| stdout.flush())
            {
                eprintln!("error: failed to write diff: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }

    ExitCode::from(exit_status(&outcome))
}
