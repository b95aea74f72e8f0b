//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, the run report is machine-readable JSON.

use std::fmt::Display;

use crate::core::types::{Outcome, RunReport};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Render one entry's outcome as a per-file line.
///
/// Shown in debug mode so a run can be audited decision by decision.
pub fn format_entry(name: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::SkippedDirectory => format!("skip {} (directory)", name),
        Outcome::SkippedNonImage => format!("skip {} (not an image)", name),
        Outcome::Kept => format!("keep {}", name),
        Outcome::Deleted => format!("delete {}", name),
        Outcome::DeleteFailed { reason } => format!("delete {} FAILED: {}", name, reason),
    }
}

/// Render the run summary.
pub fn format_summary(report: &RunReport) -> String {
    let mut summary = format!(
        "kept {}, deleted {}, skipped {}",
        report.kept(),
        report.deleted(),
        report.skipped()
    );
    if report.delete_failed() > 0 {
        summary.push_str(&format!(", {} delete failure(s)", report.delete_failed()));
    }
    summary
}
