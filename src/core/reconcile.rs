//! core::reconcile
//!
//! Directory reconciliation: keep referenced images, delete the rest.
//!
//! # Contract
//!
//! Given an asset directory and a reference set, every direct (non-recursive)
//! child of the directory reaches exactly one terminal outcome:
//!
//! - directories are skipped (never recursed into, never deleted)
//! - files without a recognized image extension are skipped
//! - recognized images whose base name is a case-insensitive member of the
//!   reference set are kept
//! - all other recognized images are deleted
//!
//! # Failure policy
//!
//! Setup-phase failures (missing directory, non-directory path, unlistable
//! directory) abort the run. A failed deletion is recorded as
//! [`Outcome::DeleteFailed`] for that entry and never affects the remaining
//! entries. No operation is retried.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{is_recognized_image, Outcome, ReferenceSet, RunReport};

/// Errors from the setup phase of reconciliation.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("asset directory does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("asset path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("failed to list asset directory '{path}': {source}")]
    List {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reconcile a directory against a reference set.
///
/// Entries are processed sequentially in directory-listing order. Deletions
/// are independent side effects: a failure to remove one file is recorded in
/// the report and processing continues.
///
/// # Errors
///
/// - [`ReconcileError::NotFound`] if `dir` does not exist
/// - [`ReconcileError::NotADirectory`] if `dir` is not a directory
/// - [`ReconcileError::List`] if the directory cannot be listed
///
/// # Example
///
/// ```no_run
/// use imgsweep::core::reconcile::reconcile;
/// use imgsweep::core::types::ReferenceSet;
/// use std::path::Path;
///
/// let mut refs = ReferenceSet::new();
/// refs.insert("bread.png");
///
/// let report = reconcile(Path::new("imgs"), &refs).unwrap();
/// println!("kept {}, deleted {}", report.kept(), report.deleted());
/// ```
pub fn reconcile(dir: &Path, refs: &ReferenceSet) -> Result<RunReport, ReconcileError> {
    if !dir.exists() {
        return Err(ReconcileError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(ReconcileError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let list_err = |source| ReconcileError::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut report = RunReport::default();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_type = entry.file_type().map_err(list_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();

        let outcome = if file_type.is_dir() {
            Outcome::SkippedDirectory
        } else if !is_recognized_image(&name) {
            Outcome::SkippedNonImage
        } else if refs.contains_ignore_case(&name) {
            Outcome::Kept
        } else {
            match fs::remove_file(entry.path()) {
                Ok(()) => Outcome::Deleted,
                Err(err) => Outcome::DeleteFailed {
                    reason: err.to_string(),
                },
            }
        };

        report.record(name, outcome);
    }

    Ok(report)
}
