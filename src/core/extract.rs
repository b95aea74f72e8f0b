//! core::extract
//!
//! Reference extraction from a definition file.
//!
//! # Pattern
//!
//! The extractor scans the full file contents for all non-overlapping
//! matches of:
//!
//! ```text
//! image\s*=\s*['"]([^'"]+)['"][,\s]
//! ```
//!
//! Capture group 1 is the referenced filename. Either quote style matches;
//! the trailing comma/whitespace is part of the delimiter, not the captured
//! value. Extraction is purely syntactic: no validation that captured names
//! resemble filenames or carry image extensions. These semantics mirror the
//! original tool, including its known limits (an assignment flush against
//! end-of-file without a trailing comma or whitespace does not match).

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::core::types::ReferenceSet;

/// Errors from reference extraction.
///
/// A missing file and an unreadable file are distinct diagnostics: existence
/// is checked before the read is attempted.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("definition file does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read definition file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"image\s*=\s*['"]([^'"]+)['"][,\s]"#).expect("valid image pattern")
    })
}

/// Extract the ordered set of unique image references from a definition file.
///
/// Zero matches is not an error; the result is simply empty.
///
/// # Errors
///
/// - [`ExtractError::NotFound`] if `path` does not exist
/// - [`ExtractError::Read`] if the file exists but cannot be read
///
/// # Example
///
/// ```no_run
/// use imgsweep::core::extract::extract_references;
/// use std::path::Path;
///
/// let refs = extract_references(Path::new("items.lua")).unwrap();
/// for name in refs.iter() {
///     println!("{}", name);
/// }
/// ```
pub fn extract_references(path: &Path) -> Result<ReferenceSet, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut refs = ReferenceSet::new();
    for caps in image_pattern().captures_iter(&contents) {
        // Group 1 always exists when the pattern matches.
        refs.insert(&caps[1]);
    }

    Ok(refs)
}
