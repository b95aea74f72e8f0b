//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ReferenceSet`] - Ordered, deduplicated set of referenced filenames
//! - [`Outcome`] - Terminal classification of one directory entry
//! - [`EntryReport`] - One directory entry and its outcome
//! - [`RunReport`] - Ordered per-entry reports plus derived totals
//!
//! # Design
//!
//! The reference set is built once by the extractor and only read afterwards.
//! Insertion deduplicates on exact (case-sensitive) string equality and
//! preserves order of first appearance; membership checks during
//! reconciliation are case-insensitive, matching the original tool.
//!
//! Every directory entry ends in exactly one [`Outcome`]. There is no retry
//! and no re-evaluation, so the report's totals always account for every
//! entry the reconciler saw.

use std::path::Path;

use serde::Serialize;

/// Extensions (lower-case, without dot) that mark a file as an image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];

/// Check whether a filename carries a recognized image extension.
///
/// The comparison is case-insensitive; files without an extension are
/// never recognized.
///
/// # Example
///
/// ```
/// use imgsweep::core::types::is_recognized_image;
///
/// assert!(is_recognized_image("bread.png"));
/// assert!(is_recognized_image("BREAD.PNG"));
/// assert!(!is_recognized_image("readme.txt"));
/// assert!(!is_recognized_image("no_extension"));
/// ```
pub fn is_recognized_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// An ordered set of referenced filenames.
///
/// Built by the extractor from the definition file; the source of truth for
/// which asset files must be kept.
///
/// # Example
///
/// ```
/// use imgsweep::core::types::ReferenceSet;
///
/// let mut refs = ReferenceSet::new();
/// refs.insert("bread.png");
/// refs.insert("bread.png"); // duplicate, ignored
/// refs.insert("Water.PNG");
///
/// assert_eq!(refs.len(), 2);
/// assert!(refs.contains_ignore_case("water.png"));
/// assert!(!refs.contains_ignore_case("soda.png"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceSet(Vec<String>);

impl ReferenceSet {
    /// Create an empty reference set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, preserving first-appearance order.
    ///
    /// Returns `true` if the name was inserted, `false` if an exact
    /// (case-sensitive) duplicate was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.0.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Case-insensitive membership test.
    ///
    /// This is the comparison the reconciler uses: the directory file's
    /// base name, lower-cased, against every reference, lower-cased.
    pub fn contains_ignore_case(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.0.iter().any(|r| r.to_lowercase() == lowered)
    }

    /// Number of unique references.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate references in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Terminal classification of one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    /// Entry is itself a directory; never recursed into, never deleted.
    SkippedDirectory,
    /// Entry's extension is not a recognized image extension.
    SkippedNonImage,
    /// Entry is referenced; left in place.
    Kept,
    /// Entry was unreferenced and successfully removed.
    Deleted,
    /// Entry was unreferenced but removal failed; the run continues.
    DeleteFailed { reason: String },
}

/// One directory entry and the outcome it reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// Base name of the entry within the asset directory.
    pub name: String,
    /// Terminal outcome.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Report of a full reconciliation run.
///
/// Entries appear in directory-listing order. Totals are derived, never
/// stored, so they cannot drift from the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Per-entry reports in processing order.
    pub entries: Vec<EntryReport>,
}

impl RunReport {
    /// Record an entry's outcome.
    pub fn record(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.entries.push(EntryReport {
            name: name.into(),
            outcome,
        });
    }

    /// Number of entries kept.
    pub fn kept(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Kept))
    }

    /// Number of entries deleted.
    pub fn deleted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Deleted))
    }

    /// Number of entries whose deletion failed.
    pub fn delete_failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::DeleteFailed { .. }))
    }

    /// Number of entries skipped (directories plus non-image files).
    pub fn skipped(&self) -> usize {
        self.count(|o| {
            matches!(o, Outcome::SkippedDirectory | Outcome::SkippedNonImage)
        })
    }

    /// Total entries seen.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory had no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
