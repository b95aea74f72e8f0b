//! Imgsweep - reconcile image asset folders against item definition references
//!
//! Imgsweep reads a data-definition file (an `items.lua`-style script), extracts
//! every image filename referenced by an `image = '...'` assignment, then walks
//! the direct children of an asset folder and deletes every recognized image
//! file that none of those references name.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Domain types, reference extraction, directory reconciliation
//! - [`ui`] - Output formatting and verbosity handling
//!
//! # Behavior Invariants
//!
//! Imgsweep maintains the following invariants:
//!
//! 1. The reference file is fully read before any directory work begins
//! 2. Directories and non-image files are never deleted, only skipped
//! 3. A failed deletion is recorded per file and never aborts the run
//! 4. Every directory entry reaches exactly one terminal outcome

pub mod cli;
pub mod core;
pub mod ui;
