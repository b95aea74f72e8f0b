//! ui
//!
//! Output formatting and verbosity handling.
//!
//! # Design
//!
//! All console output goes through this module so that formatting stays
//! consistent and the quiet/debug flags are honored everywhere. The
//! decision points of a run (resolved paths, per-file match results, the
//! summary) are discrete, testable render functions rather than free-form
//! prints scattered through the code.

pub mod output;
