//! core
//!
//! Domain types and the two operations of the tool.
//!
//! # Modules
//!
//! - [`types`] - Reference set, per-entry outcomes, run report
//! - [`extract`] - Reference extraction from a definition file
//! - [`reconcile`] - Directory reconciliation (keep / delete / skip)
//! - [`config`] - Configuration schema, loading, and path resolution

pub mod config;
pub mod extract;
pub mod reconcile;
pub mod types;
