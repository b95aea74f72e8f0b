//! cli
//!
//! Command-line interface layer for Imgsweep.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT touch the filesystem directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that call into [`crate::core`]. All filesystem work happens in
//! the core modules; handlers only resolve settings and render output.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Explicit config file path (`--config`).
    pub config: Option<PathBuf>,
    /// Minimal output.
    pub quiet: bool,
    /// Verbose per-decision output.
    pub debug: bool,
    /// Emit the run report as JSON instead of text.
    pub json: bool,
}

impl Context {
    /// Verbosity derived from the quiet/debug flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        config: cli.config.clone(),
        quiet: cli.quiet,
        debug: cli.debug,
        json: cli.json,
    };

    commands::dispatch(cli.command, &ctx)
}
