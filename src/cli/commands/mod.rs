//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves settings from flags and config
//! 2. Calls into [`crate::core`] to do the work
//! 3. Formats and displays output
//!
//! Handlers do NOT walk or mutate the filesystem directly.

mod clean;
mod completion;
mod refs;

// Re-export command functions for testing and direct invocation
pub use clean::clean;
pub use completion::completion;
pub use refs::refs;

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Clean {
            items_file,
            images_dir,
        } => clean(ctx, items_file, images_dir),
        Command::Refs { items_file } => refs(ctx, items_file),
        Command::Completion { shell } => completion(shell),
    }
}
