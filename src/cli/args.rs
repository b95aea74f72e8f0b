//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Load settings from this config file
//! - `--debug`: Per-decision debug output
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable report output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Imgsweep - reconcile image asset folders against item definition references
#[derive(Parser, Debug)]
#[command(name = "imgsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load settings from this config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable per-decision debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit the run report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete unreferenced images from the asset directory
    #[command(
        name = "clean",
        long_about = "Delete unreferenced images from the asset directory.\n\n\
            Extracts every image filename referenced by an 'image = ...' assignment \
            in the definition file, then walks the direct children of the asset \
            directory. Recognized image files (.jpg, .jpeg, .png, .gif, .bmp, .webp, \
            .svg) that no reference names are deleted; referenced images are kept; \
            directories and other files are skipped.\n\n\
            Deletion is destructive and irreversible - there is no trash or backup. \
            A failed deletion is reported per file and does not abort the run.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Clean ./imgs against ./items.lua (the defaults)
    imgsweep clean

    # Explicit paths
    imgsweep clean --items-file data/items.lua --images-dir assets/imgs

    # Audit every per-file decision
    imgsweep clean --debug

    # Machine-readable report for scripting
    imgsweep clean --json

EXIT CODES:
    0  run completed (even if some deletions failed; see the report)
    1  setup failure: missing/unreadable definition file or asset directory"
    )]
    Clean {
        /// Definition file to extract references from
        #[arg(long, value_name = "PATH")]
        items_file: Option<PathBuf>,

        /// Asset directory to reconcile
        #[arg(long, value_name = "PATH")]
        images_dir: Option<PathBuf>,
    },

    /// Print the image references found in the definition file
    #[command(
        name = "refs",
        long_about = "Print the image references found in the definition file.\n\n\
            Runs only the extraction step and prints each referenced filename on \
            its own line, in order of first appearance, duplicates removed. Nothing \
            is deleted. Useful for checking what 'clean' would treat as referenced.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List references in ./items.lua
    imgsweep refs

    # List references in a specific file
    imgsweep refs --items-file data/items.lua

    # Pipe into other tools
    imgsweep refs -q | sort"
    )]
    Refs {
        /// Definition file to extract references from
        #[arg(long, value_name = "PATH")]
        items_file: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    imgsweep completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    imgsweep completion zsh >> ~/.zshrc

    # Fish
    imgsweep completion fish > ~/.config/fish/completions/imgsweep.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
