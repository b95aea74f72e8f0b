//! clean command - Delete unreferenced images from the asset directory
//!
//! # Phases
//!
//! 1. Setup: resolve settings, extract references, validate the directory.
//!    Any failure here propagates and aborts the run.
//! 2. Reconcile: classify every direct child of the directory. Per-file
//!    delete failures are recorded in the report and never abort.
//!
//! The report is rendered as a textual summary, or as JSON with `--json`.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::{Settings, SweepConfig};
use crate::core::extract::extract_references;
use crate::core::reconcile::reconcile;
use crate::core::types::RunReport;
use crate::ui::output;

/// Run the reconciliation: extract references, then clean the directory.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `items_file` - Definition file override (beats config and default)
/// * `images_dir` - Asset directory override (beats config and default)
pub fn clean(ctx: &Context, items_file: Option<PathBuf>, images_dir: Option<PathBuf>) -> Result<()> {
    let verbosity = ctx.verbosity();

    let config = SweepConfig::load(ctx.config.as_deref()).context("Failed to load config")?;
    let settings = Settings::resolve(&config, items_file, images_dir);

    output::debug(
        format!("definition file: {}", settings.items_file.display()),
        verbosity,
    );
    output::debug(
        format!("asset directory: {}", settings.images_dir.display()),
        verbosity,
    );

    // The reference file is fully read before any directory work begins.
    let refs = extract_references(&settings.items_file)?;
    output::debug(
        format!(
            "extracted {} reference(s) from {}",
            refs.len(),
            settings.items_file.display()
        ),
        verbosity,
    );
    for name in refs.iter() {
        output::debug(format!("  ref {}", name), verbosity);
    }

    let report = reconcile(&settings.images_dir, &refs)?;

    for entry in &report.entries {
        output::debug(output::format_entry(&entry.name, &entry.outcome), verbosity);
    }

    render(ctx, &report, &settings.images_dir)
}

/// Render the run report according to the output flags.
fn render(ctx: &Context, report: &RunReport, images_dir: &std::path::Path) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let verbosity = ctx.verbosity();
    if report.is_empty() {
        output::print(
            format!("no files found in {}", images_dir.display()),
            verbosity,
        );
        return Ok(());
    }

    if report.delete_failed() > 0 {
        for entry in &report.entries {
            if let crate::core::types::Outcome::DeleteFailed { reason } = &entry.outcome {
                output::warn(
                    format!("failed to delete {}: {}", entry.name, reason),
                    verbosity,
                );
            }
        }
    }

    output::print(output::format_summary(report), verbosity);
    Ok(())
}
