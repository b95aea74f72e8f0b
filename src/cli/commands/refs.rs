//! refs command - Print the image references found in the definition file
//!
//! Extraction only; nothing is deleted. One reference per line, in order of
//! first appearance. With `--json` the set is emitted as a JSON array.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::{Settings, SweepConfig};
use crate::core::extract::extract_references;
use crate::ui::output;

/// Print the extracted reference set.
pub fn refs(ctx: &Context, items_file: Option<PathBuf>) -> Result<()> {
    let verbosity = ctx.verbosity();

    let config = SweepConfig::load(ctx.config.as_deref()).context("Failed to load config")?;
    let settings = Settings::resolve(&config, items_file, None);

    let refs = extract_references(&settings.items_file)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&refs)?);
        return Ok(());
    }

    // References go to stdout unconditionally so the command stays pipeable;
    // only the count line respects quiet mode.
    for name in refs.iter() {
        println!("{}", name);
    }
    output::print(
        format!(
            "{} reference(s) in {}",
            refs.len(),
            settings.items_file.display()
        ),
        verbosity,
    );

    Ok(())
}
