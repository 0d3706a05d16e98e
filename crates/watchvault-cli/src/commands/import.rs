//! `check-import`

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use watchvault_core::validate_import;

/// Validates `file` and prints its record counts as JSON.
pub fn check(file: &Path, out: &mut impl Write) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let bundle =
        validate_import(&text).with_context(|| format!("{} is not importable", file.display()))?;

    let counts = bundle.counts();
    tracing::info!(
        lists = counts.lists,
        assets = counts.assets,
        resources = counts.resources,
        "Import file is valid"
    );
    serde_json::to_writer_pretty(&mut *out, &counts)?;
    writeln!(out)?;
    Ok(())
}
