//! List command - print discovered apps

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use appshelf_generator::AppScanner;

/// Run the list command.
///
/// Prints discovered apps as a table, or as JSON with `--json`.
pub fn run(apps_dir: &Path, json: bool) -> Result<()> {
    tracing::info!(?apps_dir, json, "Listing apps");

    let entries = AppScanner::new(apps_dir).scan().wrap_err("Scan failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No apps found under {}", apps_dir.display());
        return Ok(());
    }

    for entry in &entries {
        println!("{:<28} {}", entry.folder, entry.title);
    }
    println!();
    println!("{} app(s)", entries.len());

    Ok(())
}
