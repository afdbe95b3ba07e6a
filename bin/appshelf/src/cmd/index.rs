//! Index command - regenerate the landing page

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use appshelf_generator::Builder;

/// Run the index command.
///
/// Scans the apps root, renders the landing page, and writes it to the
/// output location.
pub fn run(apps_dir: &Path, output: &Path) -> Result<()> {
    tracing::info!(?apps_dir, ?output, "Generating index");

    let stats = Builder::new(apps_dir, output)
        .build()
        .wrap_err("Index generation failed")?;

    println!();
    println!("  Found {} app(s).", stats.apps);
    println!("  Output:   {}", output.display());
    println!("  Duration: {}ms", stats.duration_ms);
    println!();

    Ok(())
}
