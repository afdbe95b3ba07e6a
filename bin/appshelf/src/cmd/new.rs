//! New command - scaffold a new app folder

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use appshelf_core::{NAME_HINT, is_valid_name};
use appshelf_generator::{Builder, ScaffoldOptions, Scaffolder};

/// Run the new command.
///
/// Validates the name (warning only), scaffolds the app folder, and
/// optionally regenerates the landing page. An existing destination
/// folder aborts with a non-zero exit.
pub fn run(
    apps_dir: &Path,
    output: &Path,
    name: &str,
    options: &ScaffoldOptions,
    update_index: bool,
) -> Result<()> {
    let name = name.trim();
    tracing::info!(name, ?apps_dir, "Scaffolding new app");

    if !is_valid_name(name) {
        eprintln!("  ⚠ Warning: {NAME_HINT}.");
    }

    let report = Scaffolder::new(apps_dir)
        .scaffold(name, options)
        .wrap_err("Scaffold failed")?;

    println!("Created: {}", report.app_dir.display());
    for file in &report.files {
        println!("  • {}", file.display());
    }
    if let Some(assets) = &report.assets_dir {
        println!("  • {}/", assets.display());
    }

    if update_index {
        let stats = Builder::new(apps_dir, output)
            .build()
            .wrap_err("Index update failed")?;
        println!("Updated {} ({} apps)", output.display(), stats.apps);
    }

    println!("Done.");
    Ok(())
}
