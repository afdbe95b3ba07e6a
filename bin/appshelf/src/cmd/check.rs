//! Check command - validate the apps tree

use std::{fs, path::Path};

use color_eyre::eyre::{Result, bail};

use appshelf_core::{ENTRY_FILE, NAME_HINT, is_valid_name};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Reports subdirectories without an entry file and folder names that
/// break the kebab-case convention. Warnings become a non-zero exit with
/// `--strict`.
pub fn run(apps_dir: &Path, strict: bool) -> Result<()> {
    tracing::info!(?apps_dir, strict, "Checking apps tree");

    let mut result = ValidationResult::default();

    println!("Checking {}...", apps_dir.display());
    validate_tree(apps_dir, &mut result)?;

    if result.has_warnings() {
        println!();
        for warning in &result.warnings {
            println!("  ⚠ {warning}");
        }
        println!();
        println!("{} warning(s)", result.warnings.len());

        if strict {
            bail!("{} warning(s) in strict mode", result.warnings.len());
        }
    } else {
        println!("  ✓ No problems found");
    }

    Ok(())
}

fn validate_tree(apps_dir: &Path, result: &mut ValidationResult) -> Result<()> {
    if !apps_dir.exists() {
        result.add_warning(format!(
            "apps root does not exist: {} (zero apps)",
            apps_dir.display()
        ));
        return Ok(());
    }

    for entry in fs::read_dir(apps_dir)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let folder = entry.file_name().to_string_lossy().into_owned();

        if !path.join(ENTRY_FILE).is_file() {
            result.add_warning(format!("{folder}: missing {ENTRY_FILE}, not indexed"));
        }

        if !is_valid_name(&folder) {
            result.add_warning(format!("{folder}: {NAME_HINT}"));
        }
    }

    Ok(())
}
