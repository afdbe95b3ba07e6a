//! Wizard command - interactive scaffold

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use color_eyre::eyre::{Result, WrapErr, bail};
use walkdir::WalkDir;

use appshelf_core::{NAME_HINT, derive_title, is_valid_name};
use appshelf_generator::{Builder, ScaffoldOptions, Scaffolder};

/// Run the wizard command.
///
/// Prompts for the same parameters as `new`, with defaults, and asks for
/// confirmation before writing anything. Declining the confirmation
/// aborts with a non-zero exit and no files written.
pub fn run(apps_dir: &Path, output: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(&mut input, apps_dir, output)
}

fn run_with_input(input: &mut impl BufRead, apps_dir: &Path, output: &Path) -> Result<()> {
    println!();
    println!("New app wizard. Press Enter to accept the [default].");
    println!();

    // Folder name, re-asked until acceptable.
    let name = loop {
        let candidate = prompt_required(input, "Folder name")?.to_lowercase();

        if !is_valid_name(&candidate) {
            println!("  ⚠ Warning: {NAME_HINT}.");
            if !prompt_yes_no(input, "  Continue anyway?", false)? {
                continue;
            }
        }

        if apps_dir.join(&candidate).exists() {
            println!("  ⚠ App folder already exists: {}", apps_dir.join(&candidate).display());
            continue;
        }

        break candidate;
    };

    let title = prompt(input, "Title", &derive_title(&name))?;
    let description = prompt(
        input,
        "Description",
        &format!("{title} - A lightweight single-page HTML app."),
    )?;
    let css = prompt_yes_no(input, "Include style.css?", true)?;
    let js = prompt_yes_no(input, "Include main.js?", true)?;
    let assets = prompt_yes_no(input, "Include assets folder?", true)?;
    let update_index = prompt_yes_no(input, "Update the landing page afterwards?", true)?;

    println!();
    println!("  Folder:       {name}");
    println!("  Title:        {title}");
    println!("  Description:  {description}");
    println!("  CSS:          {}", yes_no(css));
    println!("  JavaScript:   {}", yes_no(js));
    println!("  Assets:       {}", yes_no(assets));
    println!("  Update index: {}", yes_no(update_index));
    println!();

    if !prompt_yes_no(input, "Create this app?", true)? {
        bail!("cancelled, nothing was written");
    }

    let options = ScaffoldOptions {
        title: Some(title),
        description: Some(description),
        css,
        js,
        assets,
    };

    let report = Scaffolder::new(apps_dir)
        .scaffold(&name, &options)
        .wrap_err("Scaffold failed")?;

    println!();
    println!("Created: {}", report.app_dir.display());
    list_created(&report.app_dir);

    if update_index {
        let stats = Builder::new(apps_dir, output)
            .build()
            .wrap_err("Index update failed")?;
        println!("Updated {} ({} apps)", output.display(), stats.apps);
    }

    println!("Done.");
    Ok(())
}

/// Print everything under the new app directory, directories first
/// marked with a trailing slash.
fn list_created(app_dir: &Path) {
    for entry in WalkDir::new(app_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let rel = entry
            .path()
            .strip_prefix(app_dir)
            .unwrap_or(entry.path())
            .display();
        if entry.file_type().is_dir() {
            println!("  • {rel}/");
        } else {
            println!("  • {rel}");
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Read one trimmed line; `None` on end of input.
fn read_reply(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt with a default; an empty reply accepts the default.
fn prompt(input: &mut impl BufRead, message: &str, default: &str) -> Result<String> {
    print!("{message} [{default}]: ");
    io::stdout().flush()?;

    match read_reply(input)? {
        None => bail!("input ended unexpectedly"),
        Some(reply) if reply.is_empty() => Ok(default.to_string()),
        Some(reply) => Ok(reply),
    }
}

/// Prompt until a non-empty reply arrives.
fn prompt_required(input: &mut impl BufRead, message: &str) -> Result<String> {
    loop {
        print!("{message}: ");
        io::stdout().flush()?;

        match read_reply(input)? {
            None => bail!("input ended unexpectedly"),
            Some(reply) if reply.is_empty() => println!("  ⚠ This field is required."),
            Some(reply) => return Ok(reply),
        }
    }
}

/// Yes/no prompt; an empty reply accepts the default.
fn prompt_yes_no(input: &mut impl BufRead, message: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    print!("{message} [{hint}]: ");
    io::stdout().flush()?;

    match read_reply(input)? {
        None => bail!("input ended unexpectedly"),
        Some(reply) if reply.is_empty() => Ok(default),
        Some(reply) => Ok(matches!(
            reply.to_lowercase().as_str(),
            "y" | "yes" | "1" | "true"
        )),
    }
}
