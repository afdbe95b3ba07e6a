//! Appshelf CLI
//!
//! Scaffolds and indexes a collection of independent static single-page
//! apps under one directory tree.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Appshelf.
#[derive(Parser)]
#[command(
    name = "appshelf",
    version,
    about = "Scaffold and index a shelf of static single-page apps"
)]
struct Cli {
    /// Apps root directory
    #[arg(long, default_value = "apps")]
    apps_dir: std::path::PathBuf,

    /// Generated landing page location
    #[arg(long, default_value = "index.html")]
    output: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate the landing page from the apps root
    Index,
    /// List discovered apps
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scaffold a new app folder
    New {
        /// App folder name (prefer kebab-case)
        name: String,
        /// Display title (derived from the name by default)
        #[arg(long)]
        title: Option<String>,
        /// Description for the meta tags
        #[arg(long)]
        description: Option<String>,
        /// Do not create style.css
        #[arg(long)]
        no_css: bool,
        /// Do not create main.js
        #[arg(long)]
        no_js: bool,
        /// Do not create an assets/ directory
        #[arg(long)]
        no_assets: bool,
        /// Regenerate the landing page afterwards
        #[arg(long)]
        update_index: bool,
    },
    /// Interactively scaffold a new app folder
    Wizard,
    /// Validate the apps tree
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    appshelf::init_tracing(cli.verbose);

    match cli.command {
        Commands::Index => {
            appshelf::cmd::index::run(&cli.apps_dir, &cli.output)?;
        }
        Commands::List { json } => {
            appshelf::cmd::list::run(&cli.apps_dir, json)?;
        }
        Commands::New {
            name,
            title,
            description,
            no_css,
            no_js,
            no_assets,
            update_index,
        } => {
            let options = appshelf::ScaffoldOptions {
                title,
                description,
                css: !no_css,
                js: !no_js,
                assets: !no_assets,
            };
            appshelf::cmd::new::run(&cli.apps_dir, &cli.output, &name, &options, update_index)?;
        }
        Commands::Wizard => {
            appshelf::cmd::wizard::run(&cli.apps_dir, &cli.output)?;
        }
        Commands::Check { strict } => {
            appshelf::cmd::check::run(&cli.apps_dir, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_index_command_parsing() {
        let args = ["appshelf", "index"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.apps_dir, std::path::PathBuf::from("apps"));
        assert_eq!(cli.output, std::path::PathBuf::from("index.html"));
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Index));
    }

    #[test]
    fn test_cli_custom_dirs() {
        let args = [
            "appshelf",
            "--apps-dir",
            "pages",
            "--output",
            "public/index.html",
            "index",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.apps_dir, std::path::PathBuf::from("pages"));
        assert_eq!(cli.output, std::path::PathBuf::from("public/index.html"));
    }

    #[test]
    fn test_cli_new_command_parsing() {
        let args = ["appshelf", "new", "my-cool-app", "--no-js", "--update-index"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::New {
                name,
                title,
                no_css,
                no_js,
                no_assets,
                update_index,
                ..
            } => {
                assert_eq!(name, "my-cool-app");
                assert!(title.is_none());
                assert!(!no_css);
                assert!(no_js);
                assert!(!no_assets);
                assert!(update_index);
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_cli_new_with_title_and_description() {
        let args = [
            "appshelf",
            "new",
            "demo",
            "--title",
            "Demo App",
            "--description",
            "A demo.",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::New {
                title, description, ..
            } => {
                assert_eq!(title.as_deref(), Some("Demo App"));
                assert_eq!(description.as_deref(), Some("A demo."));
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_cli_list_json_flag() {
        let args = ["appshelf", "list", "--json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::List { json } => assert!(json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_check_strict() {
        let args = ["appshelf", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["appshelf", "-vvv", "index"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }
}
