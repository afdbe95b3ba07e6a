//! New-app scaffolding.
//!
//! Creates `apps/<name>/` from the built-in templates: an entry file,
//! optionally a stylesheet, a module script, and an empty assets
//! directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use appshelf_core::{ENTRY_FILE, derive_title};

use crate::{
    escape::html_escape,
    template::{TemplateContext, TemplateError, TemplateRegistry},
};

/// Scaffolding errors.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Destination folder already exists.
    #[error("app folder already exists: {0}")]
    FolderExists(PathBuf),

    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Options controlling which files a scaffold produces.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Display title; derived from the folder name when `None`.
    pub title: Option<String>,

    /// Description for the meta tags; a stock sentence when `None`.
    pub description: Option<String>,

    /// Create `style.css` and link it from the entry file.
    pub css: bool,

    /// Create `main.js` and reference it from the entry file.
    pub js: bool,

    /// Create an empty `assets/` directory.
    pub assets: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            css: true,
            js: true,
            assets: true,
        }
    }
}

/// What a scaffold run created.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// The new app directory.
    pub app_dir: PathBuf,

    /// Files written, relative to the app directory.
    pub files: Vec<PathBuf>,

    /// Created assets directory, relative to the app directory.
    pub assets_dir: Option<PathBuf>,
}

/// Scaffolder that writes new app folders under an apps root.
#[derive(Debug)]
pub struct Scaffolder {
    apps_dir: PathBuf,
    templates: TemplateRegistry,
}

impl Scaffolder {
    /// Create a scaffolder for the given apps root.
    #[must_use]
    pub fn new(apps_dir: impl Into<PathBuf>) -> Self {
        Self {
            apps_dir: apps_dir.into(),
            templates: TemplateRegistry::new(),
        }
    }

    /// The apps root this scaffolder writes under.
    #[must_use]
    pub fn apps_dir(&self) -> &Path {
        &self.apps_dir
    }

    /// Create `apps/<name>/` with the files selected by `options`.
    ///
    /// The apps root is created first if missing. An existing destination
    /// folder is fatal for the operation; partial state from a failed run
    /// is not cleaned up.
    pub fn scaffold(&self, name: &str, options: &ScaffoldOptions) -> Result<ScaffoldReport> {
        fs::create_dir_all(&self.apps_dir)?;

        let app_dir = self.apps_dir.join(name);
        if app_dir.exists() {
            return Err(ScaffoldError::FolderExists(app_dir));
        }

        info!(dir = %app_dir.display(), "scaffolding app");
        fs::create_dir(&app_dir)?;

        let title = options
            .title
            .clone()
            .unwrap_or_else(|| derive_title(name));
        let description = options
            .description
            .clone()
            .unwrap_or_else(|| format!("{title} - A lightweight single-page HTML app."));

        let mut report = ScaffoldReport {
            app_dir: app_dir.clone(),
            files: Vec::new(),
            assets_dir: None,
        };

        if options.assets {
            fs::create_dir(app_dir.join("assets"))?;
            report.assets_dir = Some(PathBuf::from("assets"));
        }

        let entry = self.render_entry_file(&title, &description, options)?;
        fs::write(app_dir.join(ENTRY_FILE), entry)?;
        report.files.push(PathBuf::from(ENTRY_FILE));

        if options.css {
            let style = self.templates.render("app_style", &TemplateContext::new())?;
            fs::write(app_dir.join("style.css"), style)?;
            report.files.push(PathBuf::from("style.css"));
        }

        if options.js {
            let ctx = TemplateContext::new().with_var("title", &title);
            let main = self.templates.render("app_main", &ctx)?;
            fs::write(app_dir.join("main.js"), main)?;
            report.files.push(PathBuf::from("main.js"));
        }

        debug!(files = report.files.len(), "scaffold complete");
        Ok(report)
    }

    fn render_entry_file(
        &self,
        title: &str,
        description: &str,
        options: &ScaffoldOptions,
    ) -> Result<String> {
        let mut edit_hint = String::from("<code>index.html</code>");
        if options.css {
            edit_hint.push_str(", <code>style.css</code>");
        }
        if options.js {
            edit_hint.push_str(", and <code>main.js</code>");
        }

        let mut ctx = TemplateContext::new()
            .with_var("title", html_escape(title))
            .with_var("description", html_escape(description))
            .with_var("edit_hint", edit_hint);

        if options.css {
            ctx.insert("css_link", "  <link rel=\"stylesheet\" href=\"./style.css\" />\n");
        }
        if options.js {
            ctx.insert("js_script", "  <script type=\"module\" src=\"./main.js\"></script>");
        }

        Ok(self.templates.render("app_index", &ctx)?)
    }
}
