//! Landing-page rendering and writing.
//!
//! Turns a list of discovered apps into a self-contained HTML document
//! with one link card per app and a client-side substring filter.

use std::{fs, path::Path};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};

use appshelf_core::AppEntry;

use crate::{
    escape::html_escape,
    template::{TemplateContext, TemplateError, TemplateRegistry},
};

/// Index generation errors.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for index generation.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Format of the embedded generation timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Landing-page renderer.
///
/// Rendering is deterministic for a given entry sequence, modulo the
/// embedded generation timestamp.
#[derive(Debug)]
pub struct IndexRenderer {
    templates: TemplateRegistry,
    title: String,
    subtitle: String,
}

impl Default for IndexRenderer {
    fn default() -> Self {
        Self {
            templates: TemplateRegistry::new(),
            title: "Mini Apps".to_string(),
            subtitle: "Multiple single-page HTML apps hosted under one static site.".to_string(),
        }
    }
}

impl IndexRenderer {
    /// Create a renderer with the default page title and templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the page subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Render the landing page, stamping the current local time.
    pub fn render(&self, apps: &[AppEntry]) -> Result<String> {
        let generated = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.render_at(apps, &generated)
    }

    /// Render the landing page with an explicit timestamp string.
    ///
    /// Byte-deterministic for a given entry sequence and timestamp.
    pub fn render_at(&self, apps: &[AppEntry], generated: &str) -> Result<String> {
        debug!(apps = apps.len(), "rendering index");

        let content = if apps.is_empty() {
            self.templates.render("empty", &TemplateContext::new())?
        } else {
            let cards = apps
                .iter()
                .map(|app| self.render_card(app))
                .collect::<Result<Vec<_>>>()?;
            cards.join("\n")
        };

        let ctx = TemplateContext::new()
            .with_var("title", html_escape(&self.title))
            .with_var("subtitle", html_escape(&self.subtitle))
            .with_var("generated", html_escape(generated))
            .with_var("total", apps.len().to_string())
            .with_var("content", content);

        Ok(self.templates.render("index", &ctx)?)
    }

    /// Render one card. Everything interpolated into markup is escaped;
    /// the search key is additionally lowercased by [`AppEntry`].
    fn render_card(&self, app: &AppEntry) -> Result<String> {
        let ctx = TemplateContext::new()
            .with_var("href", html_escape(&app.href))
            .with_var("search_key", html_escape(&app.search_key()))
            .with_var("title", html_escape(&app.title))
            .with_var("path", html_escape(&app.display_path()));

        Ok(self.templates.render("card", &ctx)?)
    }
}

/// Write the rendered document, fully overwriting any prior content.
///
/// Not transactional: a crash mid-write can leave a truncated file.
pub fn write_index(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, html)?;
    info!(path = %path.display(), bytes = html.len(), "wrote index");
    Ok(())
}
