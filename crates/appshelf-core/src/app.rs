//! App entry types.

use serde::{Deserialize, Serialize};

use crate::title::derive_title;

/// File whose presence marks a subdirectory as a valid app.
pub const ENTRY_FILE: &str = "index.html";

/// Default final path component of the apps root, used in generated links.
pub const DEFAULT_APPS_PREFIX: &str = "apps";

/// One discovered app: a subdirectory of the apps root that directly
/// contains an [`ENTRY_FILE`].
///
/// Entries are immutable once derived and live only for the duration of
/// one index-generation run; only their rendered HTML projection is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Folder name, unique within the apps root.
    pub folder: String,

    /// Human-readable display title derived from the folder name.
    pub title: String,

    /// Relative link target, e.g. `./apps/my-cool-app/`.
    ///
    /// Relative so the generated index survives subpath hosting.
    pub href: String,
}

impl AppEntry {
    /// Create an entry for a folder under an apps root whose final path
    /// component is `prefix`.
    #[must_use]
    pub fn new(folder: impl Into<String>, prefix: &str) -> Self {
        let folder = folder.into();
        let title = derive_title(&folder);
        let href = format!("./{prefix}/{folder}/");
        Self {
            folder,
            title,
            href,
        }
    }

    /// Create an entry with the default `apps/` prefix.
    #[must_use]
    pub fn from_folder(folder: impl Into<String>) -> Self {
        Self::new(folder, DEFAULT_APPS_PREFIX)
    }

    /// Display path shown on the card, e.g. `apps/my-cool-app/`.
    #[must_use]
    pub fn display_path(&self) -> String {
        self.href.trim_start_matches("./").to_string()
    }

    /// Lowercase key the client-side filter matches queries against:
    /// title, display path, and folder joined by single spaces.
    #[must_use]
    pub fn search_key(&self) -> String {
        format!("{} {} {}", self.title, self.display_path(), self.folder).to_lowercase()
    }
}
