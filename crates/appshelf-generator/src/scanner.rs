//! App discovery.
//!
//! Walks the immediate children of the apps root and collects every
//! subdirectory that directly contains an entry file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, warn};

use appshelf_core::{AppEntry, DEFAULT_APPS_PREFIX, ENTRY_FILE};

/// Scan errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error reading the apps root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Scanner that discovers apps under a root directory.
///
/// Only direct children qualify; there is no recursion below depth 1.
/// A scan is restartable: every [`scan`](AppScanner::scan) call re-reads
/// the directory.
#[derive(Debug)]
pub struct AppScanner {
    apps_dir: PathBuf,
    prefix: String,
}

impl AppScanner {
    /// Create a scanner for the given apps root.
    ///
    /// Generated links use the root's final path component as their
    /// prefix, so scanning `some/where/apps` still yields
    /// `./apps/<folder>/` hrefs.
    #[must_use]
    pub fn new(apps_dir: impl Into<PathBuf>) -> Self {
        let apps_dir = apps_dir.into();
        let prefix = apps_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_APPS_PREFIX.to_string());
        Self { apps_dir, prefix }
    }

    /// The apps root this scanner reads.
    #[must_use]
    pub fn apps_dir(&self) -> &Path {
        &self.apps_dir
    }

    /// Discover all apps, sorted case-insensitively by folder name.
    ///
    /// A missing apps root yields an empty vec, not an error; the caller
    /// may create the root afterwards. Unreadable or non-UTF-8 entries
    /// are skipped with a warning and never abort the scan.
    pub fn scan(&self) -> Result<Vec<AppEntry>> {
        if !self.apps_dir.exists() {
            debug!(dir = %self.apps_dir.display(), "apps root does not exist");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in fs::read_dir(&self.apps_dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            if !path.join(ENTRY_FILE).is_file() {
                debug!(dir = %path.display(), "no entry file, skipping");
                continue;
            }

            let Some(folder) = path.file_name().and_then(|name| name.to_str()) else {
                warn!(dir = %path.display(), "skipping non-UTF-8 folder name");
                continue;
            };

            entries.push(AppEntry::new(folder, &self.prefix));
        }

        entries.sort_by(|a, b| a.folder.to_lowercase().cmp(&b.folder.to_lowercase()));

        info!(
            dir = %self.apps_dir.display(),
            count = entries.len(),
            "scan complete"
        );

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn make_app(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(ENTRY_FILE), "<!doctype html>").unwrap();
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let tmp = TempDir::new().unwrap();
        let scanner = AppScanner::new(tmp.path().join("apps"));
        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_sorted_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("apps");
        make_app(&apps, "zeta");
        make_app(&apps, "alpha-beta");
        make_app(&apps, "apple");

        let entries = AppScanner::new(&apps).scan().unwrap();
        let folders: Vec<_> = entries.iter().map(|e| e.folder.as_str()).collect();
        assert_eq!(folders, ["alpha-beta", "apple", "zeta"]);

        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Alpha Beta", "Apple", "Zeta"]);
    }

    #[test]
    fn test_uppercase_names_sort_with_lowercase() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("apps");
        make_app(&apps, "Banana");
        make_app(&apps, "apple");
        make_app(&apps, "cherry");

        let entries = AppScanner::new(&apps).scan().unwrap();
        let folders: Vec<_> = entries.iter().map(|e| e.folder.as_str()).collect();
        assert_eq!(folders, ["apple", "Banana", "cherry"]);
    }

    #[test]
    fn test_skips_dirs_without_entry_file() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("apps");
        make_app(&apps, "real");
        fs::create_dir_all(apps.join("not-an-app")).unwrap();

        let entries = AppScanner::new(&apps).scan().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].folder, "real");
    }

    #[test]
    fn test_skips_regular_files() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("apps");
        make_app(&apps, "real");
        fs::write(apps.join("stray.html"), "x").unwrap();

        let entries = AppScanner::new(&apps).scan().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_no_recursion_below_depth_one() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("apps");
        // Entry file one level too deep does not qualify.
        let nested = apps.join("outer").join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(ENTRY_FILE), "x").unwrap();

        let entries = AppScanner::new(&apps).scan().unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_hrefs_use_root_dir_name() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("apps");
        make_app(&apps, "demo");

        let entries = AppScanner::new(&apps).scan().unwrap();
        assert_eq!(entries[0].href, "./apps/demo/");
    }

    #[test]
    fn test_rescan_picks_up_changes() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("apps");
        make_app(&apps, "first");

        let scanner = AppScanner::new(&apps);
        assert_eq!(scanner.scan().unwrap().len(), 1);

        make_app(&apps, "second");
        assert_eq!(scanner.scan().unwrap().len(), 2);
    }
}
