//! Build orchestration.
//!
//! Coordinates the scan-render-write pipeline for one index generation
//! run. Each run is independent and idempotent with respect to the
//! current directory contents.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use thiserror::Error;
use tracing::info;

use crate::{
    index::{IndexError, IndexRenderer, write_index},
    scanner::{AppScanner, ScanError},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Scan error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Index generation error.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of apps discovered and linked.
    pub apps: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Index builder that ties scanning and rendering together.
#[derive(Debug)]
pub struct Builder {
    scanner: AppScanner,
    renderer: IndexRenderer,
    output: PathBuf,
}

impl Builder {
    /// Create a builder for the given apps root and output file.
    #[must_use]
    pub fn new(apps_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            scanner: AppScanner::new(apps_dir),
            renderer: IndexRenderer::new(),
            output: output.into(),
        }
    }

    /// Replace the default renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: IndexRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// The output file this builder writes.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Run the scan-render-write pipeline.
    ///
    /// Creates the apps root afterwards if it was missing.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        let apps = self.scanner.scan()?;
        let html = self.renderer.render(&apps)?;

        fs::create_dir_all(self.scanner.apps_dir())?;
        write_index(&self.output, &html)?;

        let stats = BuildStats {
            apps: apps.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            apps = stats.apps,
            output = %self.output.display(),
            duration_ms = stats.duration_ms,
            "index build complete"
        );

        Ok(stats)
    }
}
