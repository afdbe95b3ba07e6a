//! Appshelf CLI Library
//!
//! Command implementations for the `appshelf` binary: index generation,
//! app listing, scaffolding (flag-driven and interactive), and tree
//! validation.

pub mod cmd;

// Re-export core types for convenience
pub use appshelf_core::{AppEntry, derive_title, is_valid_name};
pub use appshelf_generator::{BuildStats, Builder, ScaffoldOptions, Scaffolder};

/// Initialize tracing with the specified verbosity level.
///
/// Verbosity maps 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE; the
/// `RUST_LOG` environment filter still applies on top.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
