//! Appshelf Generator Library
//!
//! Index generation and app scaffolding engine for Appshelf.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`escape`] - HTML escaping
//! - [`scanner`] - App discovery under the apps root
//! - [`index`] - Landing-page rendering and writing
//! - [`scaffold`] - New-app scaffolding from built-in templates
//! - [`build`] - Scan-render-write orchestration

pub mod build;
pub mod escape;
pub mod index;
pub mod scaffold;
pub mod scanner;
pub mod template;

pub use build::{BuildStats, Builder};
pub use escape::html_escape;
pub use index::{IndexRenderer, write_index};
pub use scaffold::{ScaffoldOptions, ScaffoldReport, Scaffolder};
pub use scanner::AppScanner;
pub use template::{Template, TemplateContext, TemplateRegistry};
