//! Appshelf Core Library
//!
//! Core types and naming rules for the Appshelf app-collection tooling.

pub mod app;
pub mod naming;
pub mod title;

pub use app::{AppEntry, DEFAULT_APPS_PREFIX, ENTRY_FILE};
pub use naming::{NAME_HINT, is_valid_name};
pub use title::derive_title;
