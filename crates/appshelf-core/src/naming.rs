//! Folder-name conventions.
//!
//! App folders are expected to be kebab-case. Violations are advisory:
//! callers surface a warning and proceed unless the user aborts.

use std::sync::LazyLock;

use regex::Regex;

static KEBAB_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("kebab-case pattern is valid")
});

/// Hint shown alongside naming warnings.
pub const NAME_HINT: &str = "app name should be kebab-case like 'my-cool-app'";

/// Check whether a folder name follows the kebab-case convention:
/// lowercase alphanumeric runs separated by single hyphens.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    KEBAB_CASE.is_match(name)
}
