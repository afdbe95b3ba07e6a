//! Display-title derivation from folder names.

/// Derive a human-readable title from a folder name.
///
/// Splits on `-` and `_`, drops empty tokens, uppercases the first
/// character of each token (the rest is left unchanged), and joins with
/// single spaces.
///
/// # Examples
///
/// ```
/// use appshelf_core::derive_title;
///
/// assert_eq!(derive_title("my-cool-app"), "My Cool App");
/// assert_eq!(derive_title("snake_case_name"), "Snake Case Name");
/// ```
#[must_use]
pub fn derive_title(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a token, leaving the rest as-is.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
