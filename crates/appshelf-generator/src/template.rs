//! HTML template system for page generation.
//!
//! A lightweight string-interpolation engine rather than a full template
//! crate: the documents produced here are a fixed skeleton with a handful
//! of substitution points.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with an additional variable.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Check if a variable exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}

/// A template supporting `{{ variable }}` interpolation.
///
/// A trailing `?` marks a variable optional: `{{ variable? }}` renders as
/// the empty string when absent from the context. Substituted values are
/// not re-scanned.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped, true),
                None => (var_name, false),
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    /// Register built-in templates.
    fn register_defaults(&mut self) {
        self.register(Template::new("index", INDEX_TEMPLATE));
        self.register(Template::new("card", CARD_TEMPLATE));
        self.register(Template::new("empty", EMPTY_TEMPLATE));
        self.register(Template::new("app_index", APP_INDEX_TEMPLATE));
        self.register(Template::new("app_style", APP_STYLE_TEMPLATE));
        self.register(Template::new("app_main", APP_MAIN_TEMPLATE));
    }

    /// Register a template, replacing any existing one with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Landing-page skeleton.
///
/// Variables: `title`, `subtitle`, `generated`, `total`, `content`.
/// The embedded script implements the client-side substring filter: a
/// card stays visible iff the trimmed, lowercased query is empty or a
/// substring of the card's `data-search` key.
pub const INDEX_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }}</title>
  <style>
    :root {
      --bg: #ffffff;
      --fg: #111111;
      --muted: #6b7280;
      --border: #e5e7eb;
      --hover: #f8fafc;
      --accent: #111827;
      --shadow: 0 6px 20px rgba(0,0,0,0.06);
      --radius: 14px;
    }

    * { box-sizing: border-box; }
    [hidden] { display: none !important; }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--fg);
      font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, "Apple Color Emoji", "Segoe UI Emoji";
    }

    .wrap {
      max-width: 920px;
      margin: 48px auto 80px;
      padding: 0 20px;
    }

    header {
      display: flex;
      gap: 14px;
      align-items: baseline;
      justify-content: space-between;
      flex-wrap: wrap;
      margin-bottom: 22px;
    }

    .title {
      font-size: 28px;
      font-weight: 700;
      letter-spacing: -0.02em;
      margin: 0;
    }

    .subtitle {
      color: var(--muted);
      font-size: 14px;
      margin-top: 6px;
    }

    .meta {
      color: var(--muted);
      font-size: 12px;
    }

    .toolbar {
      display: flex;
      gap: 12px;
      align-items: center;
      margin-bottom: 18px;
    }

    .toolbar input {
      flex: 1;
      font: inherit;
      font-size: 14px;
      color: var(--fg);
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 9px 12px;
      outline: none;
    }

    .toolbar input:focus {
      border-color: #9ca3af;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 14px;
    }

    .card {
      display: block;
      text-decoration: none;
      color: inherit;
      border: 1px solid var(--border);
      border-radius: var(--radius);
      padding: 16px 16px 14px;
      background: #fff;
      transition: transform 120ms ease, box-shadow 120ms ease, background 120ms ease, border-color 120ms ease;
    }

    .card:hover {
      background: var(--hover);
      border-color: #d1d5db;
      box-shadow: var(--shadow);
      transform: translateY(-1px);
    }

    .card-title {
      font-size: 16px;
      font-weight: 650;
      color: var(--accent);
      margin-bottom: 6px;
    }

    .card-sub {
      font-size: 12px;
      color: var(--muted);
      font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", monospace;
    }

    .empty {
      border: 1px dashed var(--border);
      border-radius: var(--radius);
      padding: 22px;
      color: var(--muted);
      background: #fafafa;
    }
    .empty-title {
      font-size: 16px;
      font-weight: 600;
      color: var(--fg);
      margin-bottom: 6px;
    }
    .empty-sub code {
      background: #fff;
      border: 1px solid var(--border);
      padding: 1px 6px;
      border-radius: 6px;
    }

    footer {
      margin-top: 28px;
      color: var(--muted);
      font-size: 12px;
    }
  </style>
</head>
<body>
  <div class="wrap">
    <header>
      <div>
        <h1 class="title">{{ title }}</h1>
        <div class="subtitle">{{ subtitle }}</div>
      </div>
      <div class="meta">Generated: {{ generated }}</div>
    </header>

    <div class="toolbar">
      <input id="search" type="search" placeholder="Filter apps..." autocomplete="off" />
      <span id="count" class="meta">{{ total }} / {{ total }}</span>
    </div>

    <main class="grid" id="grid">
{{ content }}
    </main>

    <div class="empty" id="no-results" hidden>
      <div class="empty-title">No matching apps</div>
      <div class="empty-sub">No app matches the current filter.</div>
    </div>

    <footer>
      <div>Rules: apps live in <code>apps/&lt;app-name&gt;/index.html</code>, use relative asset paths only.</div>
      <div>Local dev: <code>python -m http.server 8000</code></div>
    </footer>
  </div>

  <script>
    const input = document.getElementById("search");
    const count = document.getElementById("count");
    const noResults = document.getElementById("no-results");
    const cards = Array.from(document.querySelectorAll(".card"));

    function applyFilter() {
      const query = input.value.trim().toLowerCase();
      let visible = 0;
      for (const card of cards) {
        const match = query === "" || card.dataset.search.includes(query);
        card.hidden = !match;
        if (match) {
          visible += 1;
        }
      }
      count.textContent = visible + " / " + cards.length;
      noResults.hidden = !(query !== "" && visible === 0);
    }

    input.addEventListener("input", applyFilter);
    applyFilter();
  </script>
</body>
</html>
"#;

/// One link card. Variables: `href`, `search_key`, `title`, `path`.
pub const CARD_TEMPLATE: &str = r#"<a class="card" href="{{ href }}" data-search="{{ search_key }}">
  <div class="card-title">{{ title }}</div>
  <div class="card-sub">{{ path }}</div>
</a>"#;

/// Placeholder rendered instead of cards when no apps were found.
pub const EMPTY_TEMPLATE: &str = r#"<div class="empty">
  <div class="empty-title">No apps found</div>
  <div class="empty-sub">Create <code>apps/&lt;app-name&gt;/index.html</code> then re-run the generator.</div>
</div>"#;

/// Scaffolded app entry file.
///
/// Variables: `title`, `description`, `css_link?`, `js_script?`,
/// `edit_hint`.
pub const APP_INDEX_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }}</title>

  <!-- SEO Meta Tags -->
  <meta name="description" content="{{ description }}" />

  <!-- Open Graph -->
  <meta property="og:type" content="website" />
  <meta property="og:title" content="{{ title }}" />
  <meta property="og:description" content="{{ description }}" />

  <!-- Twitter -->
  <meta name="twitter:card" content="summary" />
  <meta name="twitter:title" content="{{ title }}" />
  <meta name="twitter:description" content="{{ description }}" />

{{ css_link? }}</head>
<body>
  <main class="wrap">
    <header class="hero">
      <h1>{{ title }}</h1>
      <p class="muted">{{ description }}</p>
      <p class="muted">
        Served safely under subpath hosting using relative URLs.
      </p>
    </header>

    <section class="card">
      <h2>It works</h2>
      <p>
        Edit {{ edit_hint }}
        to build your app.
      </p>
    </section>
  </main>
{{ js_script? }}
</body>
</html>
"#;

/// Scaffolded starter stylesheet. No variables.
pub const APP_STYLE_TEMPLATE: &str = r#":root {
  --bg: #ffffff;
  --fg: #111111;
  --muted: #6b7280;
  --border: #e5e7eb;
  --card: #ffffff;
  --shadow: 0 6px 20px rgba(0,0,0,0.06);
  --radius: 14px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--fg);
  font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, "Apple Color Emoji", "Segoe UI Emoji";
}

.wrap {
  max-width: 900px;
  margin: 48px auto 80px;
  padding: 0 20px;
}

.hero h1 {
  font-size: 28px;
  margin: 0 0 8px 0;
  letter-spacing: -0.02em;
}

.muted {
  color: var(--muted);
  font-size: 14px;
  margin: 6px 0;
}

.card {
  margin-top: 18px;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 18px;
  box-shadow: var(--shadow);
}

code {
  background: #f8fafc;
  border: 1px solid var(--border);
  padding: 1px 6px;
  border-radius: 6px;
  font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", monospace;
  font-size: 0.95em;
}
"#;

/// Scaffolded starter script. Variables: `title`.
pub const APP_MAIN_TEMPLATE: &str = r#"// {{ title }} - main script
// Keep things simple and relative-path safe for subpath hosting.

console.log("Hello from {{ title }}!");

export function init() {
  // Your app boot code here.
}

init();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_simple_render() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let mut ctx = TemplateContext::new();
        ctx.insert("name", "World");

        let result = template.render(&ctx).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_template_multiple_variables() {
        let template = Template::new("test", "{{ greeting }}, {{ name }}!");
        let ctx = TemplateContext::new()
            .with_var("greeting", "Hello")
            .with_var("name", "User");

        let result = template.render(&ctx).unwrap();
        assert_eq!(result, "Hello, User!");
    }

    #[test]
    fn test_template_optional_variable() {
        let template = Template::new("test", "Hello{{ suffix? }}!");
        let ctx = TemplateContext::new();

        let result = template.render(&ctx).unwrap();
        assert_eq!(result, "Hello!");

        let ctx = TemplateContext::new().with_var("suffix", ", World");
        let result = template.render(&ctx).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_template_missing_required_variable() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let ctx = TemplateContext::new();

        let result = template.render(&ctx);
        assert!(matches!(result, Err(TemplateError::MissingVariable(_))));
    }

    #[test]
    fn test_template_unclosed_delimiter() {
        let template = Template::new("test", "Hello, {{ name");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::InvalidSyntax(_))));
    }

    #[test]
    fn test_substituted_values_not_rescanned() {
        let template = Template::new("test", "{{ value }}");
        let ctx = TemplateContext::new().with_var("value", "{{ nested }}");

        let result = template.render(&ctx).unwrap();
        assert_eq!(result, "{{ nested }}");
    }

    #[test]
    fn test_template_registry_defaults() {
        let registry = TemplateRegistry::new();

        assert!(registry.get("index").is_some());
        assert!(registry.get("card").is_some());
        assert!(registry.get("empty").is_some());
        assert!(registry.get("app_index").is_some());
        assert!(registry.get("app_style").is_some());
        assert!(registry.get("app_main").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_render_unknown_template() {
        let registry = TemplateRegistry::new();
        let result = registry.render("nope", &TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_render_card_template() {
        let registry = TemplateRegistry::new();
        let ctx = TemplateContext::new()
            .with_var("href", "./apps/demo/")
            .with_var("search_key", "demo apps/demo/ demo")
            .with_var("title", "Demo")
            .with_var("path", "apps/demo/");

        let result = registry.render("card", &ctx).unwrap();
        assert!(result.contains(r#"href="./apps/demo/""#));
        assert!(result.contains(r#"data-search="demo apps/demo/ demo""#));
        assert!(result.contains("Demo"));
    }

    #[test]
    fn test_app_style_has_no_variables() {
        let registry = TemplateRegistry::new();
        let result = registry.render("app_style", &TemplateContext::new()).unwrap();
        assert!(result.contains("box-sizing"));
    }
}
