//! Render configuration
//!
//! The configuration is an immutable value handed to the serializer. It only
//! affects presentation (banner, colors, stylesheet), never anchors, ordering
//! or linking.

use serde::Deserialize;

/// Built-in stylesheet. Colors come from the `--accent` custom property set
/// by the page shell from [`RenderConfig::theme_color`].
pub const DEFAULT_STYLESHEET: &str = r#"
html, body {
  margin: 0;
  padding: 0;
}

body {
  font-family: Arial, sans-serif;
  background-color: #fff;
  line-height: 1.3;
  color: #222;
}

div.top {
  background-color: #E0EBF5;
  font-size: 1.25rem;
  padding: 1.313rem 1.313rem 0;
  height: 2.4rem;
}

nav {
  padding: 0 1.313rem;
}

nav ul {
  list-style: none;
  padding-left: 0;
}

nav li.h3 {
  margin-left: 1.618em;
}

article {
  padding: 1.313rem;
}

h1 {
  margin-top: 0;
  font-size: 1.75rem;
  line-height: 1;
  color: var(--accent);
}

h2 {
  font-size: 1.25rem;
  background: #E0EBF5;
  padding: 0.5rem;
  line-height: 1.25;
  font-weight: normal;
  overflow: auto;
  overflow-wrap: break-word;
  color: var(--accent);
}

h3 {
  font-size: 1.25rem;
  line-height: 1.25;
  color: var(--accent);
}

dl {
  font-size: 0.875rem;
  line-height: 1.3;
}

dd.method {
  padding-left: 1.25rem;
}

pre {
  background: #EFEFEF;
  padding: 0.625rem;
  border-radius: 0.3125rem;
  margin: 1.25rem;
  font-family: Menlo, monospace;
  font-size: 0.875rem;
}

p {
  margin: 1.25rem;
  max-width: 900px;
}

span.example-title {
  display: block;
  font-weight: bold;
  padding-left: 1.25rem;
}

span.caption {
  display: block;
  padding-left: 1.25rem;
}

a {
  color: var(--accent);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#;

/// Presentation settings for the rendered page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Text of the top bar
    pub banner: String,
    /// Accent color for headings and links
    pub theme_color: String,
    /// Replaces the built-in stylesheet when set
    pub stylesheet: Option<String>,
    /// Appended after the stylesheet
    pub extra_css: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            banner: "apidoc".to_string(),
            theme_color: "#375EAB".to_string(),
            stylesheet: None,
            extra_css: None,
        }
    }
}

impl RenderConfig {
    /// The full CSS placed in the page's `<style>` element
    pub fn css(&self) -> String {
        let mut css = format!(":root {{\n  --accent: {};\n}}\n", self.theme_color);
        css.push_str(self.stylesheet.as_deref().unwrap_or(DEFAULT_STYLESHEET));
        if let Some(extra) = &self.extra_css {
            css.push('\n');
            css.push_str(extra);
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_css_uses_theme_color() {
        let css = RenderConfig::default().css();
        assert!(css.starts_with(":root {\n  --accent: #375EAB;"));
        assert!(css.contains("dd.method"));
    }

    #[test]
    fn test_stylesheet_override_and_extra() {
        let config = RenderConfig {
            stylesheet: Some("body { color: red; }".to_string()),
            extra_css: Some("pre { margin: 0; }".to_string()),
            ..RenderConfig::default()
        };
        let css = config.css();
        assert!(!css.contains("dd.method"));
        assert!(css.ends_with("body { color: red; }\npre { margin: 0; }"));
    }
}
