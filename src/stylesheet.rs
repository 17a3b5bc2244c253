//! Color index built from a highlight theme stylesheet
//!
//! Maps CSS selectors to the `color` they declare so that highlighter classes
//! can be turned into fill colors. The index is built once and then only read.

use std::collections::HashMap;

use tracing::debug;

use crate::css;
use crate::error::ParseError;

/// Selector of the highlighted-code container, used when a class has no rule
pub const DEFAULT_SELECTOR: &str = ".hljs";

/// Color used when neither the class nor the container declares one
pub const FALLBACK_COLOR: &str = "#000000";

/// Selector -> color mapping
#[derive(Debug, Clone, Default)]
pub struct ColorIndex {
    colors: HashMap<String, String>,
    /// Statements that were skipped while parsing
    diagnostics: Vec<ParseError>,
}

impl ColorIndex {
    /// Build the index from stylesheet text.
    ///
    /// Every selector of a rule with a `color` declaration maps to that color;
    /// a later rule overwrites an earlier one for the same selector. Rules
    /// without `color` and at-rules such as `@media` contribute nothing.
    /// Malformed statements are skipped and kept as diagnostics.
    pub fn from_css(content: &str) -> Self {
        let (sheet, diagnostics) = css::parse(content);
        for err in &diagnostics {
            debug!("skipping stylesheet statement: {}", err);
        }

        let mut colors = HashMap::new();
        for rule in sheet.style_rules() {
            let Some(color) = rule.declaration("color") else {
                continue;
            };
            for selector in &rule.selectors {
                colors.insert(selector.clone(), color.value.clone());
            }
        }
        debug!(entries = colors.len(), "loaded color index");

        ColorIndex {
            colors,
            diagnostics,
        }
    }

    /// Exact lookup of a selector, e.g. `.hljs-keyword`
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.colors.get(selector).map(|s| s.as_str())
    }

    /// Resolve a highlight class to a color.
    ///
    /// Fallback order:
    /// 1. the rule for `.{style_class}`
    /// 2. the rule for the `.hljs` container
    /// 3. black
    pub fn resolve_color(&self, style_class: &str) -> &str {
        self.get(&format!(".{}", style_class))
            .or_else(|| self.get(DEFAULT_SELECTOR))
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }
}
