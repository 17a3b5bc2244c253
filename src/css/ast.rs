//! Syntax tree for parsed stylesheets

/// A parsed stylesheet: top-level statements in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub statements: Vec<Statement>,
}

impl Stylesheet {
    /// Iterate over the plain style rules, skipping at-rules
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Rule(rule) => Some(rule),
            Statement::AtRule(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `selector, selector { property: value; ... }`
    Rule(StyleRule),
    /// `@media ... { ... }`, `@import ...;` and friends. The body is not kept.
    AtRule(AtRule),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// Selectors with whitespace collapsed, e.g. `.hljs-meta .hljs-keyword`
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// The first declaration of `property` in this rule, if any
    pub fn declaration(&self, property: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.property == property)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Lower-cased property name
    pub property: String,
    pub value: String,
    pub important: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// Keyword without the `@`
    pub name: String,
    pub prelude: String,
}
