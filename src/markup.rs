//! Flatten highlighted markup into (text, class) tokens
//!
//! The highlighter's HTML is parsed with `tl` and converted into a small owned
//! tree of [`MarkupNode`]s. Walking that tree yields one [`Token`] per
//! top-level node, except that parameter groups are transparent: their
//! children are spliced into the output in place of the group.

use tracing::{debug, trace};

use crate::highlight::{Highlighter, PARAMS_CLASS};

/// Prefix shared by every class the highlighter assigns
pub const HIGHLIGHT_PREFIX: &str = "hljs-";

/// A run of text with the highlight class it was rendered with.
/// An empty class means plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub class: String,
}

impl Token {
    pub fn new(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: class.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, "")
    }
}

/// Owned view of the parsed markup
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Text(String),
    Element {
        classes: Vec<String>,
        children: Vec<MarkupNode>,
    },
}

impl MarkupNode {
    /// Rendered text content of the node and all its descendants
    pub fn text_content(&self) -> String {
        match self {
            MarkupNode::Text(text) => text.clone(),
            MarkupNode::Element { children, .. } => {
                children.iter().map(MarkupNode::text_content).collect()
            }
        }
    }

    fn has_class(&self, class: &str) -> bool {
        match self {
            MarkupNode::Text(_) => false,
            MarkupNode::Element { classes, .. } => classes.iter().any(|c| c == class),
        }
    }
}

/// Highlight one line and flatten the result into tokens
pub fn tokenize_line(line: &str, highlighter: &dyn Highlighter) -> Vec<Token> {
    let html = highlighter.highlight(line);
    let tokens = match parse_markup(&html) {
        Some(nodes) => flatten(&nodes),
        None => {
            debug!("markup rejected, keeping line as plain text");
            vec![Token::plain(line)]
        }
    };
    trace!(?tokens, "tokenized line");
    tokens
}

/// Parse highlighter markup into an owned node list
pub fn parse_markup(html: &str) -> Option<Vec<MarkupNode>> {
    let dom = tl::parse(html, tl::ParserOptions::default()).ok()?;
    let parser = dom.parser();
    Some(
        dom.children()
            .iter()
            .filter_map(|handle| convert_node(*handle, parser))
            .collect(),
    )
}

fn convert_node(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<MarkupNode> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => {
            let classes = tag
                .attributes()
                .iter()
                .find(|(key, _)| key == "class")
                .and_then(|(_, value)| value)
                .map(|value| {
                    value
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<String>>()
                })
                .unwrap_or_default();

            let children = tag
                .children()
                .top()
                .iter()
                .filter_map(|child| convert_node(*child, parser))
                .collect();

            Some(MarkupNode::Element { classes, children })
        }
        tl::Node::Raw(bytes) => {
            let text = decode_entities(&bytes.as_utf8_str());
            (!text.is_empty()).then_some(MarkupNode::Text(text))
        }
        tl::Node::Comment(_) => None,
    }
}

/// Flatten a node list into tokens in document order
pub fn flatten(nodes: &[MarkupNode]) -> Vec<Token> {
    let mut tokens = Vec::new();
    flatten_into(nodes, &mut tokens);
    tokens
}

fn flatten_into(nodes: &[MarkupNode], tokens: &mut Vec<Token>) {
    for node in nodes {
        match node {
            MarkupNode::Text(text) => tokens.push(Token::plain(text.as_str())),
            MarkupNode::Element { children, .. } if node.has_class(PARAMS_CLASS) => {
                flatten_into(children, tokens);
            }
            MarkupNode::Element { classes, .. } => {
                tokens.push(Token::new(node.text_content(), highlight_class(classes)));
            }
        }
    }
}

/// First class carrying the highlight prefix, if any
pub fn find_prefixed<'c>(classes: &'c [String], prefix: &str) -> Option<&'c str> {
    classes
        .iter()
        .map(String::as_str)
        .find(|class| class.starts_with(prefix))
}

/// The class a token is colored by: the first `hljs-` class, else the first
/// class, else none.
pub fn highlight_class(classes: &[String]) -> String {
    find_prefixed(classes, HIGHLIGHT_PREFIX)
        .or_else(|| classes.first().map(String::as_str))
        .unwrap_or_default()
        .to_string()
}

/// Decode the entities highlight.js emits when escaping source text
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
