//! Syntax highlighting into highlight.js-style markup
//!
//! A [`Highlighter`] turns one line of source into HTML where highlighted
//! tokens are wrapped in `<span class="hljs-...">`. The markup is what the
//! tokenizer in [`crate::markup`] consumes, so any highlighter that speaks the
//! same class vocabulary can be plugged in.

pub mod lexer;

use lexer::Token;

/// Class on the span that groups a function's parameter list
pub const PARAMS_CLASS: &str = "hljs-params";

/// Maps a line of source text to annotated markup
pub trait Highlighter {
    fn highlight(&self, line: &str) -> String;
}

/// Source languages understood by [`ScriptHighlighter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    /// Look up a language by tag, e.g. `ts` or `javascript`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ts" | "typescript" | "tsx" => Some(Language::TypeScript),
            "js" | "javascript" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from", "function",
    "get", "if", "import", "in", "instanceof", "let", "new", "of", "return", "set", "static",
    "switch", "throw", "try", "typeof", "var", "void", "while", "with", "yield",
];

const TS_KEYWORDS: &[&str] = &[
    "abstract", "declare", "enum", "implements", "infer", "interface", "is", "keyof", "module",
    "namespace", "private", "protected", "public", "readonly", "type",
];

const LITERALS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

const BUILT_INS: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "JSON", "Map", "Math", "Number", "Object", "Promise",
    "RegExp", "Set", "String", "Symbol", "console", "document", "parseFloat", "parseInt",
    "require", "window",
];

const TS_BUILT_INS: &[&str] = &[
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "unknown",
];

/// What the previous keyword makes of the next identifier
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    None,
    FunctionName,
    FunctionParams,
    ClassName,
}

/// Line highlighter for TypeScript and JavaScript
#[derive(Debug, Clone)]
pub struct ScriptHighlighter {
    language: Language,
}

impl ScriptHighlighter {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn is_keyword(&self, word: &str) -> bool {
        KEYWORDS.contains(&word)
            || (self.language == Language::TypeScript && TS_KEYWORDS.contains(&word))
    }

    fn is_built_in(&self, word: &str) -> bool {
        BUILT_INS.contains(&word)
            || (self.language == Language::TypeScript && TS_BUILT_INS.contains(&word))
    }

    /// Class for an identifier that no preceding keyword has claimed
    fn classify(&self, word: &str, after_dot: bool, before_paren: bool) -> Option<&'static str> {
        if after_dot {
            return Some(if before_paren {
                "hljs-title function_"
            } else {
                "hljs-property"
            });
        }
        if word == "this" || word == "super" {
            Some("hljs-variable language_")
        } else if self.is_keyword(word) {
            Some("hljs-keyword")
        } else if LITERALS.contains(&word) {
            Some("hljs-literal")
        } else if self.is_built_in(word) {
            Some("hljs-built_in")
        } else if before_paren {
            Some("hljs-title function_")
        } else {
            None
        }
    }

    fn pending_after(&self, word: &str) -> Pending {
        match word {
            "function" => Pending::FunctionName,
            "class" | "extends" => Pending::ClassName,
            "interface" | "implements" if self.language == Language::TypeScript => {
                Pending::ClassName
            }
            _ => Pending::None,
        }
    }
}

impl Default for ScriptHighlighter {
    fn default() -> Self {
        Self::new(Language::TypeScript)
    }
}

impl Highlighter for ScriptHighlighter {
    fn highlight(&self, line: &str) -> String {
        let tokens: Vec<(Option<Token>, &str)> = lexer::lex(line).collect();
        let mut out = String::with_capacity(line.len() * 2);

        let mut pending = Pending::None;
        // Paren depth inside an open parameter group
        let mut params_depth: Option<usize> = None;
        let mut prev: Option<Token> = None;

        for (i, (tok, text)) in tokens.iter().enumerate() {
            match tok {
                Some(Token::Whitespace) => {
                    out.push_str(text);
                    continue;
                }
                Some(Token::ParenOpen) => {
                    out.push('(');
                    if let Some(depth) = params_depth.as_mut() {
                        *depth += 1;
                    } else if matches!(pending, Pending::FunctionName | Pending::FunctionParams) {
                        out.push_str("<span class=\"");
                        out.push_str(PARAMS_CLASS);
                        out.push_str("\">");
                        params_depth = Some(0);
                    }
                    pending = Pending::None;
                }
                Some(Token::ParenClose) => {
                    match params_depth {
                        Some(0) => {
                            out.push_str("</span>");
                            params_depth = None;
                        }
                        Some(depth) => params_depth = Some(depth - 1),
                        None => {}
                    }
                    out.push(')');
                    pending = Pending::None;
                }
                Some(Token::Ident) => {
                    let class = match pending {
                        Pending::FunctionName => Some("hljs-title function_"),
                        Pending::ClassName => Some("hljs-title class_"),
                        _ => {
                            let after_dot = prev == Some(Token::Dot);
                            let before_paren =
                                matches!(tokens.get(i + 1), Some((Some(Token::ParenOpen), _)));
                            self.classify(text, after_dot, before_paren)
                        }
                    };
                    pending = match pending {
                        Pending::FunctionName => Pending::FunctionParams,
                        _ if prev != Some(Token::Dot) => self.pending_after(text),
                        _ => Pending::None,
                    };
                    match class {
                        Some(class) => push_span(&mut out, class, text),
                        None => out.push_str(&escape_html(text)),
                    }
                }
                Some(Token::String) => {
                    push_span(&mut out, "hljs-string", text);
                    pending = Pending::None;
                }
                Some(Token::Number) => {
                    push_span(&mut out, "hljs-number", text);
                    pending = Pending::None;
                }
                Some(Token::Comment) => {
                    push_span(&mut out, "hljs-comment", text);
                    pending = Pending::None;
                }
                Some(Token::Dot) | Some(Token::Colon) | Some(Token::Other) | None => {
                    out.push_str(&escape_html(text));
                    pending = Pending::None;
                }
            }
            prev = *tok;
        }

        // Parameter list continues on a later line
        if params_depth.is_some() {
            out.push_str("</span>");
        }

        out
    }
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&escape_html(text));
    out.push_str("</span>");
}

/// Escape text the way highlight.js does
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
