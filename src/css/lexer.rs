//! Lexer for CSS stylesheets using logos
//!
//! The token set is deliberately coarse: structural punctuation gets its own
//! token, everything else between structure is a `Word`. Comments lex as
//! whitespace so they separate words the way a browser treats them.

use logos::{Lexer, Logos};
use tracing::trace;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[regex(r"[ \t\r\n\f]+")]
    #[token("/*", block_comment)]
    Space,

    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    #[regex(r#"@[^ \t\r\n\f{};:,"'/]*"#, |lex| lex.slice()[1..].to_string())]
    AtKeyword(String),

    #[regex(r#"[^ \t\r\n\f{};:,"'/@][^ \t\r\n\f{};:,"'/]*"#, |lex| lex.slice().to_string())]
    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice().to_string())]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| lex.slice().to_string())]
    #[token("/", |_| "/".to_string())]
    Word(String),
}

/// Consume the rest of a `/* ... */` comment; an unterminated one runs to
/// the end of the input
fn block_comment(lex: &mut Lexer<Token>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map(|end| end + 2).unwrap_or(rest.len());
    lex.bump(len);
}

/// Lex input string into tokens with spans.
///
/// Input no token matches (an unbalanced quote) is kept as a `Word` so the
/// grammar reports it instead of it vanishing.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(move |(tok, span)| match tok {
        Ok(tok) => (tok, span),
        Err(()) => {
            trace!(?span, "unlexable stylesheet input");
            (Token::Word(input[span.clone()].to_string()), span)
        }
    })
}
