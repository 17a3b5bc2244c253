//! Diagnostics for stylesheet parsing

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use chumsky::error::{Rich, RichReason};
use thiserror::Error;

use crate::css::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A stylesheet statement that could not be parsed and was skipped
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax { span: Span, message: String },
}

impl ParseError {
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Falls back to the plain message if the report cannot be rendered.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax { span, message } => {
                let written = Report::build(ReportKind::Warning, filename, span.start)
                    .with_config(Config::default().with_color(false))
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message("statement skipped")
                            .with_color(Color::Yellow),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<Rich<'a, Token>> for ParseError {
    fn from(err: Rich<'a, Token>) -> Self {
        let message = match err.reason() {
            RichReason::Custom(msg) => msg.to_string(),
            _ => match err.found() {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of statement".to_string(),
            },
        };

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Space => "whitespace".to_string(),
        Token::BraceOpen => "'{'".to_string(),
        Token::BraceClose => "'}'".to_string(),
        Token::Semicolon => "';'".to_string(),
        Token::Colon => "':'".to_string(),
        Token::Comma => "','".to_string(),
        Token::AtKeyword(k) => format!("at-rule '@{}'", k),
        Token::Word(w) => format!("'{}'", w),
    }
}
