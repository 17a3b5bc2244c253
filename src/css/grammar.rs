//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::css::ast::*;
use crate::css::lexer::{self, Span, Token};
use crate::error::ParseError;

/// Parse a stylesheet.
///
/// Every top-level statement is parsed on its own, so a malformed rule only
/// costs that rule: it is reported in the returned error list and the rest of
/// the sheet still loads.
pub fn parse(input: &str) -> (Stylesheet, Vec<ParseError>) {
    let tokens: Vec<(Token, Span)> = lexer::lex(input).collect();

    let mut sheet = Stylesheet::default();
    let mut errors = Vec::new();

    for chunk in split_statements(tokens) {
        if chunk.iter().all(|(tok, _)| *tok == Token::Space) {
            continue;
        }
        match parse_statement(chunk) {
            Ok(statement) => sheet.statements.push(statement),
            Err(errs) => errors.extend(errs),
        }
    }

    (sheet, errors)
}

/// Cut the token stream after every top-level `}` or `;`
fn split_statements(tokens: Vec<(Token, Span)>) -> Vec<Vec<(Token, Span)>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0usize;

    for (tok, span) in tokens {
        let closes = match tok {
            Token::BraceOpen => {
                depth += 1;
                false
            }
            Token::BraceClose => {
                depth = depth.saturating_sub(1);
                depth == 0
            }
            Token::Semicolon => depth == 0,
            _ => false,
        };
        current.push((tok, span));
        if closes {
            chunks.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn parse_statement(chunk: Vec<(Token, Span)>) -> Result<Statement, Vec<ParseError>> {
    let end = chunk.last().map(|(_, span)| span.end).unwrap_or(0);

    let token_iter = chunk.into_iter().map(|(tok, span)| (tok, span.into()));

    // Spans stay absolute so diagnostics point into the whole sheet
    let token_stream = Stream::from_iter(token_iter).map((end..end).into(), |(t, s): (_, _)| (t, s));

    statement_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn statement_parser<'a, I>() -> impl Parser<'a, I, Statement, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let ws = just(Token::Space).repeated();

    // Selectors may contain pseudo-classes, so ':' is part of the text here
    let selector_part = select! {
        Token::Word(w) => w,
        Token::Colon => ":".to_string(),
        Token::Space => " ".to_string(),
    };

    let selector = selector_part
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .try_map(|parts, span: SimpleSpan| {
            let selector = collapse_whitespace(&parts.concat());
            if selector.is_empty() {
                Err(Rich::custom(span, "Empty selector"))
            } else {
                Ok(selector)
            }
        });

    let selectors = selector
        .separated_by(just(Token::Comma))
        .at_least(1)
        .collect::<Vec<_>>();

    let value_part = select! {
        Token::Word(w) => w,
        Token::Colon => ":".to_string(),
        Token::Comma => ",".to_string(),
        Token::Space => " ".to_string(),
        Token::AtKeyword(k) => format!("@{}", k),
    };

    let property = select! {
        Token::Word(w) => w.to_ascii_lowercase(),
    };

    let declaration = property
        .then_ignore(ws.clone())
        .then_ignore(just(Token::Colon))
        .then(value_part.clone().repeated().collect::<Vec<_>>())
        .map(|(property, parts)| {
            let (value, important) = split_important(&collapse_whitespace(&parts.concat()));
            Declaration {
                property,
                value,
                important,
            }
        });

    // Empty slots (`;;`, `{ }`) are allowed and dropped
    let declarations = ws
        .clone()
        .ignore_then(declaration.or_not())
        .separated_by(just(Token::Semicolon))
        .collect::<Vec<_>>()
        .map(|slots| slots.into_iter().flatten().collect::<Vec<_>>())
        .delimited_by(just(Token::BraceOpen), just(Token::BraceClose));

    let style_rule = selectors.then(declarations).map(|(selectors, declarations)| {
        Statement::Rule(StyleRule {
            selectors,
            declarations,
        })
    });

    let at_rule = select! {
        Token::AtKeyword(name) => name,
    }
    .then(value_part.repeated().collect::<Vec<_>>())
    .then_ignore(any().repeated())
    .map(|(name, prelude)| {
        Statement::AtRule(AtRule {
            name,
            prelude: collapse_whitespace(&prelude.concat()),
        })
    });

    ws.clone()
        .ignore_then(choice((at_rule, style_rule)))
        .then_ignore(ws)
        .then_ignore(end())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a trailing `!important` off a declaration value
fn split_important(value: &str) -> (String, bool) {
    match value
        .strip_suffix("important")
        .and_then(|rest| rest.trim_end().strip_suffix('!'))
    {
        Some(rest) => (rest.trim_end().to_string(), true),
        None => (value.to_string(), false),
    }
}
