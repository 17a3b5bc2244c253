//! Line lexer for TypeScript / JavaScript using logos

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[token("/*", block_comment)]
    Comment,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#)]
    #[regex(r"`([^`\\]|\\.)*`")]
    String,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?n?")]
    #[regex(r"0[xXbBoO][0-9a-fA-F_]+n?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,

    // Anything outside ASCII is passed through as plain text
    #[regex(r"[^\x00-\x7F]+")]
    Other,
}

/// Consume the rest of a `/* ... */` comment. One left open continues past
/// the line, so the rest of the line belongs to it.
fn block_comment(lex: &mut Lexer<Token>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map(|end| end + 2).unwrap_or(rest.len());
    lex.bump(len);
}

/// Lex one line into tokens paired with their source text.
///
/// Input the lexer has no token for (operators, stray quotes) comes back as
/// `None` so it can be copied through unhighlighted.
pub fn lex(line: &str) -> impl Iterator<Item = (Option<Token>, &str)> + '_ {
    let mut lexer = Token::lexer(line);
    std::iter::from_fn(move || {
        let tok = lexer.next()?;
        Some((tok.ok(), lexer.slice()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<Option<Token>> {
        lex(line).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            kinds("let x = 1;"),
            vec![
                Some(Token::Ident),
                Some(Token::Whitespace),
                Some(Token::Ident),
                Some(Token::Whitespace),
                None,
                Some(Token::Whitespace),
                Some(Token::Number),
                None,
            ]
        );
    }

    #[test]
    fn test_slices_cover_the_line() {
        let line = "foo.bar('x', 0x1F) /* c */ // tail";
        let rebuilt: String = lex(line).map(|(_, s)| s).collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_strings_and_comments() {
        let tokens: Vec<_> = lex(r#""a\"b" 'c' `d` // e"#)
            .filter(|(t, _)| *t != Some(Token::Whitespace))
            .collect();
        assert_eq!(
            tokens,
            vec![
                (Some(Token::String), r#""a\"b""#),
                (Some(Token::String), "'c'"),
                (Some(Token::String), "`d`"),
                (Some(Token::Comment), "// e"),
            ]
        );
    }

    #[test]
    fn test_block_comments() {
        assert_eq!(
            lex("a /* c */ b").collect::<Vec<_>>(),
            vec![
                (Some(Token::Ident), "a"),
                (Some(Token::Whitespace), " "),
                (Some(Token::Comment), "/* c */"),
                (Some(Token::Whitespace), " "),
                (Some(Token::Ident), "b"),
            ]
        );
        assert_eq!(
            lex("/** x * y **/").collect::<Vec<_>>(),
            vec![(Some(Token::Comment), "/** x * y **/")]
        );
    }

    #[test]
    fn test_unclosed_block_comment_takes_rest_of_line() {
        assert_eq!(
            lex("x /* to be").collect::<Vec<_>>(),
            vec![
                (Some(Token::Ident), "x"),
                (Some(Token::Whitespace), " "),
                (Some(Token::Comment), "/* to be"),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens: Vec<_> = lex("3.14 1e10 0xff 10n .5")
            .filter(|(t, _)| *t == Some(Token::Number))
            .map(|(_, s)| s)
            .collect();
        assert_eq!(tokens, vec!["3.14", "1e10", "0xff", "10n", ".5"]);
    }

    #[test]
    fn test_non_ascii_passthrough() {
        let tokens: Vec<_> = lex("x = 'é' + π").collect();
        assert!(tokens.contains(&(Some(Token::Other), "π")));
        assert!(tokens.contains(&(Some(Token::String), "'é'")));
    }
}
