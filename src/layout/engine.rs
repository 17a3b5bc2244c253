//! Glyph layout engine
//!
//! Places each token of each line at the cursor, asks the outliner for its
//! path, and advances the cursor by the measured width. Lines stack
//! downwards from the origin, each one as tall as its last token.

use tracing::trace;

use crate::font::Outliner;
use crate::highlight::Highlighter;
use crate::markup::{tokenize_line, Token};
use crate::stylesheet::ColorIndex;

use super::types::{Cursor, LineLayout, Point, TextLayout};

/// Lays out highlighted text as filled glyph outlines
pub struct LayoutEngine<'a> {
    colors: &'a ColorIndex,
    highlighter: &'a dyn Highlighter,
    outliner: &'a dyn Outliner,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(
        colors: &'a ColorIndex,
        highlighter: &'a dyn Highlighter,
        outliner: &'a dyn Outliner,
    ) -> Self {
        Self {
            colors,
            highlighter,
            outliner,
        }
    }

    /// Lay out one line of tokens starting at the cursor.
    ///
    /// The cursor is left at the right edge of the last token. The returned
    /// height is that of the last token, 0 for an empty line.
    pub fn layout_line(&self, tokens: &[Token], cursor: &mut Cursor) -> LineLayout {
        let mut line = LineLayout::default();

        for token in tokens {
            let fill = self.colors.resolve_color(&token.class);
            let glyphs = self
                .outliner
                .outline(&token.text, cursor.position(), fill);

            line.paths.push(glyphs.svg);
            cursor.advance(glyphs.width);
            if cursor.x > line.max_x {
                line.max_x = cursor.x;
            }
            line.height = glyphs.height;
        }

        line
    }

    /// Lay out a block of text with its top-left corner at `origin`.
    ///
    /// Lines are split on `\n`; a trailing `\r` is dropped from each.
    pub fn layout_text(&self, text: &str, origin: Point) -> TextLayout {
        let mut cursor = Cursor::new(origin);
        let mut layout = TextLayout::default();

        for raw_line in text.split('\n') {
            let line_text = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let tokens = tokenize_line(line_text, self.highlighter);
            let line = self.layout_line(&tokens, &mut cursor);
            trace!(
                tokens = tokens.len(),
                width = line.max_x,
                height = line.height,
                "laid out line"
            );

            cursor.new_line(line.height);
            if line.max_x > layout.max_x {
                layout.max_x = line.max_x;
            }
            if cursor.y > layout.max_y {
                layout.max_y = cursor.y;
            }
            layout.paths.extend(line.paths);
        }

        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::GlyphPath;
    use crate::highlight::ScriptHighlighter;
    use crate::test_support::{FixedAdvance, NoMarkup};
    use pretty_assertions::assert_eq;

    const THEME: &str = ".hljs-keyword { color: #ff0000 } .hljs-number { color: #0000ff }";

    /// Keywords are taller than everything else
    struct TallKeywords;

    impl Outliner for TallKeywords {
        fn outline(&self, text: &str, origin: Point, fill: &str) -> GlyphPath {
            let inner = FixedAdvance::default().outline(text, origin, fill);
            GlyphPath {
                height: if text == "let" { 30.0 } else { 20.0 },
                ..inner
            }
        }
    }

    #[test]
    fn test_let_statement_colors_and_positions() {
        let colors = ColorIndex::from_css(THEME);
        let highlighter = ScriptHighlighter::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &highlighter, &outliner);

        let layout = engine.layout_text("let x = 1;", Point::default());
        assert_eq!(
            layout.paths,
            vec![
                r##"<path fill="#ff0000" d="let@0,0"/>"##,
                r##"<path fill="#000000" d=" x = @30,0"/>"##,
                r##"<path fill="#0000ff" d="1@80,0"/>"##,
                r##"<path fill="#000000" d=";@90,0"/>"##,
            ]
        );
        assert_eq!(layout.max_x, 100.0);
        assert_eq!(layout.max_y, 20.0);
    }

    #[test]
    fn test_layout_line_is_deterministic() {
        let colors = ColorIndex::from_css(THEME);
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);
        let tokens = vec![Token::new("let", "hljs-keyword"), Token::plain(" y")];

        let mut first_cursor = Cursor::new(Point::new(3.0, 4.0));
        let mut second_cursor = Cursor::new(Point::new(3.0, 4.0));
        let first = engine.layout_line(&tokens, &mut first_cursor);
        let second = engine.layout_line(&tokens, &mut second_cursor);

        assert_eq!(first, second);
        assert_eq!(first_cursor, second_cursor);
        assert_eq!(first.max_x, 53.0);
    }

    #[test]
    fn test_line_height_is_last_token_height() {
        // "let" is 30 tall but the trailing " x" is 20, so the line is 20
        let colors = ColorIndex::default();
        let highlighter = ScriptHighlighter::default();
        let engine = LayoutEngine::new(&colors, &highlighter, &TallKeywords);

        let mut cursor = Cursor::new(Point::default());
        let tokens = tokenize_line("let x", &highlighter);
        let line = engine.layout_line(&tokens, &mut cursor);
        assert_eq!(line.height, 20.0);

        let layout = engine.layout_text("let x\nlet", Point::default());
        assert_eq!(layout.max_y, 50.0);
    }

    #[test]
    fn test_cursor_resets_to_origin_each_line() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let layout = engine.layout_text("abc\nde\r\nf", Point::new(5.0, 0.0));
        assert_eq!(
            layout.paths,
            vec![
                r##"<path fill="#000000" d="abc@5,0"/>"##,
                r##"<path fill="#000000" d="de@5,20"/>"##,
                r##"<path fill="#000000" d="f@5,40"/>"##,
            ]
        );
        assert_eq!(layout.max_x, 35.0);
        assert_eq!(layout.max_y, 60.0);
    }

    #[test]
    fn test_empty_lines_add_no_height() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let layout = engine.layout_text("a\n\nb\n", Point::default());
        assert_eq!(layout.paths.len(), 2);
        assert_eq!(layout.paths[1], r##"<path fill="#000000" d="b@0,20"/>"##);
        assert_eq!(layout.max_y, 40.0);
    }

    #[test]
    fn test_empty_text() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        assert_eq!(engine.layout_text("", Point::default()), TextLayout::default());
    }
}
