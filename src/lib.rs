//! code2svg - Render source code as SVG glyph outlines
//!
//! This library highlights source code, resolves each highlighted token to a
//! color from a highlight.js theme, and lays the tokens out as filled font
//! outlines. Besides single images it can render a typing animation: every
//! prefix of the source as its own frame, tiled on one canvas.
//!
//! # Example
//!
//! ```rust,no_run
//! use code2svg::{
//!     render_snippet, ColorIndex, Font, LayoutEngine, RenderConfig, ScriptHighlighter,
//! };
//!
//! let font_data = std::fs::read("UbuntuMono-Regular.ttf").unwrap();
//! let config = RenderConfig::new();
//! let font = Font::from_bytes(&font_data, config.layout.font_size).unwrap();
//! let colors = ColorIndex::from_css(".hljs-keyword { color: #d73a49 }");
//! let highlighter = ScriptHighlighter::new(config.language);
//! let engine = LayoutEngine::new(&colors, &highlighter, &font);
//!
//! let rendering = render_snippet(&engine, "let x = 1;", &config);
//! assert!(rendering.svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod css;
pub mod error;
pub mod font;
pub mod highlight;
pub mod layout;
pub mod markup;
pub mod renderer;
pub mod stylesheet;

pub use config::{ConfigError, Mode, ProjectConfig};
pub use error::ParseError;
pub use font::{Font, FontError, GlyphPath, Outliner};
pub use highlight::{Highlighter, Language, ScriptHighlighter};
pub use layout::{accumulate_frames, Filmstrip, LayoutConfig, LayoutEngine, Point};
pub use markup::{tokenize_line, Token};
pub use renderer::{emit, SvgConfig};
pub use stylesheet::ColorIndex;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Marker line separating snippets in one source file
pub const SNIPPET_SEPARATOR: &str = "====";

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Error reading '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Font(#[from] FontError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Language the source is highlighted as
    pub language: Language,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            language: Language::TypeScript,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the source language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// One emitted document and the canvas it covers
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

/// Render a snippet as one SVG sized to its extent
pub fn render_snippet(engine: &LayoutEngine, source: &str, config: &RenderConfig) -> Rendering {
    let layout = engine.layout_text(source, config.layout.origin);
    debug!(
        paths = layout.paths.len(),
        width = layout.max_x,
        height = layout.max_y,
        "rendered snippet"
    );
    Rendering {
        svg: emit(layout.paths, layout.max_x, layout.max_y, &config.svg),
        width: layout.max_x,
        height: layout.max_y,
    }
}

/// Render the typing animation of `source` as one SVG.
///
/// Later frames are drawn first. The filmstrip is returned for its
/// dimensions.
pub fn render_typing(
    engine: &LayoutEngine,
    source: &str,
    config: &RenderConfig,
) -> (String, Filmstrip) {
    let strip = accumulate_frames(engine, source, &config.layout);
    let svg = emit(
        strip.draw_order(),
        strip.total_width,
        strip.total_height,
        &config.svg,
    );
    (svg, strip)
}

/// Split a source file on `====` markers.
///
/// One leading line break is removed from every part, so a marker on its
/// own line does not leave an empty first line in the snippet after it.
pub fn split_snippets(content: &str) -> Vec<&str> {
    content
        .split(SNIPPET_SEPARATOR)
        .map(|part| {
            part.strip_prefix("\r\n")
                .or_else(|| part.strip_prefix('\n'))
                .unwrap_or(part)
        })
        .collect()
}

/// Read a UTF-8 input file
pub fn read_source(path: &Path) -> Result<String, RenderError> {
    std::fs::read_to_string(path).map_err(|source| RenderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an SVG document, replacing any existing file
pub fn write_svg(path: &Path, svg: &str) -> Result<(), RenderError> {
    std::fs::write(path, svg).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = svg.len(), "wrote svg");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedAdvance, NoMarkup};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_snippets() {
        let content = "let a = 1;\n====\nlet b = 2;\r\n====\r\nlet c = 3;";
        assert_eq!(
            split_snippets(content),
            vec!["let a = 1;\n", "let b = 2;\r\n", "let c = 3;"]
        );
    }

    #[test]
    fn test_split_without_marker_is_one_snippet() {
        assert_eq!(split_snippets("\nx"), vec!["x"]);
        assert_eq!(split_snippets(""), vec![""]);
    }

    #[test]
    fn test_only_one_leading_newline_is_stripped() {
        assert_eq!(split_snippets("a====\n\nb"), vec!["a", "\nb"]);
    }

    #[test]
    fn test_render_snippet_sizes_document() {
        let colors = ColorIndex::from_css(".hljs { color: #333 }");
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let rendering = render_snippet(&engine, "ab\ncde", &RenderConfig::default());
        assert_eq!(rendering.width, 30.0);
        assert_eq!(rendering.height, 40.0);
        assert_eq!(
            rendering.svg,
            concat!(
                "<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' width='30' height='40'>\n",
                r##"<path fill="#333" d="ab@0,0"/>"##,
                r##"<path fill="#333" d="cde@0,20"/>"##,
                "</svg>",
            )
        );
    }

    #[test]
    fn test_render_typing_draws_last_frame_first() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let (svg, strip) = render_typing(&engine, "ab", &RenderConfig::default());
        assert_eq!(strip.frame_count(), 2);
        assert_eq!((strip.total_width, strip.total_height), (40.0, 20.0));

        let first = svg.find("ab@20,0");
        let second = svg.find("a@0,0");
        assert!(first.is_some() && second.is_some());
        assert!(first < second);
        assert!(svg.contains("width='40' height='20'"));
    }

    #[test]
    fn test_read_missing_source_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ts");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, RenderError::Read { .. }));
        assert!(err.to_string().contains("missing.ts"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        write_svg(&path, "<svg/>").unwrap();
        assert_eq!(read_source(&path).unwrap(), "<svg/>");
    }
}
