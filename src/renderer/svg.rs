//! SVG generation from path fragments

use super::SvgConfig;

/// Build an SVG document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    paths: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            paths: vec![],
        }
    }

    /// Append one serialized fragment, drawn after everything added before it
    pub fn add_path(&mut self, fragment: impl Into<String>) {
        self.paths.push(fragment.into());
    }

    pub fn extend<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(fragments.into_iter().map(Into::into));
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push('\n');
        }

        svg.push_str(&format!(
            "<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' width='{}' height='{}'>\n",
            width, height
        ));

        for path in &self.paths {
            svg.push_str(path);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Wrap fragments, in the order given, in an SVG root of the given size
pub fn emit<I, S>(fragments: I, width: f64, height: f64, config: &SvgConfig) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut builder = SvgBuilder::new(config.clone());
    builder.extend(fragments);
    builder.build(width, height)
}
