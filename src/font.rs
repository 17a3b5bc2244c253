//! Glyph outlines from a TrueType/OpenType font
//!
//! [`Font`] turns a string into one SVG `<path>` whose data is the union of
//! the glyph outlines, laid out with the font's advance widths. Positions
//! follow the "top" anchor: the origin is the top-left corner of the line
//! box and the baseline sits one ascender below it.

use std::fmt::Write as _;

use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::layout::Point;

/// Font size used when none is configured
pub const DEFAULT_FONT_SIZE: f64 = 48.0;

#[derive(Debug, thiserror::Error)]
#[error("failed to parse font: {0}")]
pub struct FontError(#[from] ttf_parser::FaceParsingError);

/// A path fragment together with the size it occupies
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPath {
    /// Serialized `<path .../>` element
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

/// Produces positioned, filled outlines for runs of text
pub trait Outliner {
    fn outline(&self, text: &str, origin: Point, fill: &str) -> GlyphPath;
}

/// A parsed font face at a fixed size
pub struct Font<'a> {
    face: Face<'a>,
    size: f64,
}

impl<'a> Font<'a> {
    pub fn from_bytes(data: &'a [u8], size: f64) -> Result<Self, FontError> {
        let face = Face::parse(data, 0)?;
        Ok(Self { face, size })
    }

    fn scale(&self) -> f64 {
        self.size / f64::from(self.face.units_per_em())
    }

    pub fn ascender(&self) -> f64 {
        f64::from(self.face.ascender()) * self.scale()
    }

    pub fn descender(&self) -> f64 {
        f64::from(self.face.descender()) * self.scale()
    }

    /// Height of the line box: ascender to descender
    pub fn line_height(&self) -> f64 {
        self.ascender() - self.descender()
    }

    fn glyph(&self, c: char) -> GlyphId {
        self.face.glyph_index(c).unwrap_or(GlyphId(0))
    }
}

impl Outliner for Font<'_> {
    fn outline(&self, text: &str, origin: Point, fill: &str) -> GlyphPath {
        let scale = self.scale();
        let baseline = origin.y + self.ascender();

        let mut builder = PathDataBuilder::new(scale);
        let mut pen_x = origin.x;
        for c in text.chars() {
            let glyph = self.glyph(c);
            builder.set_origin(pen_x, baseline);
            self.face.outline_glyph(glyph, &mut builder);
            pen_x += f64::from(self.face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
        }

        GlyphPath {
            svg: path_element(fill, &builder.finish()),
            width: pen_x - origin.x,
            height: self.line_height(),
        }
    }
}

/// `<path fill="..." d="..."/>`
pub fn path_element(fill: &str, d: &str) -> String {
    format!(r#"<path fill="{}" d="{}"/>"#, fill, d)
}

/// Collects glyph outlines as SVG path data in user space.
///
/// Font units are y-up; the builder flips them around the baseline.
struct PathDataBuilder {
    d: String,
    scale: f64,
    origin_x: f64,
    baseline: f64,
}

impl PathDataBuilder {
    fn new(scale: f64) -> Self {
        Self {
            d: String::new(),
            scale,
            origin_x: 0.0,
            baseline: 0.0,
        }
    }

    fn set_origin(&mut self, x: f64, baseline: f64) {
        self.origin_x = x;
        self.baseline = baseline;
    }

    fn point(&mut self, x: f32, y: f32) {
        let px = self.origin_x + f64::from(x) * self.scale;
        let py = self.baseline - f64::from(y) * self.scale;
        let _ = write!(self.d, "{} {}", format_number(px), format_number(py));
    }

    fn command(&mut self, cmd: char, points: &[(f32, f32)]) {
        self.d.push(cmd);
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.d.push(' ');
            }
            self.point(*x, *y);
        }
    }

    fn finish(self) -> String {
        self.d
    }
}

impl OutlineBuilder for PathDataBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.command('M', &[(x, y)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.command('L', &[(x, y)]);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.command('Q', &[(x1, y1), (x, y)]);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.command('C', &[(x1, y1), (x2, y2), (x, y)]);
    }

    fn close(&mut self) {
        self.d.push('Z');
    }
}

/// Round to two decimals and drop trailing zeros
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{:.2}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
