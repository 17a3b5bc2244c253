//! Core types for the layout engine

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Write head for glyph layout.
///
/// `x` returns to the origin at every new line; `y` only ever grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    origin_x: f64,
}

impl Cursor {
    pub fn new(origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            origin_x: origin.x,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn advance(&mut self, width: f64) {
        self.x += width;
    }

    /// Move to the start of the next line, `height` below the current one
    pub fn new_line(&mut self, height: f64) {
        self.x = self.origin_x;
        self.y += height;
    }
}

/// Paths produced for one line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLayout {
    pub paths: Vec<String>,
    /// Right edge of the last glyph run, or 0 for an empty line
    pub max_x: f64,
    /// Height of the last token on the line
    pub height: f64,
}

/// Paths produced for a block of text, with its extent
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLayout {
    pub paths: Vec<String>,
    pub max_x: f64,
    pub max_y: f64,
}

/// One rendering of a prefix of the source
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Top-left corner the frame was laid out at
    pub origin: Point,
    pub paths: Vec<String>,
    pub max_x: f64,
    pub max_y: f64,
}

/// All typing frames tiled on one canvas
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filmstrip {
    /// Frames in the order they were computed (shortest prefix first)
    pub frames: Vec<Frame>,
    /// Extent of the full snippet, used as the grid cell size
    pub frame_width: f64,
    pub frame_height: f64,
    /// Canvas size covering every frame
    pub total_width: f64,
    pub total_height: f64,
}

impl Filmstrip {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Every path of every frame, last computed first
    pub fn draw_order(&self) -> Vec<&str> {
        self.frames
            .iter()
            .flat_map(|frame| frame.paths.iter().map(String::as_str))
            .rev()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_returns_to_origin_on_new_line() {
        let mut cursor = Cursor::new(Point::new(5.0, 10.0));
        cursor.advance(30.0);
        cursor.advance(12.5);
        assert_eq!(cursor.position(), Point::new(47.5, 10.0));

        cursor.new_line(20.0);
        assert_eq!(cursor.position(), Point::new(5.0, 30.0));
    }

    #[test]
    fn test_draw_order_reverses_all_paths() {
        let frame = |paths: &[&str]| Frame {
            origin: Point::default(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            max_x: 0.0,
            max_y: 0.0,
        };
        let strip = Filmstrip {
            frames: vec![frame(&["a1"]), frame(&["b1", "b2"])],
            ..Filmstrip::default()
        };
        assert_eq!(strip.frame_count(), 2);
        assert_eq!(strip.draw_order(), vec!["b2", "b1", "a1"]);
    }
}
