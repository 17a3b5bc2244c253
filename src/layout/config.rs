//! Configuration for the layout engine

use super::Point;
use crate::font::DEFAULT_FONT_SIZE;

/// Horizontal position past which the typing filmstrip starts a new row
pub const DEFAULT_WRAP_THRESHOLD: f64 = 2000.0;

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Font size glyph outlines are scaled to
    pub font_size: f64,

    /// Top-left corner of the first line
    pub origin: Point,

    /// Frame x beyond which the next typing frame wraps to a new row
    pub wrap_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            origin: Point::new(0.0, 0.0),
            wrap_threshold: DEFAULT_WRAP_THRESHOLD,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_wrap_threshold(mut self, threshold: f64) -> Self {
        self.wrap_threshold = threshold;
        self
    }
}
