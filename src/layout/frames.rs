//! Typing animation filmstrip
//!
//! Every prefix of the source is laid out as its own frame. Frames are tiled
//! left to right in cells the size of the complete snippet, and a new row
//! starts once a frame has been placed beyond the wrap threshold.

use tracing::debug;

use super::config::LayoutConfig;
use super::engine::LayoutEngine;
use super::types::{Filmstrip, Frame, Point};

/// Lay out one frame per prefix of `text`, shortest first.
///
/// Prefixes end on `char` boundaries, so a text of N scalar values yields
/// exactly N frames.
pub fn accumulate_frames(engine: &LayoutEngine, text: &str, config: &LayoutConfig) -> Filmstrip {
    let origin = config.origin;
    let reference = engine.layout_text(text, origin);
    let frame_width = reference.max_x - origin.x;
    let frame_height = reference.max_y - origin.y;
    debug!(frame_width, frame_height, "measured reference frame");

    let mut strip = Filmstrip {
        frame_width,
        frame_height,
        ..Filmstrip::default()
    };

    let mut position = origin;
    let ends = text
        .char_indices()
        .map(|(start, c)| start + c.len_utf8());
    for end in ends {
        let layout = engine.layout_text(&text[..end], position);
        debug!(
            frame = strip.frames.len(),
            x = position.x,
            y = position.y,
            paths = layout.paths.len(),
            "laid out frame"
        );

        strip.total_width = strip.total_width.max(layout.max_x);
        strip.total_height = strip.total_height.max(layout.max_y);
        strip.frames.push(Frame {
            origin: position,
            paths: layout.paths,
            max_x: layout.max_x,
            max_y: layout.max_y,
        });

        position = next_cell(position, origin, frame_width, frame_height, config.wrap_threshold);
    }

    strip
}

/// Cell for the frame after one placed at `current`
fn next_cell(current: Point, origin: Point, width: f64, height: f64, threshold: f64) -> Point {
    if current.x > threshold {
        Point::new(origin.x, current.y + height)
    } else {
        Point::new(current.x + width, current.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::ColorIndex;
    use crate::test_support::{FixedAdvance, NoMarkup};
    use pretty_assertions::assert_eq;

    fn origins(strip: &Filmstrip) -> Vec<(f64, f64)> {
        strip
            .frames
            .iter()
            .map(|frame| (frame.origin.x, frame.origin.y))
            .collect()
    }

    #[test]
    fn test_frames_wrap_after_passing_threshold() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);
        let config = LayoutConfig::new().with_wrap_threshold(50.0);

        let strip = accumulate_frames(&engine, "abcd", &config);
        assert_eq!(strip.frame_count(), 4);
        assert_eq!(strip.frame_width, 40.0);
        assert_eq!(strip.frame_height, 20.0);
        assert_eq!(
            origins(&strip),
            vec![(0.0, 0.0), (40.0, 0.0), (80.0, 0.0), (0.0, 20.0)]
        );
        // "abc" at x=80 reaches furthest right
        assert_eq!(strip.total_width, 110.0);
        assert_eq!(strip.total_height, 40.0);
    }

    #[test]
    fn test_one_frame_per_char_at_default_threshold() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);
        let text = "x".repeat(120);

        let strip = accumulate_frames(&engine, &text, &LayoutConfig::default());
        assert_eq!(strip.frame_count(), 120);
        assert_eq!(strip.frame_width, 1200.0);

        // 1200 is under the threshold, 2400 is the first cell past it
        let placed = origins(&strip);
        assert_eq!(placed[1], (1200.0, 0.0));
        assert_eq!(placed[2], (2400.0, 0.0));
        assert_eq!(placed[3], (0.0, 20.0));
    }

    #[test]
    fn test_multibyte_prefixes() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let strip = accumulate_frames(&engine, "é→b", &LayoutConfig::default());
        assert_eq!(strip.frame_count(), 3);
        assert_eq!(strip.frames[1].paths, vec![r##"<path fill="#000000" d="é→@30,0"/>"##]);
    }

    #[test]
    fn test_frames_keep_their_own_extent() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let strip = accumulate_frames(&engine, "ab\nc", &LayoutConfig::default());
        // "ab\n" ends with an empty line, which adds no height
        assert_eq!(strip.frames[2].max_y, 20.0);
        assert_eq!(strip.frames[3].max_y, 40.0);
        assert_eq!(strip.frame_height, 40.0);
    }

    #[test]
    fn test_draw_order_is_last_frame_first() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let strip = accumulate_frames(&engine, "ab", &LayoutConfig::default());
        assert_eq!(
            strip.draw_order(),
            vec![
                r##"<path fill="#000000" d="ab@20,0"/>"##,
                r##"<path fill="#000000" d="a@0,0"/>"##,
            ]
        );
    }

    #[test]
    fn test_empty_text_has_no_frames() {
        let colors = ColorIndex::default();
        let outliner = FixedAdvance::default();
        let engine = LayoutEngine::new(&colors, &NoMarkup, &outliner);

        let strip = accumulate_frames(&engine, "", &LayoutConfig::default());
        assert_eq!(strip.frame_count(), 0);
        assert_eq!(strip.total_width, 0.0);
    }
}
