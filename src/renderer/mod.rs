//! SVG renderer for laid-out glyph paths
//!
//! Wraps path fragments in a sized `<svg>` envelope. Fragment order is the
//! caller's: nothing here reorders them.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{emit, SvgBuilder};
