//! Layout of highlighted source as positioned glyph paths
//!
//! [`LayoutEngine`] places the tokens of each line with an advancing cursor;
//! [`accumulate_frames`] repeats that for every prefix of the source to build
//! the typing animation [`Filmstrip`].

pub mod config;
pub mod engine;
pub mod frames;
pub mod types;

pub use config::LayoutConfig;
pub use engine::LayoutEngine;
pub use frames::accumulate_frames;
pub use types::*;
