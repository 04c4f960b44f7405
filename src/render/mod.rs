//! Text rendering of the explored world
//!
//! This module is READ-ONLY - it never influences planning decisions.

pub mod ascii;

pub use ascii::{AsciiRenderer, EXPLORER_GLYPH, POSITION_GLYPH, STRUCTURE_GLYPH, UNEXPLORED_GLYPH};
