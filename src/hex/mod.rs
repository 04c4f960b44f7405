//! Hex grid algebra: offset coordinates, distance, and the six directions

pub mod coord;
pub mod direction;

pub use coord::{HexCoord, MAX_COORD};
pub use direction::{neighbor, to_indices, Direction, EVEN_ROW_OFFSETS, ODD_ROW_OFFSETS};
