//! Six-way movement directions and the row-parity offset tables
//!
//! Direction indices 0-5 are the same ones the game contracts accept for
//! moves, attacks and explores. The delta for a direction depends only on
//! whether the *current* row is even or odd.

use serde::{Deserialize, Serialize};

use crate::core::error::{HexError, Result};
use crate::hex::coord::HexCoord;

/// Direction of a single hex step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    #[default]
    East = 0,
    NorthEast = 1,
    NorthWest = 2,
    West = 3,
    SouthWest = 4,
    SouthEast = 5,
}

/// `(dx, dy)` per direction index when standing on an even row
pub const EVEN_ROW_OFFSETS: [(i64, i64); 6] = [(1, 0), (1, 1), (0, 1), (-1, 0), (0, -1), (1, -1)];

/// `(dx, dy)` per direction index when standing on an odd row
pub const ODD_ROW_OFFSETS: [(i64, i64); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1)];

impl Direction {
    /// All directions in index order
    pub fn all() -> [Direction; 6] {
        [
            Direction::East,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::West,
            Direction::SouthWest,
            Direction::SouthEast,
        ]
    }

    /// Contract-side index (0-5)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Direction that undoes this step
    pub fn opposite(self) -> Self {
        Self::all()[usize::from((self.index() + 3) % 6)]
    }

    /// Coordinate delta for this direction from a row of the given parity
    pub fn offset(self, even_row: bool) -> (i64, i64) {
        let table = if even_row { &EVEN_ROW_OFFSETS } else { &ODD_ROW_OFFSETS };
        table[usize::from(self.index())]
    }

    /// Apply this direction to `from`
    pub fn step_from(self, from: HexCoord) -> HexCoord {
        let (dx, dy) = self.offset(from.is_even_row());
        HexCoord::new(from.x + dx, from.y + dy)
    }

    /// Direction leading from `from` to an adjacent `to`, if they touch
    pub fn between(from: HexCoord, to: HexCoord) -> Option<Direction> {
        Self::all().into_iter().find(|d| d.step_from(from) == to)
    }

    /// Short compass label used in rendered legends
    pub fn label(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::West => "W",
            Direction::SouthWest => "SW",
            Direction::SouthEast => "SE",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = HexError;

    fn try_from(value: u8) -> Result<Self> {
        Self::all()
            .get(usize::from(value))
            .copied()
            .ok_or(HexError::InvalidDirection(value))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction.index()
    }
}

/// Neighbor of `coord` for a raw contract direction index
pub fn neighbor(coord: HexCoord, direction: u8) -> Result<HexCoord> {
    Ok(Direction::try_from(direction)?.step_from(coord))
}

/// Flatten a list of directions into contract indices
pub fn to_indices(directions: &[Direction]) -> Vec<u8> {
    directions.iter().map(|d| d.index()).collect()
}
