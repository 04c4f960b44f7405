//! Offset hex coordinates used by the game world
//!
//! Tiles are addressed by `(x, y)` where `y` is the row. Even rows sit half a
//! hex to the east of odd rows, so neighbor deltas depend on row parity (see
//! `hex::direction`). Distances are measured by folding the row offset back
//! out (axial `q = x - ceil(y / 2)`) and taking the hex metric
//! `max(|dq|, |dr|, |dq + dr|)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::HexError;
use crate::hex::direction::Direction;

/// Largest coordinate magnitude accepted from snapshots and the command line
///
/// Contract coordinates sit near 2^31; anything past 2^40 is garbage input,
/// and staying far below `i64::MAX` keeps distance and step arithmetic exact.
pub const MAX_COORD: i64 = 1 << 40;

/// Offset hex coordinate (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "RawCoord")]
pub struct HexCoord {
    pub x: i64,
    pub y: i64,
}

#[derive(Deserialize)]
struct RawCoord {
    x: i64,
    y: i64,
}

impl TryFrom<RawCoord> for HexCoord {
    type Error = HexError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        HexCoord::checked(raw.x, raw.y)
    }
}

impl HexCoord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Coordinate from untrusted input, rejecting components beyond [`MAX_COORD`]
    pub fn checked(x: i64, y: i64) -> Result<Self, HexError> {
        if x.unsigned_abs() > MAX_COORD.unsigned_abs() || y.unsigned_abs() > MAX_COORD.unsigned_abs() {
            return Err(HexError::MalformedSnapshot(format!(
                "coordinate ({x}, {y}) outside +/-{MAX_COORD}"
            )));
        }
        Ok(Self { x, y })
    }

    /// Whether this hex sits on an even row
    pub fn is_even_row(&self) -> bool {
        self.y & 1 == 0
    }

    /// Axial column for this offset coordinate
    fn axial_q(&self) -> i64 {
        self.x - (self.y + (self.y & 1)) / 2
    }

    /// Hex steps between two coordinates
    pub fn distance(&self, other: &HexCoord) -> u64 {
        let dq = self.axial_q() - other.axial_q();
        let dr = self.y - other.y;
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max((dq + dr).unsigned_abs())
    }

    /// Neighbor one step away in `direction`
    pub fn neighbor(&self, direction: Direction) -> HexCoord {
        direction.step_from(*self)
    }

    /// All 6 adjacent hexes, in direction index order
    pub fn neighbors(&self) -> [HexCoord; 6] {
        Direction::all().map(|d| self.neighbor(d))
    }

    /// Every hex within `radius` steps (inclusive), row by row from the
    /// southernmost row, west to east
    pub fn hexes_within(&self, radius: u32) -> Vec<HexCoord> {
        let r = i64::from(radius);
        let mut results = Vec::new();
        for y in (self.y - r)..=(self.y + r) {
            // Row offset can shift a hex at most one column per two rows
            for x in (self.x - r - 1)..=(self.x + r + 1) {
                let coord = HexCoord::new(x, y);
                if self.distance(&coord) <= u64::from(radius) {
                    results.push(coord);
                }
            }
        }
        results
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for HexCoord {
    type Err = HexError;

    /// Parses `"x,y"` (whitespace and surrounding parentheses allowed)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed
            .split_once(',')
            .ok_or_else(|| HexError::MalformedSnapshot(format!("expected \"x,y\", got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| HexError::MalformedSnapshot(format!("bad coordinate {s:?}: {e}")))
        };
        HexCoord::checked(parse(x)?, parse(y)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same() {
        let a = HexCoord::new(3, -4);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_distance_along_row() {
        let a = HexCoord::new(0, 0);
        let b = HexCoord::new(5, 0);
        assert_eq!(a.distance(&b), 5);
        assert_eq!(b.distance(&a), 5);
    }

    #[test]
    fn test_distance_follows_row_shift() {
        // Even rows sit east of odd rows: (1, 1) and (0, 1) touch (0, 0)
        assert_eq!(HexCoord::new(0, 0).distance(&HexCoord::new(1, 1)), 1);
        assert_eq!(HexCoord::new(0, 0).distance(&HexCoord::new(0, 1)), 1);
        assert_eq!(HexCoord::new(0, 0).distance(&HexCoord::new(-1, 1)), 2);
        // Straight up four rows drifts back to the same column
        assert_eq!(HexCoord::new(0, 0).distance(&HexCoord::new(0, 4)), 4);
    }

    #[test]
    fn test_neighbors_all_adjacent() {
        for coord in [HexCoord::new(0, 0), HexCoord::new(7, 3), HexCoord::new(-2, -5)] {
            for n in coord.neighbors() {
                assert_eq!(coord.distance(&n), 1, "{coord} -> {n}");
            }
        }
    }

    #[test]
    fn test_hexes_within_counts() {
        let center = HexCoord::new(4, 7);
        assert_eq!(center.hexes_within(0), vec![center]);
        assert_eq!(center.hexes_within(1).len(), 7);
        assert_eq!(center.hexes_within(2).len(), 19);
        assert_eq!(center.hexes_within(3).len(), 37);
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!("3,-2".parse::<HexCoord>().unwrap(), HexCoord::new(3, -2));
        assert_eq!("( 10 , 4 )".parse::<HexCoord>().unwrap(), HexCoord::new(10, 4));
        assert!("10".parse::<HexCoord>().is_err());
        assert!("a,b".parse::<HexCoord>().is_err());
    }

    #[test]
    fn test_extreme_coordinates_rejected() {
        assert!(matches!(
            "0,9223372036854775807".parse::<HexCoord>(),
            Err(HexError::MalformedSnapshot(_))
        ));
        assert!("-9223372036854775808,0".parse::<HexCoord>().is_err());
        assert!(serde_json::from_str::<HexCoord>(r#"{"x": 0, "y": 9223372036854775807}"#).is_err());

        let edge = format!("{MAX_COORD},-{MAX_COORD}");
        let coord: HexCoord = edge.parse().unwrap();
        assert_eq!(coord.distance(&HexCoord::new(0, 0)), 3 * MAX_COORD.unsigned_abs() / 2);
        for d in Direction::all() {
            assert_eq!(coord.distance(&d.step_from(coord)), 1);
        }
    }

    #[test]
    fn test_coord_json_round_trip() {
        let coord: HexCoord = serde_json::from_str(r#"{"x": 2147483647, "y": -5}"#).unwrap();
        assert_eq!(coord, HexCoord::new(2_147_483_647, -5));
        assert_eq!(serde_json::to_string(&coord).unwrap(), r#"{"x":2147483647,"y":-5}"#);
    }
}
