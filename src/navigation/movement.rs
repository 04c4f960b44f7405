//! Replay of a submitted direction sequence against the explored map
//!
//! Lets the caller reject a move before it is sent on chain: every step must
//! land on a known, unoccupied tile.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::hex::coord::HexCoord;
use crate::hex::direction::Direction;
use crate::map::knowledge::TileKnowledgeMap;

/// Why a step cannot be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    Unexplored,
    Occupied,
}

/// First failing step of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRejection {
    /// Zero-based index of the failing step
    pub step: usize,
    pub coord: HexCoord,
    pub reason: BlockReason,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let why = match self.reason {
            BlockReason::Unexplored => "tile unexplored",
            BlockReason::Occupied => "tile occupied",
        };
        write!(f, "step {} to {}: {}", self.step, self.coord, why)
    }
}

/// Coordinates visited by `directions`, or the first step that is blocked
pub fn trace_directions(
    start: HexCoord,
    directions: &[Direction],
    map: &TileKnowledgeMap,
) -> std::result::Result<Vec<HexCoord>, MoveRejection> {
    let mut visited = Vec::with_capacity(directions.len());
    let mut at = start;
    for (step, direction) in directions.iter().enumerate() {
        at = direction.step_from(at);
        let reason = match map.get(&at) {
            None => Some(BlockReason::Unexplored),
            Some(tile) if tile.is_occupied() => Some(BlockReason::Occupied),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            return Err(MoveRejection {
                step,
                coord: at,
                reason,
            });
        }
        visited.push(at);
    }
    Ok(visited)
}

/// Parse raw contract indices into directions
pub fn parse_directions(indices: &[u8]) -> Result<Vec<Direction>> {
    indices.iter().map(|&i| Direction::try_from(i)).collect()
}
