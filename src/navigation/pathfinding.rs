//! A* pathfinding over the explored map
//!
//! Only known, unoccupied tiles are walkable. The goal itself may be occupied
//! (an attack target) and is still accepted as the final step.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::hex::coord::HexCoord;
use crate::hex::direction::Direction;
use crate::map::knowledge::TileKnowledgeMap;

/// One hex step of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub direction: Direction,
    pub coord: HexCoord,
}

/// Steps from an (excluded) start to an (included) end
///
/// Empty means either "no path" or "already there"; callers tell the two
/// apart by comparing start and goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    pub steps: Vec<PathStep>,
}

impl Path {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.steps.iter().map(|s| s.direction).collect()
    }

    /// Contract direction indices, ready to submit as a multi-step move
    pub fn direction_indices(&self) -> Vec<u8> {
        self.steps.iter().map(|s| s.direction.index()).collect()
    }

    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.steps.iter().map(|s| s.coord)
    }

    pub fn destination(&self) -> Option<HexCoord> {
        self.steps.last().map(|s| s.coord)
    }

    /// First `n` steps of this path
    pub fn truncated(&self, n: usize) -> Path {
        Path {
            steps: self.steps.iter().take(n).copied().collect(),
        }
    }
}

/// Node in the A* open set
#[derive(Debug, Clone, PartialEq, Eq)]
struct PathNode {
    coord: HexCoord,
    g_cost: u64,
    f_cost: u64, // g_cost + heuristic
    seq: u64,    // push order, earlier wins ties
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest path from `start` to `goal` using at most `max_steps` steps
///
/// Returns an empty path when already at the goal, when the goal is farther
/// than `max_steps`, or when unexplored/occupied tiles block every route.
pub fn find_path(
    start: HexCoord,
    goal: HexCoord,
    map: &TileKnowledgeMap,
    max_steps: u32,
) -> Path {
    if start == goal {
        return Path::default();
    }

    let budget = u64::from(max_steps);
    if start.distance(&goal) > budget {
        tracing::trace!(%start, %goal, max_steps, "goal beyond step budget");
        return Path::default();
    }

    let mut open_set = BinaryHeap::new();
    let mut closed: AHashSet<HexCoord> = AHashSet::new();
    let mut came_from: AHashMap<HexCoord, (HexCoord, Direction)> = AHashMap::new();
    let mut g_scores: AHashMap<HexCoord, u64> = AHashMap::new();
    let mut seq = 0u64;

    g_scores.insert(start, 0);
    open_set.push(PathNode {
        coord: start,
        g_cost: 0,
        f_cost: start.distance(&goal),
        seq,
    });

    while let Some(current) = open_set.pop() {
        if current.coord == goal {
            return reconstruct_path(&came_from, start, goal);
        }

        // Stale heap entry for an already-expanded node
        if !closed.insert(current.coord) {
            continue;
        }

        for direction in Direction::all() {
            let neighbor = direction.step_from(current.coord);

            if closed.contains(&neighbor) || !map.is_known(&neighbor) {
                continue;
            }
            if neighbor != goal && !map.is_passable(&neighbor) {
                continue;
            }

            let tentative_g = current.g_cost + 1;
            let f_cost = tentative_g + neighbor.distance(&goal);
            if f_cost > budget {
                continue;
            }

            let known_g = g_scores.get(&neighbor).copied().unwrap_or(u64::MAX);
            if tentative_g < known_g {
                came_from.insert(neighbor, (current.coord, direction));
                g_scores.insert(neighbor, tentative_g);
                seq += 1;
                open_set.push(PathNode {
                    coord: neighbor,
                    g_cost: tentative_g,
                    f_cost,
                    seq,
                });
            }
        }
    }

    tracing::trace!(%start, %goal, explored = closed.len(), "no path through known tiles");
    Path::default()
}

/// Walk parent pointers back from `goal`, then reverse into travel order
fn reconstruct_path(
    came_from: &AHashMap<HexCoord, (HexCoord, Direction)>,
    start: HexCoord,
    goal: HexCoord,
) -> Path {
    let mut steps = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&(prev, direction)) = came_from.get(&current) else {
            break;
        };
        steps.push(PathStep {
            direction,
            coord: current,
        });
        current = prev;
    }
    steps.reverse();
    Path { steps }
}
