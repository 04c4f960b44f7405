//! Navigation over the explored map: A* routes, entity scans and move checks

pub mod movement;
pub mod pathfinding;
pub mod scanner;

pub use movement::{parse_directions, trace_directions, BlockReason, MoveRejection};
pub use pathfinding::{find_path, Path, PathStep};
pub use scanner::{
    adjacent_occupants, nearest_occupants, nearest_occupants_capped, unexplored_neighbors,
    AdjacentOccupant, NearestScan, RankedOccupant, DEFAULT_NEAREST_LIMIT, SCAN_PATH_CAP,
};
