//! Entity scanning around an explorer
//!
//! Finds who is standing next to us (attack candidates), ranks the nearest
//! occupied tiles with a route to each, and lists unexplored neighbors.

use serde::{Deserialize, Serialize};

use crate::hex::coord::HexCoord;
use crate::hex::direction::Direction;
use crate::map::knowledge::{Occupant, TileKnowledgeMap};
use crate::navigation::pathfinding::{find_path, Path};

/// Step budget for routes attached to nearest-occupant results
pub const SCAN_PATH_CAP: u32 = 10;

/// Default number of ranked occupants
pub const DEFAULT_NEAREST_LIMIT: usize = 3;

/// Occupant on a tile touching the scan center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentOccupant {
    pub direction: Direction,
    pub coord: HexCoord,
    pub occupant: Occupant,
}

/// Occupied tile ranked by distance from the scan center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOccupant {
    pub coord: HexCoord,
    pub distance: u64,
    pub occupant: Occupant,
    /// Route to the occupant; `None` when already adjacent
    pub path: Option<Path>,
}

/// Result of a nearest-occupant scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestScan {
    pub entries: Vec<RankedOccupant>,
    /// Directions along the best entry's route (empty when adjacent or unreachable)
    pub recommended_path: Vec<Direction>,
}

impl NearestScan {
    pub fn best(&self) -> Option<&RankedOccupant> {
        self.entries.first()
    }
}

/// Occupied, known neighbors of `center`, in direction order
pub fn adjacent_occupants(center: HexCoord, map: &TileKnowledgeMap) -> Vec<AdjacentOccupant> {
    Direction::all()
        .into_iter()
        .filter_map(|direction| {
            let coord = direction.step_from(center);
            map.occupant(&coord).map(|occupant| AdjacentOccupant {
                direction,
                coord,
                occupant: *occupant,
            })
        })
        .collect()
}

/// Directions whose neighbor has never been scanned
pub fn unexplored_neighbors(center: HexCoord, map: &TileKnowledgeMap) -> Vec<Direction> {
    Direction::all()
        .into_iter()
        .filter(|d| !map.is_known(&d.step_from(center)))
        .collect()
}

/// Up to `limit` occupied tiles within `max_distance`, nearest first
///
/// The center tile is skipped (it holds the scanning explorer itself). Equal
/// distances keep scan order.
pub fn nearest_occupants(
    center: HexCoord,
    map: &TileKnowledgeMap,
    max_distance: u64,
    limit: usize,
) -> NearestScan {
    nearest_occupants_capped(center, map, max_distance, limit, SCAN_PATH_CAP)
}

/// [`nearest_occupants`] with an explicit step budget for attached routes
pub fn nearest_occupants_capped(
    center: HexCoord,
    map: &TileKnowledgeMap,
    max_distance: u64,
    limit: usize,
    path_cap: u32,
) -> NearestScan {
    let mut candidates: Vec<(HexCoord, u64, Occupant)> = map
        .occupied_tiles()
        .filter(|tile| tile.coord != center)
        .filter_map(|tile| {
            let distance = center.distance(&tile.coord);
            let occupant = tile.occupant?;
            (distance <= max_distance).then_some((tile.coord, distance, occupant))
        })
        .collect();

    // Stable: ties keep scan order
    candidates.sort_by_key(|&(_, distance, _)| distance);
    candidates.truncate(limit);

    let entries: Vec<RankedOccupant> = candidates
        .into_iter()
        .map(|(coord, distance, occupant)| RankedOccupant {
            coord,
            distance,
            occupant,
            path: (distance > 1).then(|| find_path(center, coord, map, path_cap)),
        })
        .collect();

    let recommended_path = entries
        .first()
        .and_then(|best| best.path.as_ref())
        .map(Path::directions)
        .unwrap_or_default();

    NearestScan {
        entries,
        recommended_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::EntityId;
    use crate::map::biome::Biome;
    use crate::map::knowledge::Tile;
    use crate::map::occupier::OccupierType;
    use crate::troops::category::{TroopCategory, TroopTier};

    fn explorer() -> OccupierType {
        OccupierType::Explorer {
            category: TroopCategory::Crossbowman,
            tier: TroopTier::T2,
        }
    }

    fn map_with(occupied: &[(HexCoord, u64)]) -> TileKnowledgeMap {
        HexCoord::new(0, 0)
            .hexes_within(6)
            .into_iter()
            .map(|c| {
                let tile = Tile::new(c, Biome::Shrubland);
                match occupied.iter().find(|(oc, _)| *oc == c) {
                    Some(&(_, id)) => tile.with_occupant(EntityId(id), explorer()),
                    None => tile,
                }
            })
            .collect()
    }

    #[test]
    fn test_adjacent_occupants() {
        let center = HexCoord::new(0, 0);
        let north_east = Direction::NorthEast.step_from(center);
        let west = Direction::West.step_from(center);
        let map = map_with(&[(north_east, 1), (west, 2), (HexCoord::new(3, 0), 3)]);

        let adjacent = adjacent_occupants(center, &map);
        assert_eq!(adjacent.len(), 2);
        assert_eq!(adjacent[0].direction, Direction::NorthEast);
        assert_eq!(adjacent[0].occupant.id, EntityId(1));
        assert_eq!(adjacent[1].direction, Direction::West);
        assert_eq!(adjacent[1].coord, west);
    }

    #[test]
    fn test_adjacent_ignores_unknown() {
        let map = TileKnowledgeMap::from_tiles([Tile::new(HexCoord::new(0, 0), Biome::Bare)]);
        assert!(adjacent_occupants(HexCoord::new(0, 0), &map).is_empty());
    }

    #[test]
    fn test_nearest_sorted_and_limited() {
        let center = HexCoord::new(0, 0);
        let map = map_with(&[
            (HexCoord::new(4, 0), 40),
            (HexCoord::new(1, 0), 10),
            (HexCoord::new(-2, 0), 20),
            (HexCoord::new(0, -3), 30),
        ]);

        let scan = nearest_occupants(center, &map, 6, 3);
        let ids: Vec<u64> = scan.entries.iter().map(|e| e.occupant.id.0).collect();
        assert_eq!(ids, vec![10, 20, 30]);

        // Adjacent entry carries no route
        assert!(scan.entries[0].path.is_none());
        assert_eq!(scan.entries[1].path.as_ref().map(Path::len), Some(2));
        // Best entry is adjacent, so nothing to recommend
        assert!(scan.recommended_path.is_empty());
    }

    #[test]
    fn test_nearest_recommended_path() {
        let center = HexCoord::new(0, 0);
        let map = map_with(&[(HexCoord::new(3, 0), 5)]);

        let scan = nearest_occupants(center, &map, 5, DEFAULT_NEAREST_LIMIT);
        assert_eq!(scan.entries.len(), 1);
        assert_eq!(scan.recommended_path, vec![Direction::East; 3]);
        assert_eq!(scan.best().map(|b| b.distance), Some(3));
    }

    #[test]
    fn test_nearest_excludes_center_and_far() {
        let center = HexCoord::new(0, 0);
        let map = map_with(&[(center, 1), (HexCoord::new(5, 0), 2)]);
        let scan = nearest_occupants(center, &map, 4, 3);
        assert!(scan.entries.is_empty());
        assert!(scan.recommended_path.is_empty());
    }

    #[test]
    fn test_nearest_ties_keep_scan_order() {
        let center = HexCoord::new(0, 0);
        let tiles = vec![
            Tile::new(HexCoord::new(2, 0), Biome::Grassland).with_occupant(EntityId(8), explorer()),
            Tile::new(HexCoord::new(-2, 0), Biome::Grassland).with_occupant(EntityId(4), explorer()),
        ];
        let map = TileKnowledgeMap::from_tiles(tiles);
        let scan = nearest_occupants(center, &map, 3, 3);
        let ids: Vec<u64> = scan.entries.iter().map(|e| e.occupant.id.0).collect();
        assert_eq!(ids, vec![8, 4]);
        // Nothing between us and them is known, so no route
        assert_eq!(scan.entries[0].path, Some(Path::default()));
    }

    #[test]
    fn test_unexplored_neighbors() {
        let center = HexCoord::new(0, 0);
        let map = TileKnowledgeMap::from_tiles([
            Tile::new(center, Biome::Grassland),
            Tile::new(Direction::East.step_from(center), Biome::Grassland),
            Tile::new(Direction::SouthWest.step_from(center), Biome::Grassland),
        ]);
        assert_eq!(
            unexplored_neighbors(center, &map),
            vec![
                Direction::NorthEast,
                Direction::NorthWest,
                Direction::West,
                Direction::SouthEast
            ]
        );
    }
}
