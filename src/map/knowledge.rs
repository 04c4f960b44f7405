//! Tile knowledge map - the explorer's fog of war
//!
//! A snapshot of every tile a scan has revealed. Coordinates missing from the
//! map are unexplored and therefore never planned through. The map is
//! immutable: the next scan builds a new one.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;
use crate::hex::coord::HexCoord;
use crate::map::biome::Biome;
use crate::map::occupier::OccupierType;

/// Entity standing on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub id: EntityId,
    pub kind: OccupierType,
}

/// A single explored tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub coord: HexCoord,
    pub biome: Biome,
    pub occupant: Option<Occupant>,
}

impl Tile {
    pub fn new(coord: HexCoord, biome: Biome) -> Self {
        Self {
            coord,
            biome,
            occupant: None,
        }
    }

    /// Place an occupier on this tile. `OccupierType::None` leaves it empty.
    pub fn with_occupant(mut self, id: EntityId, kind: OccupierType) -> Self {
        self.occupant = kind.is_occupied().then_some(Occupant { id, kind });
        self
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Read-only view of the explored world
#[derive(Debug, Clone, Default)]
pub struct TileKnowledgeMap {
    /// Tiles in scan order
    tiles: Vec<Tile>,
    index: AHashMap<HexCoord, usize>,
}

impl TileKnowledgeMap {
    /// Build a map from scanned tiles. A coordinate scanned twice keeps its
    /// first scan position but takes the contents of the last record.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut map = Self::default();
        for tile in tiles {
            match map.index.get(&tile.coord) {
                Some(&slot) => map.tiles[slot] = tile,
                None => {
                    map.index.insert(tile.coord, map.tiles.len());
                    map.tiles.push(tile);
                }
            }
        }
        map
    }

    pub fn is_known(&self, coord: &HexCoord) -> bool {
        self.index.contains_key(coord)
    }

    pub fn get(&self, coord: &HexCoord) -> Option<&Tile> {
        self.index.get(coord).map(|&slot| &self.tiles[slot])
    }

    /// Known and unoccupied
    pub fn is_passable(&self, coord: &HexCoord) -> bool {
        self.get(coord).is_some_and(|tile| !tile.is_occupied())
    }

    pub fn occupant(&self, coord: &HexCoord) -> Option<&Occupant> {
        self.get(coord).and_then(|tile| tile.occupant.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in scan order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Occupied tiles in scan order
    pub fn occupied_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.is_occupied())
    }

    /// Inclusive `(min, max)` corners of the explored area
    pub fn bounds(&self) -> Option<(HexCoord, HexCoord)> {
        let first = self.tiles.first()?.coord;
        Some(self.tiles.iter().fold((first, first), |(lo, hi), tile| {
            (
                HexCoord::new(lo.x.min(tile.coord.x), lo.y.min(tile.coord.y)),
                HexCoord::new(hi.x.max(tile.coord.x), hi.y.max(tile.coord.y)),
            )
        }))
    }
}

impl FromIterator<Tile> for TileKnowledgeMap {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self::from_tiles(iter)
    }
}
