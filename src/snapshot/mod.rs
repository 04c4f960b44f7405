//! Serde models for the snapshots handed in by the data layer
//!
//! The engine never fetches anything itself. A caller gathers tiles, the
//! explorer's troops and resource balances, serializes them as JSON, and
//! the CLI (or any other host) turns them into engine types here.

pub mod synthetic;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{HexError, Result};
use crate::core::types::EntityId;
use crate::hex::coord::HexCoord;
use crate::map::biome::Biome;
use crate::map::knowledge::{Tile, TileKnowledgeMap};
use crate::map::occupier::OccupierType;
use crate::raid::resources::{CarryCapacity, ResourceBalances};
use crate::troops::category::Troop;

/// One tile from a scan query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileScan {
    pub biome: Biome,
    #[serde(alias = "coordinate")]
    pub coord: HexCoord,
    #[serde(default, alias = "occupierId", skip_serializing_if = "Option::is_none")]
    pub occupier_id: Option<EntityId>,
    #[serde(default, alias = "occupierType", skip_serializing_if = "Option::is_none")]
    pub occupier_type: Option<OccupierType>,
}

impl TileScan {
    pub fn empty(coord: HexCoord, biome: Biome) -> Self {
        Self {
            biome,
            coord,
            occupier_id: None,
            occupier_type: None,
        }
    }

    pub fn occupied(coord: HexCoord, biome: Biome, id: EntityId, kind: OccupierType) -> Self {
        Self {
            biome,
            coord,
            occupier_id: Some(id),
            occupier_type: Some(kind),
        }
    }

    /// Convert into a map tile. An occupier type without an id is rejected.
    pub fn to_tile(&self) -> Result<Tile> {
        let tile = Tile::new(self.coord, self.biome);
        match (self.occupier_type, self.occupier_id) {
            (None, _) | (Some(OccupierType::None), _) => Ok(tile),
            (Some(kind), Some(id)) => Ok(tile.with_occupant(id, kind)),
            (Some(kind), None) => Err(HexError::MalformedSnapshot(format!(
                "tile {} has occupier {} but no occupier id",
                self.coord,
                kind.name()
            ))),
        }
    }
}

/// Position and troops of the controlled explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerSnapshot {
    pub id: EntityId,
    #[serde(alias = "coordinate")]
    pub coord: HexCoord,
    pub troops: Troop,
}

/// Carrying capacity and balances of one entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    #[serde(default, alias = "entityId", skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
    pub weight: CarryCapacity,
    #[serde(default)]
    pub balances: ResourceBalances,
}

/// Everything one decision cycle needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub explorer: ExplorerSnapshot,
    pub tiles: Vec<TileScan>,
    /// The explorer's own load, used as the raid capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker_resources: Option<ResourceSnapshot>,
    /// Balances of the entity being raided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defender_resources: Option<ResourceSnapshot>,
}

impl WorldSnapshot {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn position(&self) -> HexCoord {
        self.explorer.coord
    }

    /// Knowledge map built from the scanned tiles
    pub fn knowledge_map(&self) -> Result<TileKnowledgeMap> {
        let tiles = self
            .tiles
            .iter()
            .map(TileScan::to_tile)
            .collect::<Result<Vec<_>>>()?;
        Ok(TileKnowledgeMap::from_tiles(tiles))
    }
}
