//! Partial-knowledge world map: biomes, occupiers and explored tiles

pub mod biome;
pub mod knowledge;
pub mod occupier;

pub use biome::{Biome, TerrainClass};
pub use knowledge::{Occupant, Tile, TileKnowledgeMap};
pub use occupier::{OccupantClass, OccupierType};
