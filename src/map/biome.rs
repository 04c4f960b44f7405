//! World biomes and the terrain classes that drive travel costs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::HexError;

/// Biome of an explored tile
///
/// Deserializes from either the PascalCase name or the contract biome id
/// (1-16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BiomeRepr")]
pub enum Biome {
    DeepOcean,
    Ocean,
    Beach,
    Scorched,
    Bare,
    Tundra,
    Snow,
    TemperateDesert,
    Shrubland,
    Taiga,
    Grassland,
    TemperateDeciduousForest,
    TemperateRainForest,
    SubtropicalDesert,
    TropicalSeasonalForest,
    TropicalRainForest,
}

/// Coarse grouping used by the stamina travel-cost table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainClass {
    Water,
    Open,
    Dense,
}

impl Biome {
    pub const ALL: [Biome; 16] = [
        Biome::DeepOcean,
        Biome::Ocean,
        Biome::Beach,
        Biome::Scorched,
        Biome::Bare,
        Biome::Tundra,
        Biome::Snow,
        Biome::TemperateDesert,
        Biome::Shrubland,
        Biome::Taiga,
        Biome::Grassland,
        Biome::TemperateDeciduousForest,
        Biome::TemperateRainForest,
        Biome::SubtropicalDesert,
        Biome::TropicalSeasonalForest,
        Biome::TropicalRainForest,
    ];

    /// Contract biome id (1-16; 0 means "no biome" on chain)
    pub fn id(self) -> u8 {
        Self::ALL.iter().position(|b| *b == self).map_or(0, |i| i as u8 + 1)
    }

    pub fn from_id(id: u8) -> Option<Biome> {
        id.checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
    }

    pub fn terrain_class(self) -> TerrainClass {
        match self {
            Biome::DeepOcean | Biome::Ocean => TerrainClass::Water,
            Biome::Taiga
            | Biome::TemperateDeciduousForest
            | Biome::TemperateRainForest
            | Biome::TropicalSeasonalForest
            | Biome::TropicalRainForest => TerrainClass::Dense,
            Biome::Beach
            | Biome::Scorched
            | Biome::Bare
            | Biome::Tundra
            | Biome::Snow
            | Biome::TemperateDesert
            | Biome::Shrubland
            | Biome::Grassland
            | Biome::SubtropicalDesert => TerrainClass::Open,
        }
    }

    /// Single character used by the ASCII renderer
    pub fn glyph(self) -> char {
        match self {
            Biome::DeepOcean => '~',
            Biome::Ocean => '=',
            Biome::Beach => ',',
            Biome::Scorched => '%',
            Biome::Bare => ':',
            Biome::Tundra => '_',
            Biome::Snow => '*',
            Biome::TemperateDesert => ';',
            Biome::Shrubland => '"',
            Biome::Taiga => 'A',
            Biome::Grassland => '.',
            Biome::TemperateDeciduousForest => 'f',
            Biome::TemperateRainForest => 'r',
            Biome::SubtropicalDesert => '\'',
            Biome::TropicalSeasonalForest => 't',
            Biome::TropicalRainForest => 'T',
        }
    }
}

impl FromStr for Biome {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        Biome::ALL
            .into_iter()
            .find(|b| format!("{b:?}").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| HexError::UnknownBiome(s.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BiomeRepr {
    Id(u8),
    Name(String),
}

impl TryFrom<BiomeRepr> for Biome {
    type Error = HexError;

    fn try_from(repr: BiomeRepr) -> Result<Self, Self::Error> {
        match repr {
            BiomeRepr::Id(id) => {
                Biome::from_id(id).ok_or_else(|| HexError::UnknownBiome(id.to_string()))
            }
            BiomeRepr::Name(name) => name.parse(),
        }
    }
}
