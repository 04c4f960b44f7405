//! Tile occupiers: mobile explorers and stationary structures

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::HexError;
use crate::troops::category::{TroopCategory, TroopTier};

/// Occupier kind reported by a tile scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OccupierType {
    None,
    Realm { level: u8, wonder: bool },
    Village,
    Bank,
    FragmentMine,
    Hyperstructure { level: u8 },
    Explorer { category: TroopCategory, tier: TroopTier },
}

/// Broad classification driving attack eligibility and loot rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupantClass {
    Explorer,
    Structure,
}

impl OccupierType {
    pub fn is_occupied(&self) -> bool {
        !matches!(self, OccupierType::None)
    }

    pub fn class(&self) -> Option<OccupantClass> {
        match self {
            OccupierType::None => None,
            OccupierType::Explorer { .. } => Some(OccupantClass::Explorer),
            _ => Some(OccupantClass::Structure),
        }
    }

    pub fn is_explorer(&self) -> bool {
        self.class() == Some(OccupantClass::Explorer)
    }

    pub fn is_structure(&self) -> bool {
        self.class() == Some(OccupantClass::Structure)
    }

    /// Troop category and tier for explorer occupiers
    pub fn explorer_profile(&self) -> Option<(TroopCategory, TroopTier)> {
        match *self {
            OccupierType::Explorer { category, tier } => Some((category, tier)),
            _ => None,
        }
    }

    /// Canonical scan name, e.g. `ExplorerKnightT2` or `RealmWonderLevel3`
    pub fn name(&self) -> String {
        match *self {
            OccupierType::None => "None".into(),
            OccupierType::Realm { level, wonder } => {
                let kind = if wonder { "Wonder" } else { "Regular" };
                format!("Realm{kind}Level{level}")
            }
            OccupierType::Village => "Village".into(),
            OccupierType::Bank => "Bank".into(),
            OccupierType::FragmentMine => "FragmentMine".into(),
            OccupierType::Hyperstructure { level } => format!("HyperstructureLevel{level}"),
            OccupierType::Explorer { category, tier } => format!("Explorer{category:?}{tier:?}"),
        }
    }
}

fn parse_level(digits: &str, max: u8, original: &str) -> Result<u8, HexError> {
    digits
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=max).contains(level))
        .ok_or_else(|| HexError::UnknownOccupierType(original.to_string()))
}

impl FromStr for OccupierType {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || HexError::UnknownOccupierType(s.to_string());
        match s {
            "None" | "" => return Ok(OccupierType::None),
            "Village" => return Ok(OccupierType::Village),
            "Bank" => return Ok(OccupierType::Bank),
            "FragmentMine" => return Ok(OccupierType::FragmentMine),
            _ => {}
        }

        if let Some(level) = s.strip_prefix("RealmRegularLevel") {
            return Ok(OccupierType::Realm {
                level: parse_level(level, 4, s)?,
                wonder: false,
            });
        }
        if let Some(level) = s.strip_prefix("RealmWonderLevel") {
            return Ok(OccupierType::Realm {
                level: parse_level(level, 4, s)?,
                wonder: true,
            });
        }
        if let Some(level) = s.strip_prefix("HyperstructureLevel") {
            return Ok(OccupierType::Hyperstructure {
                level: parse_level(level, 3, s)?,
            });
        }
        if let Some(rest) = s.strip_prefix("Explorer") {
            let split = rest.len().saturating_sub(2);
            let category = rest.get(..split).ok_or_else(unknown)?;
            let tier = rest
                .get(split..)
                .ok_or_else(unknown)?
                .strip_prefix('T')
                .and_then(|t| t.parse::<u8>().ok())
                .and_then(TroopTier::from_level)
                .ok_or_else(unknown)?;
            let category = category.parse::<TroopCategory>().map_err(|_| unknown())?;
            return Ok(OccupierType::Explorer { category, tier });
        }

        Err(unknown())
    }
}

impl TryFrom<String> for OccupierType {
    type Error = HexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OccupierType> for String {
    fn from(occupier: OccupierType) -> String {
        occupier.name()
    }
}
