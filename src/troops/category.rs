//! Troop categories, tiers and the troop record carried by an explorer

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::HexError;
use crate::troops::stamina::StaminaState;

/// Explorer troop category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TroopCategory {
    Knight,
    Crossbowman,
    Paladin,
}

impl TroopCategory {
    pub fn all() -> [TroopCategory; 3] {
        [
            TroopCategory::Knight,
            TroopCategory::Crossbowman,
            TroopCategory::Paladin,
        ]
    }
}

impl FromStr for TroopCategory {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "knight" => Ok(TroopCategory::Knight),
            "crossbowman" => Ok(TroopCategory::Crossbowman),
            "paladin" => Ok(TroopCategory::Paladin),
            _ => Err(HexError::MalformedSnapshot(format!(
                "unknown troop category {s:?}"
            ))),
        }
    }
}

/// Troop tier (T1 weakest)
///
/// Deserializes from `"T2"` or the bare level `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TierRepr")]
pub enum TroopTier {
    T1,
    T2,
    T3,
}

impl TroopTier {
    pub fn level(self) -> u8 {
        match self {
            TroopTier::T1 => 1,
            TroopTier::T2 => 2,
            TroopTier::T3 => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<TroopTier> {
        match level {
            1 => Some(TroopTier::T1),
            2 => Some(TroopTier::T2),
            3 => Some(TroopTier::T3),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TierRepr {
    Level(u8),
    Name(String),
}

impl TryFrom<TierRepr> for TroopTier {
    type Error = HexError;

    fn try_from(repr: TierRepr) -> Result<Self, Self::Error> {
        let level = match repr {
            TierRepr::Level(level) => Some(level),
            TierRepr::Name(name) => name
                .trim()
                .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'T'))
                .and_then(|n| n.parse().ok()),
        };
        level
            .and_then(TroopTier::from_level)
            .ok_or_else(|| HexError::MalformedSnapshot("troop tier must be T1-T3".into()))
    }
}

/// The troops stationed in one explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Troop {
    pub category: TroopCategory,
    pub tier: TroopTier,
    pub count: u64,
    pub stamina: StaminaState,
}
