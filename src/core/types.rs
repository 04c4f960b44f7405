//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// On-chain entity identifier (explorers, realms, villages, banks, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resource type identifier as used by the game contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u16);

/// Armies tick counter (game time unit for stamina)
pub type Tick = u64;

/// Whole kilograms of carrying weight
pub type WeightKg = u64;
