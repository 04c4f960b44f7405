//! Engine configuration with documented constants
//!
//! Every game constant the engine relies on lives here so it can be checked
//! against (and overridden from) the live world configuration. Values load
//! from TOML; any section left out falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{HexError, Result};
use crate::core::types::{ResourceId, WeightKg};
use crate::troops::category::TroopCategory;

/// Stamina pool limits for one troop category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStamina {
    /// Upper bound on the regenerated amount
    pub max: u64,
    /// Stamina regained per elapsed armies tick
    pub gain_per_tick: u64,
}

/// Stamina rules shared by every explorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    pub knight: CategoryStamina,
    pub crossbowman: CategoryStamina,
    pub paladin: CategoryStamina,

    /// Base stamina spent per hex travelled (before biome adjustment)
    pub travel_cost: u64,

    /// Stamina spent to explore one unexplored adjacent hex
    pub explore_cost: u64,

    /// Magnitude of the biome bonus/penalty applied to `travel_cost`
    ///
    /// The sign comes from the (terrain class, category) table in
    /// `troops::stamina`. A bonus never takes the cost below zero.
    pub biome_bonus: u64,

    /// Minimum stamina an explorer needs to launch an attack
    pub attack_required: u64,

    /// Length of one armies tick in seconds
    ///
    /// Deliberately has no default: deployments have disagreed on this value,
    /// so it must be copied from the live world config before timestamps can
    /// be turned into ticks.
    pub tick_interval_secs: Option<u64>,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            knight: CategoryStamina { max: 120, gain_per_tick: 20 },
            crossbowman: CategoryStamina { max: 120, gain_per_tick: 20 },
            paladin: CategoryStamina { max: 140, gain_per_tick: 20 },
            travel_cost: 20,
            explore_cost: 30,
            biome_bonus: 10,
            attack_required: 30,
            tick_interval_secs: None,
        }
    }
}

impl StaminaConfig {
    pub fn for_category(&self, category: TroopCategory) -> CategoryStamina {
        match category {
            TroopCategory::Knight => self.knight,
            TroopCategory::Crossbowman => self.crossbowman,
            TroopCategory::Paladin => self.paladin,
        }
    }
}

/// Search budgets for planning queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Step budget for paths attached to nearest-occupant results
    pub scan_path_cap: u32,

    /// How many ranked occupants a nearest scan returns
    pub nearest_limit: usize,

    /// Hex radius considered by nearest scans and the renderer
    pub scan_radius: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scan_path_cap: 10,
            nearest_limit: 3,
            scan_radius: 10,
        }
    }
}

/// Per-resource carrying weight override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceWeight {
    pub resource: ResourceId,
    pub kg: WeightKg,
}

/// Fixed-point and weight rules for raids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaidConfig {
    /// Divisor turning on-chain resource balances into whole units
    pub resource_precision: u64,

    /// Divisor turning on-chain weight values into whole kilograms
    pub weight_precision: u64,

    /// Weight used for resources missing from `weights`
    pub default_weight_kg: WeightKg,

    /// Explicit per-resource weights
    pub weights: Vec<ResourceWeight>,
}

/// Lords are the game's currency and never weigh anything
pub const LORDS_RESOURCE_ID: ResourceId = ResourceId(31);

impl Default for RaidConfig {
    fn default() -> Self {
        Self {
            resource_precision: 1_000_000_000,
            weight_precision: 1_000_000_000,
            default_weight_kg: 1,
            weights: vec![ResourceWeight {
                resource: LORDS_RESOURCE_ID,
                kg: 0,
            }],
        }
    }
}

impl RaidConfig {
    /// Carrying weight of one unit of `resource`
    pub fn weight_of(&self, resource: ResourceId) -> WeightKg {
        self.weights
            .iter()
            .rev()
            .find(|w| w.resource == resource)
            .map(|w| w.kg)
            .unwrap_or(self.default_weight_kg)
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub stamina: StaminaConfig,
    pub navigation: NavigationConfig,
    pub raid: RaidConfig,
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let s = &self.stamina;
        for category in TroopCategory::all() {
            if s.for_category(category).max == 0 {
                return Err(HexError::InvalidConfig(format!(
                    "{category:?} max stamina must be positive"
                )));
            }
        }

        let largest_max = TroopCategory::all()
            .into_iter()
            .map(|c| s.for_category(c).max)
            .max()
            .unwrap_or(0);
        if s.travel_cost > largest_max || s.explore_cost > largest_max {
            return Err(HexError::InvalidConfig(format!(
                "travel_cost ({}) and explore_cost ({}) must not exceed the largest max stamina ({})",
                s.travel_cost, s.explore_cost, largest_max
            )));
        }

        if s.tick_interval_secs == Some(0) {
            return Err(HexError::InvalidConfig(
                "tick_interval_secs must be positive when set".into(),
            ));
        }

        if self.raid.resource_precision == 0 || self.raid.weight_precision == 0 {
            return Err(HexError::InvalidConfig(
                "precision divisors must be positive".into(),
            ));
        }

        if self.navigation.nearest_limit == 0 {
            return Err(HexError::InvalidConfig(
                "nearest_limit must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Load and validate a config from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    EngineConfig::from_toml_str(&contents)
}
