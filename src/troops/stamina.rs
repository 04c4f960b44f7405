//! Stamina regeneration and action costs
//!
//! Stamina regenerates a fixed amount per armies tick up to a per-category
//! cap. Resolution is lazy: the stored amount only changes when a caller
//! resolves it at a later tick, mirroring how the game contracts settle it.

use serde::{Deserialize, Serialize};

use crate::core::config::StaminaConfig;
use crate::core::error::{HexError, Result};
use crate::core::types::Tick;
use crate::hex::coord::HexCoord;
use crate::hex::direction::Direction;
use crate::map::biome::{Biome, TerrainClass};
use crate::map::knowledge::TileKnowledgeMap;
use crate::navigation::pathfinding::Path;
use crate::troops::category::TroopCategory;

/// Stored stamina as last written on chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StaminaState {
    pub amount: u64,
    #[serde(alias = "lastUpdatedTick")]
    pub updated_tick: Tick,
}

impl StaminaState {
    pub fn new(amount: u64, updated_tick: Tick) -> Self {
        Self {
            amount,
            updated_tick,
        }
    }
}

/// Stamina resolved at a given tick, with the costs it is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaminaReport {
    pub amount: u64,
    pub updated_tick: Tick,
    pub max_stamina: u64,
    pub travel_cost: u64,
    pub explore_cost: u64,
    pub attack_required: u64,
}

impl StaminaReport {
    pub fn can_travel(&self) -> bool {
        self.amount >= self.travel_cost
    }

    pub fn can_explore(&self) -> bool {
        self.amount >= self.explore_cost
    }

    pub fn can_attack(&self) -> bool {
        self.amount >= self.attack_required
    }

    pub fn state(&self) -> StaminaState {
        StaminaState::new(self.amount, self.updated_tick)
    }
}

/// Sign of the biome bonus per terrain class, indexed
/// `[Knight, Crossbowman, Paladin]`. Negative makes travel cheaper.
///
/// Paladins ride fast over open ground and bog down in forest; crossbowmen
/// are the reverse; knights are unaffected. Water is neutral for everyone.
pub const BIOME_TRAVEL_SIGNS: [(TerrainClass, [i8; 3]); 3] = [
    (TerrainClass::Water, [0, 0, 0]),
    (TerrainClass::Open, [0, 1, -1]),
    (TerrainClass::Dense, [0, -1, 1]),
];

fn category_slot(category: TroopCategory) -> usize {
    match category {
        TroopCategory::Knight => 0,
        TroopCategory::Crossbowman => 1,
        TroopCategory::Paladin => 2,
    }
}

/// Sign of the travel-cost adjustment for a category on a biome
pub fn biome_travel_sign(biome: Biome, category: TroopCategory) -> i8 {
    let class = biome.terrain_class();
    BIOME_TRAVEL_SIGNS
        .iter()
        .find(|(c, _)| *c == class)
        .map_or(0, |(_, signs)| signs[category_slot(category)])
}

/// Stamina resolver bound to one stamina configuration
#[derive(Debug, Clone, Default)]
pub struct StaminaModel {
    config: StaminaConfig,
}

impl StaminaModel {
    pub fn new(config: StaminaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StaminaConfig {
        &self.config
    }

    pub fn max_stamina(&self, category: TroopCategory) -> u64 {
        self.config.for_category(category).max
    }

    /// Stamina at `current_tick` with flat per-hex costs
    ///
    /// A tick at or before the stored tick leaves the state untouched.
    pub fn resolve(
        &self,
        state: StaminaState,
        category: TroopCategory,
        current_tick: Tick,
    ) -> StaminaReport {
        let limits = self.config.for_category(category);
        let (amount, updated_tick) = if current_tick <= state.updated_tick {
            (state.amount, state.updated_tick)
        } else {
            let elapsed = current_tick - state.updated_tick;
            let regenerated = elapsed.saturating_mul(limits.gain_per_tick);
            (
                state.amount.saturating_add(regenerated).min(limits.max),
                current_tick,
            )
        };

        StaminaReport {
            amount,
            updated_tick,
            max_stamina: limits.max,
            travel_cost: self.config.travel_cost,
            explore_cost: self.config.explore_cost,
            attack_required: self.config.attack_required,
        }
    }

    /// [`resolve`](Self::resolve) with the travel cost of entering a tile of
    /// `biome`
    ///
    /// Travel is always charged by the tile being entered, never the tile
    /// left behind; [`path_travel_cost`](Self::path_travel_cost) follows the
    /// same rule.
    pub fn resolve_on(
        &self,
        state: StaminaState,
        category: TroopCategory,
        current_tick: Tick,
        biome: Biome,
    ) -> StaminaReport {
        StaminaReport {
            travel_cost: self.travel_cost_for(category, biome),
            ..self.resolve(state, category, current_tick)
        }
    }

    /// [`resolve`](Self::resolve) with the travel cost of stepping from
    /// `position` toward `direction`; an unexplored destination costs the base
    /// amount
    pub fn resolve_toward(
        &self,
        state: StaminaState,
        category: TroopCategory,
        current_tick: Tick,
        position: HexCoord,
        direction: Direction,
        map: &TileKnowledgeMap,
    ) -> StaminaReport {
        StaminaReport {
            travel_cost: self.step_cost(direction.step_from(position), map, category),
            ..self.resolve(state, category, current_tick)
        }
    }

    /// Stamina needed to enter one hex of `biome`
    pub fn travel_cost_for(&self, category: TroopCategory, biome: Biome) -> u64 {
        let base = self.config.travel_cost;
        let bonus = self.config.biome_bonus;
        match biome_travel_sign(biome, category) {
            s if s < 0 => base.saturating_sub(bonus),
            s if s > 0 => base.saturating_add(bonus),
            _ => base,
        }
    }

    /// Summed travel cost of every step; steps onto unknown tiles use the base cost
    pub fn path_travel_cost(
        &self,
        path: &Path,
        map: &TileKnowledgeMap,
        category: TroopCategory,
    ) -> u64 {
        path.coords()
            .map(|coord| self.step_cost(coord, map, category))
            .sum()
    }

    /// How many leading steps of `path` `amount` stamina pays for
    pub fn affordable_steps(
        &self,
        amount: u64,
        path: &Path,
        map: &TileKnowledgeMap,
        category: TroopCategory,
    ) -> usize {
        let mut spent = 0u64;
        path.coords()
            .take_while(|&coord| {
                spent = spent.saturating_add(self.step_cost(coord, map, category));
                spent <= amount
            })
            .count()
    }

    fn step_cost(
        &self,
        coord: HexCoord,
        map: &TileKnowledgeMap,
        category: TroopCategory,
    ) -> u64 {
        map.get(&coord)
            .map_or(self.config.travel_cost, |tile| {
                self.travel_cost_for(category, tile.biome)
            })
    }

    /// Armies tick containing `unix_secs`
    pub fn tick_at(&self, unix_secs: u64) -> Result<Tick> {
        match self.config.tick_interval_secs {
            Some(interval) if interval > 0 => Ok(unix_secs / interval),
            _ => Err(HexError::MissingTickInterval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CategoryStamina;
    use crate::map::knowledge::Tile;
    use crate::navigation::pathfinding::PathStep;

    fn simple_model() -> StaminaModel {
        let flat = CategoryStamina {
            max: 200,
            gain_per_tick: 1,
        };
        StaminaModel::new(StaminaConfig {
            knight: flat,
            crossbowman: flat,
            paladin: flat,
            ..StaminaConfig::default()
        })
    }

    #[test]
    fn test_regenerates_without_cap() {
        let report = simple_model().resolve(StaminaState::new(100, 10), TroopCategory::Knight, 50);
        assert_eq!(report.amount, 140);
        assert_eq!(report.updated_tick, 50);
        assert_eq!(report.max_stamina, 200);
    }

    #[test]
    fn test_regeneration_caps_at_max() {
        let report = simple_model().resolve(StaminaState::new(190, 0), TroopCategory::Paladin, 500);
        assert_eq!(report.amount, 200);
    }

    #[test]
    fn test_stale_tick_is_noop() {
        let state = StaminaState::new(70, 100);
        let model = simple_model();
        for tick in [0, 99, 100] {
            let report = model.resolve(state, TroopCategory::Crossbowman, tick);
            assert_eq!(report.state(), state);
        }
    }

    #[test]
    fn test_overfull_state_corrected_once_time_passes() {
        let model = simple_model();
        let state = StaminaState::new(250, 5);
        assert_eq!(model.resolve(state, TroopCategory::Knight, 5).amount, 250);
        assert_eq!(model.resolve(state, TroopCategory::Knight, 6).amount, 200);
    }

    #[test]
    fn test_default_costs_and_flags() {
        let model = StaminaModel::default();
        let report = model.resolve(StaminaState::new(25, 0), TroopCategory::Knight, 0);
        assert_eq!(report.travel_cost, 20);
        assert_eq!(report.explore_cost, 30);
        assert!(report.can_travel());
        assert!(!report.can_explore());
        assert!(!report.can_attack());
    }

    #[test]
    fn test_biome_adjusted_travel_cost() {
        let model = StaminaModel::default();
        assert_eq!(model.travel_cost_for(TroopCategory::Paladin, Biome::Grassland), 10);
        assert_eq!(model.travel_cost_for(TroopCategory::Paladin, Biome::Taiga), 30);
        assert_eq!(model.travel_cost_for(TroopCategory::Crossbowman, Biome::Grassland), 30);
        assert_eq!(model.travel_cost_for(TroopCategory::Crossbowman, Biome::TropicalRainForest), 10);
        assert_eq!(model.travel_cost_for(TroopCategory::Knight, Biome::Taiga), 20);
        assert_eq!(model.travel_cost_for(TroopCategory::Paladin, Biome::Ocean), 20);

        let report = model.resolve_on(
            StaminaState::new(15, 0),
            TroopCategory::Paladin,
            0,
            Biome::Grassland,
        );
        assert_eq!(report.travel_cost, 10);
        assert!(report.can_travel());
    }

    #[test]
    fn test_bonus_never_negative() {
        let model = StaminaModel::new(StaminaConfig {
            travel_cost: 5,
            biome_bonus: 10,
            ..StaminaConfig::default()
        });
        assert_eq!(model.travel_cost_for(TroopCategory::Paladin, Biome::Grassland), 0);
    }

    #[test]
    fn test_path_costs() {
        let model = StaminaModel::default();
        let steps = [
            (HexCoord::new(1, 0), Biome::Grassland),
            (HexCoord::new(2, 0), Biome::Taiga),
            (HexCoord::new(3, 0), Biome::Grassland),
        ];
        let map = TileKnowledgeMap::from_tiles(steps.iter().map(|&(c, b)| Tile::new(c, b)));
        let path = Path {
            steps: steps
                .iter()
                .map(|&(coord, _)| PathStep {
                    direction: Direction::East,
                    coord,
                })
                .collect(),
        };

        assert_eq!(model.path_travel_cost(&path, &map, TroopCategory::Paladin), 50);
        assert_eq!(model.path_travel_cost(&path, &map, TroopCategory::Knight), 60);
        assert_eq!(model.affordable_steps(45, &path, &map, TroopCategory::Paladin), 2);
        assert_eq!(model.affordable_steps(9, &path, &map, TroopCategory::Paladin), 0);
        assert_eq!(model.affordable_steps(500, &path, &map, TroopCategory::Paladin), 3);
    }

    #[test]
    fn test_single_step_charged_by_destination() {
        let model = StaminaModel::default();
        let from = HexCoord::new(0, 0);
        let into = Direction::East.step_from(from);
        let map = TileKnowledgeMap::from_tiles([
            Tile::new(from, Biome::Grassland),
            Tile::new(into, Biome::Taiga),
        ]);
        let path = Path {
            steps: vec![PathStep {
                direction: Direction::East,
                coord: into,
            }],
        };

        let report = model.resolve_on(StaminaState::new(25, 0), TroopCategory::Paladin, 0, Biome::Taiga);
        assert_eq!(report.travel_cost, 30);
        assert_eq!(model.path_travel_cost(&path, &map, TroopCategory::Paladin), report.travel_cost);
        assert!(!report.can_travel());
        assert_eq!(model.affordable_steps(report.amount, &path, &map, TroopCategory::Paladin), 0);
    }

    #[test]
    fn test_resolve_toward_uses_entered_tile() {
        let model = StaminaModel::default();
        let at = HexCoord::new(0, 0);
        // Standing on open ground does not make a step into forest cheaper
        let map = TileKnowledgeMap::from_tiles([
            Tile::new(at, Biome::Grassland),
            Tile::new(Direction::West.step_from(at), Biome::TropicalRainForest),
        ]);
        let state = StaminaState::new(60, 0);

        let west = model.resolve_toward(state, TroopCategory::Paladin, 0, at, Direction::West, &map);
        assert_eq!(west.travel_cost, 30);
        let unknown = model.resolve_toward(state, TroopCategory::Paladin, 0, at, Direction::East, &map);
        assert_eq!(unknown.travel_cost, 20);
    }

    #[test]
    fn test_tick_at_requires_interval() {
        let model = StaminaModel::default();
        assert!(matches!(model.tick_at(1_000), Err(HexError::MissingTickInterval)));

        let model = StaminaModel::new(StaminaConfig {
            tick_interval_secs: Some(60),
            ..StaminaConfig::default()
        });
        assert_eq!(model.tick_at(1_000).unwrap(), 16);
    }
}
