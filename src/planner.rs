//! One-shot action suggestion for an explorer
//!
//! Combines the adjacency scan, nearest-occupant routes and the stamina model
//! into a single recommendation. Priority: attack an adjacent occupant, close
//! in on the nearest reachable one, explore an unknown neighbor, or wait.

use serde::{Deserialize, Serialize};

use crate::core::config::NavigationConfig;
use crate::core::types::{EntityId, Tick};
use crate::hex::coord::HexCoord;
use crate::hex::direction::Direction;
use crate::map::knowledge::TileKnowledgeMap;
use crate::navigation::scanner::{adjacent_occupants, nearest_occupants_capped, unexplored_neighbors};
use crate::troops::category::Troop;
use crate::troops::stamina::{StaminaModel, StaminaReport};

/// Why no action was suggested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitReason {
    /// An action is available but stamina does not cover it yet
    LowStamina,
    /// No occupant is reachable and every neighbor is explored
    NothingToDo,
}

/// Suggested next transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionSuggestion {
    Attack {
        direction: Direction,
        target: EntityId,
        coord: HexCoord,
    },
    Move {
        directions: Vec<Direction>,
        destination: HexCoord,
        target: EntityId,
    },
    Explore {
        direction: Direction,
    },
    Wait {
        reason: WaitReason,
    },
}

/// Suggestion plus the stamina it was judged against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub stamina: StaminaReport,
    pub action: ActionSuggestion,
}

pub fn suggest_action(
    position: HexCoord,
    troop: &Troop,
    map: &TileKnowledgeMap,
    model: &StaminaModel,
    tick: Tick,
    navigation: &NavigationConfig,
) -> Decision {
    let stamina = model.resolve(troop.stamina, troop.category, tick);
    let mut blocked_by_stamina = false;

    // Weakest explorer first, then structures; ties stay in direction order
    let mut adjacent = adjacent_occupants(position, map);
    adjacent.sort_by_key(|a| match a.occupant.kind.explorer_profile() {
        Some((_, tier)) => (0, tier.level()),
        None => (1, 0),
    });
    if let Some(target) = adjacent.first() {
        if stamina.can_attack() {
            return Decision {
                stamina,
                action: ActionSuggestion::Attack {
                    direction: target.direction,
                    target: target.occupant.id,
                    coord: target.coord,
                },
            };
        }
        blocked_by_stamina = true;
    }

    let scan = nearest_occupants_capped(
        position,
        map,
        u64::from(navigation.scan_radius),
        navigation.nearest_limit,
        navigation.scan_path_cap,
    );
    for entry in &scan.entries {
        let Some(path) = entry.path.as_ref().filter(|p| !p.is_empty()) else {
            continue;
        };
        // Stop one short: the goal tile itself is occupied
        let approach = path.truncated(path.len() - 1);
        let steps = model.affordable_steps(stamina.amount, &approach, map, troop.category);
        if steps == 0 {
            blocked_by_stamina |= !approach.is_empty();
            continue;
        }
        let route = approach.truncated(steps);
        if let Some(destination) = route.destination() {
            return Decision {
                stamina,
                action: ActionSuggestion::Move {
                    directions: route.directions(),
                    destination,
                    target: entry.occupant.id,
                },
            };
        }
    }

    if let Some(&direction) = unexplored_neighbors(position, map).first() {
        if stamina.can_explore() {
            return Decision {
                stamina,
                action: ActionSuggestion::Explore { direction },
            };
        }
        blocked_by_stamina = true;
    }

    let reason = if blocked_by_stamina {
        WaitReason::LowStamina
    } else {
        WaitReason::NothingToDo
    };
    tracing::debug!(%position, ?reason, amount = stamina.amount, "no action suggested");
    Decision {
        stamina,
        action: ActionSuggestion::Wait { reason },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::biome::Biome;
    use crate::map::knowledge::Tile;
    use crate::map::occupier::OccupierType;
    use crate::troops::category::{TroopCategory, TroopTier};
    use crate::troops::stamina::StaminaState;

    fn troop(amount: u64) -> Troop {
        Troop {
            category: TroopCategory::Knight,
            tier: TroopTier::T1,
            count: 100,
            stamina: StaminaState::new(amount, 10),
        }
    }

    fn enemy() -> OccupierType {
        OccupierType::Explorer {
            category: TroopCategory::Paladin,
            tier: TroopTier::T2,
        }
    }

    fn open_map(radius: u32, occupied: &[(HexCoord, u64, OccupierType)]) -> TileKnowledgeMap {
        HexCoord::new(0, 0)
            .hexes_within(radius)
            .into_iter()
            .map(|c| {
                let tile = Tile::new(c, Biome::Grassland);
                match occupied.iter().find(|(oc, _, _)| *oc == c) {
                    Some(&(_, id, kind)) => tile.with_occupant(EntityId(id), kind),
                    None => tile,
                }
            })
            .collect()
    }

    fn decide(amount: u64, map: &TileKnowledgeMap) -> ActionSuggestion {
        suggest_action(
            HexCoord::new(0, 0),
            &troop(amount),
            map,
            &StaminaModel::default(),
            10,
            &NavigationConfig::default(),
        )
        .action
    }

    #[test]
    fn test_attacks_adjacent_explorer_before_structure() {
        let map = open_map(
            3,
            &[
                (HexCoord::new(1, 0), 1, OccupierType::Village),
                (HexCoord::new(-1, 0), 2, enemy()),
            ],
        );
        assert_eq!(
            decide(100, &map),
            ActionSuggestion::Attack {
                direction: Direction::West,
                target: EntityId(2),
                coord: HexCoord::new(-1, 0),
            }
        );
    }

    #[test]
    fn test_attacks_weakest_adjacent_explorer() {
        let veteran = OccupierType::Explorer {
            category: TroopCategory::Knight,
            tier: TroopTier::T3,
        };
        let recruit = OccupierType::Explorer {
            category: TroopCategory::Crossbowman,
            tier: TroopTier::T1,
        };
        let map = open_map(
            2,
            &[
                (HexCoord::new(1, 0), 1, veteran),
                (HexCoord::new(0, 1), 2, OccupierType::Bank),
                (HexCoord::new(0, -1), 3, recruit),
            ],
        );
        assert_eq!(
            decide(100, &map),
            ActionSuggestion::Attack {
                direction: Direction::SouthWest,
                target: EntityId(3),
                coord: HexCoord::new(0, -1),
            }
        );
    }

    #[test]
    fn test_low_stamina_waits_next_to_enemy() {
        let map = open_map(1, &[(HexCoord::new(1, 0), 2, enemy())]);
        assert_eq!(
            decide(10, &map),
            ActionSuggestion::Wait {
                reason: WaitReason::LowStamina
            }
        );
    }

    #[test]
    fn test_moves_toward_nearest_within_budget() {
        let map = open_map(6, &[(HexCoord::new(5, 0), 9, enemy())]);
        // 50 stamina covers two 20-cost steps of the four-step approach
        assert_eq!(
            decide(50, &map),
            ActionSuggestion::Move {
                directions: vec![Direction::East, Direction::East],
                destination: HexCoord::new(2, 0),
                target: EntityId(9),
            }
        );
    }

    #[test]
    fn test_explores_when_nothing_known() {
        let map = TileKnowledgeMap::from_tiles([
            Tile::new(HexCoord::new(0, 0), Biome::Grassland),
            Tile::new(HexCoord::new(1, 0), Biome::Grassland),
        ]);
        assert_eq!(
            decide(40, &map),
            ActionSuggestion::Explore {
                direction: Direction::NorthEast
            }
        );
    }

    #[test]
    fn test_nothing_to_do() {
        let map = open_map(2, &[]);
        assert_eq!(
            decide(120, &map),
            ActionSuggestion::Wait {
                reason: WaitReason::NothingToDo
            }
        );
    }

    #[test]
    fn test_regeneration_counts_toward_decision() {
        let map = open_map(1, &[(HexCoord::new(1, 0), 2, enemy())]);
        let decision = suggest_action(
            HexCoord::new(0, 0),
            &troop(10),
            &map,
            &StaminaModel::default(),
            11,
            &NavigationConfig::default(),
        );
        assert_eq!(decision.stamina.amount, 30);
        assert!(matches!(decision.action, ActionSuggestion::Attack { .. }));
    }
}
