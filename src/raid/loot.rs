//! Capacity-constrained loot selection for raids
//!
//! Greedy, largest stacks first. This reproduces the game's own raid
//! settlement, so it is intentionally not an optimal knapsack.

use serde::{Deserialize, Serialize};

use crate::core::config::RaidConfig;
use crate::core::types::{ResourceId, WeightKg};
use crate::raid::resources::{to_chain_amount, CarryCapacity, LootEntry, ResourceBalances};

/// Pick what to steal with `remaining_kg` of spare capacity
///
/// Weightless resources are taken in full; everything else is taken until
/// capacity runs out. Entries that would take nothing are left out.
pub fn select_loot<F>(remaining_kg: WeightKg, candidates: &[LootEntry], weight_of: F) -> Vec<LootEntry>
where
    F: Fn(ResourceId) -> WeightKg,
{
    if remaining_kg == 0 {
        return Vec::new();
    }

    let mut ordered = candidates.to_vec();
    // Stable: equal stacks keep snapshot order
    ordered.sort_by(|a, b| b.amount.cmp(&a.amount));

    let mut remaining = remaining_kg;
    let mut loot = Vec::new();
    for candidate in ordered {
        let unit_weight = weight_of(candidate.resource);
        let take = if unit_weight == 0 {
            candidate.amount
        } else {
            (remaining / unit_weight).min(candidate.amount)
        };

        if take > 0 {
            remaining -= take * unit_weight;
            loot.push(LootEntry {
                resource: candidate.resource,
                amount: take,
            });
        }
    }

    tracing::trace!(remaining_kg, left_kg = remaining, picked = loot.len(), "loot selected");
    loot
}

/// Total carrying weight of a loot list
pub fn loot_weight<F>(loot: &[LootEntry], weight_of: F) -> WeightKg
where
    F: Fn(ResourceId) -> WeightKg,
{
    loot.iter()
        .map(|entry| entry.amount.saturating_mul(weight_of(entry.resource)))
        .fold(0, WeightKg::saturating_add)
}

/// Raid parameters computed from raw snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidPlan {
    pub remaining_kg: WeightKg,
    pub loot: Vec<LootEntry>,
    pub loot_weight_kg: WeightKg,
}

impl RaidPlan {
    /// Loot re-expressed in chain fixed-point amounts, ready for submission
    pub fn chain_amounts(&self, precision: u64) -> Vec<(ResourceId, u128)> {
        self.loot
            .iter()
            .map(|entry| (entry.resource, to_chain_amount(entry.amount, precision)))
            .collect()
    }
}

/// Loot an attacker with `capacity` can take from `defender`
pub fn plan_raid(capacity: &CarryCapacity, defender: &ResourceBalances, config: &RaidConfig) -> RaidPlan {
    let remaining_kg = capacity.remaining_kg(config.weight_precision);
    let candidates = defender.stealable_candidates(config.resource_precision);
    let weight_of = |id| config.weight_of(id);
    let loot = select_loot(remaining_kg, &candidates, weight_of);
    RaidPlan {
        remaining_kg,
        loot_weight_kg: loot_weight(&loot, weight_of),
        loot,
    }
}
