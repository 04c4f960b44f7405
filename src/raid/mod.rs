//! Raid economics: fixed-point balances, carrying capacity and loot choice

pub mod loot;
pub mod resources;

pub use loot::{loot_weight, plan_raid, select_loot, RaidPlan};
pub use resources::{
    to_chain_amount, to_whole_units, CarryCapacity, LootEntry, ResourceBalance, ResourceBalances,
};
