//! Resource balances and carrying capacity in the chain's fixed-point units

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::types::{ResourceId, WeightKg};

/// Whole units from a fixed-point chain amount (floor)
pub fn to_whole_units(raw: u128, precision: u64) -> u64 {
    let units = raw / u128::from(precision.max(1));
    u64::try_from(units).unwrap_or(u64::MAX)
}

/// Fixed-point chain amount from whole units
pub fn to_chain_amount(units: u64, precision: u64) -> u128 {
    u128::from(units).saturating_mul(u128::from(precision))
}

/// Chain amounts arrive as JSON numbers, decimal strings or `0x` hex strings
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u128),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => {
            let text = text.trim();
            let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
                Some(hex) => u128::from_str_radix(hex, 16),
                None => text.parse::<u128>(),
            };
            parsed.map_err(|e| serde::de::Error::custom(format!("bad amount {text:?}: {e}")))
        }
    }
}

/// Current load and maximum load of an entity, fixed-point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarryCapacity {
    #[serde(deserialize_with = "deserialize_amount", alias = "current")]
    pub current_weight: u128,
    #[serde(deserialize_with = "deserialize_amount", alias = "capacity")]
    pub max_capacity: u128,
}

impl CarryCapacity {
    /// Spare capacity in whole kilograms; overloaded entities have none
    pub fn remaining_kg(&self, weight_precision: u64) -> WeightKg {
        to_whole_units(
            self.max_capacity.saturating_sub(self.current_weight),
            weight_precision,
        )
    }
}

/// One resource balance, fixed-point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBalance {
    #[serde(alias = "resource_id", alias = "resourceId")]
    pub resource: ResourceId,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: u128,
}

/// Candidate stack for loot selection, in whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEntry {
    pub resource: ResourceId,
    pub amount: u64,
}

/// Balances held by one entity, in snapshot order
///
/// Deserializes from a list of balances or from a `{ "<resource id>": amount }`
/// map; map entries come out ordered by resource id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceBalances {
    pub balances: Vec<ResourceBalance>,
}

#[derive(Deserialize)]
struct ChainAmount(#[serde(deserialize_with = "deserialize_amount")] u128);

#[derive(Deserialize)]
#[serde(untagged)]
enum BalancesRepr {
    List(Vec<ResourceBalance>),
    Map(BTreeMap<String, ChainAmount>),
}

impl<'de> Deserialize<'de> for ResourceBalances {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let balances = match BalancesRepr::deserialize(deserializer)? {
            BalancesRepr::List(balances) => balances,
            BalancesRepr::Map(map) => {
                let mut balances = map
                    .into_iter()
                    .map(|(id, ChainAmount(amount))| {
                        let id = id.trim().parse::<u16>().map_err(|e| {
                            serde::de::Error::custom(format!("bad resource id {id:?}: {e}"))
                        })?;
                        Ok(ResourceBalance {
                            resource: ResourceId(id),
                            amount,
                        })
                    })
                    .collect::<Result<Vec<_>, D::Error>>()?;
                balances.sort_by_key(|b| b.resource);
                balances
            }
        };
        Ok(Self { balances })
    }
}

impl ResourceBalances {
    pub fn new(balances: Vec<ResourceBalance>) -> Self {
        Self { balances }
    }

    pub fn balance_of(&self, resource: ResourceId) -> u128 {
        self.balances
            .iter()
            .filter(|b| b.resource == resource)
            .map(|b| b.amount)
            .next_back()
            .unwrap_or(0)
    }

    /// Balances converted to whole units, in snapshot order
    pub fn stealable_candidates(&self, precision: u64) -> Vec<LootEntry> {
        self.balances
            .iter()
            .map(|b| LootEntry {
                resource: b.resource,
                amount: to_whole_units(b.amount, precision),
            })
            .collect()
    }
}
