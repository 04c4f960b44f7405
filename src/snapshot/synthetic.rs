//! Seeded synthetic snapshots for demos and benchmarks
//!
//! Same seed, same world: the generator only draws from a `ChaCha8Rng`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::types::{EntityId, ResourceId};
use crate::hex::coord::HexCoord;
use crate::map::biome::Biome;
use crate::map::occupier::OccupierType;
use crate::raid::resources::{CarryCapacity, ResourceBalance, ResourceBalances};
use crate::snapshot::{ExplorerSnapshot, ResourceSnapshot, TileScan, WorldSnapshot};
use crate::troops::category::{Troop, TroopCategory, TroopTier};
use crate::troops::stamina::StaminaState;

/// Id given to the generated explorer; other occupants count up from here
pub const SYNTHETIC_EXPLORER_ID: EntityId = EntityId(1000);

const PRECISION: u128 = 1_000_000_000;

fn random_occupier(rng: &mut ChaCha8Rng) -> OccupierType {
    let category = TroopCategory::all()[rng.gen_range(0..3)];
    let tier = TroopTier::from_level(rng.gen_range(1..=3)).unwrap_or(TroopTier::T1);
    match rng.gen_range(0..10) {
        0..=5 => OccupierType::Explorer { category, tier },
        6 => OccupierType::Realm {
            level: rng.gen_range(1..=4),
            wonder: rng.gen_bool(0.1),
        },
        7 => OccupierType::Village,
        8 => OccupierType::FragmentMine,
        _ => OccupierType::Bank,
    }
}

/// Tiles within `radius` of `center`, roughly `explored` of them known and
/// `occupancy` of the known ones occupied. The center tile is always known
/// and holds the generated explorer.
pub fn generate_scan(
    center: HexCoord,
    radius: u32,
    seed: u64,
    explored: f64,
    occupancy: f64,
) -> Vec<TileScan> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let explorer_kind = OccupierType::Explorer {
        category: TroopCategory::Knight,
        tier: TroopTier::T1,
    };
    let mut next_id = SYNTHETIC_EXPLORER_ID.0 + 1;

    let mut tiles = Vec::new();
    for coord in center.hexes_within(radius) {
        let biome = Biome::ALL[rng.gen_range(0..Biome::ALL.len())];
        if coord == center {
            tiles.push(TileScan::occupied(coord, biome, SYNTHETIC_EXPLORER_ID, explorer_kind));
            continue;
        }
        if !rng.gen_bool(explored.clamp(0.0, 1.0)) {
            continue;
        }
        if rng.gen_bool(occupancy.clamp(0.0, 1.0)) {
            let kind = random_occupier(&mut rng);
            tiles.push(TileScan::occupied(coord, biome, EntityId(next_id), kind));
            next_id += 1;
        } else {
            tiles.push(TileScan::empty(coord, biome));
        }
    }
    tiles
}

/// A complete snapshot around `center` with a knight explorer and raid data
pub fn generate_world(center: HexCoord, radius: u32, seed: u64) -> WorldSnapshot {
    let tiles = generate_scan(center, radius, seed, 0.85, 0.08);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let balances = (1..=8u16)
        .map(|id| ResourceBalance {
            resource: ResourceId(id),
            amount: u128::from(rng.gen_range(0..5_000u64)) * PRECISION,
        })
        .collect();

    WorldSnapshot {
        explorer: ExplorerSnapshot {
            id: SYNTHETIC_EXPLORER_ID,
            coord: center,
            troops: Troop {
                category: TroopCategory::Knight,
                tier: TroopTier::T1,
                count: rng.gen_range(100..5_000),
                stamina: StaminaState::new(rng.gen_range(0..=120), 0),
            },
        },
        tiles,
        attacker_resources: Some(ResourceSnapshot {
            entity_id: Some(SYNTHETIC_EXPLORER_ID),
            weight: CarryCapacity {
                current_weight: u128::from(rng.gen_range(0..500u64)) * PRECISION,
                max_capacity: 2_000 * PRECISION,
            },
            balances: ResourceBalances::default(),
        }),
        defender_resources: Some(ResourceSnapshot {
            entity_id: None,
            weight: CarryCapacity::default(),
            balances: ResourceBalances::new(balances),
        }),
    }
}
