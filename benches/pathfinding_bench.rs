//! Benchmarks for the per-decision hot path: A* routing and nearest scans.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hex_raider::core::config::NavigationConfig;
use hex_raider::hex::HexCoord;
use hex_raider::navigation::{find_path, nearest_occupants_capped};
use hex_raider::planner::suggest_action;
use hex_raider::snapshot::synthetic::generate_world;
use hex_raider::troops::StaminaModel;

fn bench_find_path(c: &mut Criterion) {
    let center = HexCoord::new(0, 0);
    let world = generate_world(center, 12, 42);
    let map = world.knowledge_map().expect("synthetic world is well formed");
    let goal = HexCoord::new(8, 7);

    c.bench_function("find_path_r12", |b| {
        b.iter(|| find_path(black_box(center), black_box(goal), &map, black_box(20)))
    });
}

fn bench_nearest_scan(c: &mut Criterion) {
    let center = HexCoord::new(0, 0);
    let world = generate_world(center, 12, 7);
    let map = world.knowledge_map().expect("synthetic world is well formed");

    c.bench_function("nearest_occupants_r12", |b| {
        b.iter(|| nearest_occupants_capped(black_box(center), &map, 12, 3, 10))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let world = generate_world(HexCoord::new(0, 0), 10, 3);
    let map = world.knowledge_map().expect("synthetic world is well formed");
    let model = StaminaModel::default();
    let navigation = NavigationConfig::default();

    c.bench_function("suggest_action_r10", |b| {
        b.iter(|| {
            let decision = suggest_action(
                world.position(),
                &world.explorer.troops,
                &map,
                &model,
                black_box(5),
                &navigation,
            );
            black_box(decision)
        })
    });
}

criterion_group!(benches, bench_find_path, bench_nearest_scan, bench_suggest);
criterion_main!(benches);
