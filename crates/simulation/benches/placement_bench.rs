//! Criterion benchmarks for placement and picking.
//!
//! Benchmarks:
//!   - snap of a world position to a cell
//!   - resolve_ground_hit from a pointer through a perspective camera
//!   - place_or_remove toggling one cell (add + remove per iteration)
//!   - a full headless frame executing a queued click
//!
//! Run with: cargo bench -p simulation --bench placement_bench --features bench

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::buildings::BuildingType;
use simulation::grid::{GridCell, GridConfig};
use simulation::picking::resolve_ground_hit;
use simulation::placement::PlacementController;
use simulation::test_harness::TestCity;

// ---------------------------------------------------------------------------
// Benchmark: snapping and ground hits
// ---------------------------------------------------------------------------

fn bench_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking");
    group.sample_size(1000);

    let config = GridConfig::default();

    group.bench_function("snap", |b| {
        b.iter(|| black_box(config.snap(black_box(2.6), black_box(-3.4))));
    });

    let home = config.camera_home();
    let world_from_view = Transform::from_translation(home)
        .looking_at(Vec3::ZERO, Vec3::Y)
        .compute_matrix();
    let clip_from_view = Mat4::perspective_infinite_reverse_rh(FRAC_PI_4, 16.0 / 9.0, 0.1);
    let viewport = Vec2::new(1280.0, 720.0);

    group.bench_function("resolve_ground_hit", |b| {
        b.iter(|| {
            black_box(resolve_ground_hit(
                black_box(Vec2::new(640.0, 360.0)),
                viewport,
                world_from_view,
                clip_from_view,
                &config,
            ))
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: controller mutations
// ---------------------------------------------------------------------------

fn bench_place_or_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    let mut controller = PlacementController::default();
    controller.select_tool(BuildingType::Commercial);
    let cell = GridCell::new(3, 3);

    group.bench_function("add_then_remove", |b| {
        b.iter(|| {
            black_box(controller.place_or_remove(cell, false));
            black_box(controller.place_or_remove(cell, true));
        });
    });

    group.bench_function("reset_400", |b| {
        b.iter_batched(
            || {
                let mut controller = PlacementController::default();
                for x in -10..10 {
                    for z in -10..10 {
                        controller.place_or_remove(GridCell::new(x, z), false);
                    }
                }
                controller
            },
            |mut controller| black_box(controller.reset_all()),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: full frame through the action pipeline
// ---------------------------------------------------------------------------

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    group.sample_size(100);

    let mut city = TestCity::new();

    group.bench_function("click_toggle_frame", |b| {
        b.iter(|| {
            city.click(0, 0);
            city.modifier_click(0, 0);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_picking, bench_place_or_remove, bench_frame);
criterion_main!(benches);
