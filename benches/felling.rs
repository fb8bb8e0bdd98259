use criterion::{criterion_group, criterion_main, Criterion, BatchSize, black_box};

use glam::IVec3;

use lumberjack::felling::{destroy, MaterialRules};
use lumberjack::world::{GridWorld, Player};
use lumberjack::{LumberjackConfig, LumberjackPlugin};

/// Trunk of `height` logs on soil with a square leaf canopy and four branches
fn branched_tree(height: u32) -> GridWorld {
    let mut world = GridWorld::new();
    world.set_block(IVec3::ZERO, "tile.dirt");
    world.fill_column(IVec3::Y, height, "tile.log");

    let top = height as i32;
    for dir in [IVec3::X, IVec3::NEG_X, IVec3::Z, IVec3::NEG_Z] {
        for reach in 1..=3 {
            world.set_block(IVec3::new(0, top - 1, 0) + dir * reach, "tile.log");
        }
    }
    for x in -3..=3 {
        for z in -3..=3 {
            for dy in 1..=2 {
                world.set_block(IVec3::new(x, top + dy, z), "tile.leaves");
            }
        }
    }
    world
}

fn bench_destroy_tall_column(c: &mut Criterion) {
    let rules = MaterialRules::default();

    c.bench_function("destroy_column_64", |b| {
        b.iter_batched(
            || branched_tree(64),
            |mut world| destroy(&mut world, &rules, black_box(IVec3::new(0, 2, 0))),
            BatchSize::SmallInput,
        );
    });
}

fn bench_plugin_break(c: &mut Criterion) {
    let plugin = LumberjackPlugin::new(LumberjackConfig::default());

    c.bench_function("plugin_break_branched_16", |b| {
        b.iter_batched(
            || (branched_tree(16), Player::holding("iron_axe")),
            |(mut world, mut player)| {
                plugin.on_block_destroy(&mut world, &mut player, black_box(IVec3::Y))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_destroy_tall_column, bench_plugin_break);
criterion_main!(benches);
