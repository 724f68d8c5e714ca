use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use spherique::*;
use std::hint::black_box;

fn prepare_world(sphere_count: usize) -> World {
    World::initialize(SimulationConfig {
        boundary: Boundary::new(Vec2::ZERO, Vec2::splat(400.0)),
        spheres: SphereSet::Seeded {
            count: sphere_count,
            radius_range: (0.5, 1.0),
        },
        initial_speed: 10.0,
        ..Default::default()
    })
    .expect("bench config is valid")
}

fn bench_world_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    for &count in &[128usize, 512, 2048] {
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &count,
            |b, &count| {
                let mut world = prepare_world(count);
                world.set_parallel_enabled(false);
                b.iter(|| black_box(world.step().expect("step")))
            },
        );
        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", count), &count, |b, &count| {
            let mut world = prepare_world(count);
            world.set_parallel_enabled(true);
            b.iter(|| black_box(world.step().expect("step")))
        });
    }
    group.finish();
}

fn bench_broadphase(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadphase");
    for &count in &[512usize, 2048] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut world = prepare_world(count);
            b.iter(|| black_box(world.collect_contacts()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_world_step, bench_broadphase);
criterion_main!(benches);
