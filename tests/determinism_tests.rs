use spherique::*;

fn seeded_config() -> SimulationConfig {
    SimulationConfig {
        spheres: SphereSet::Seeded {
            count: 60,
            radius_range: (0.8, 2.0),
        },
        initial_speed: 12.0,
        seed: 1337,
        ..Default::default()
    }
}

#[test]
fn identical_configs_produce_identical_trajectories() {
    let mut world_a = World::initialize(seeded_config()).expect("valid config");
    let mut world_b = World::initialize(seeded_config()).expect("valid config");

    assert_eq!(world_a.snapshot(), world_b.snapshot());

    for _ in 0..120 {
        let snap_a = world_a.step().expect("step");
        let snap_b = world_b.step().expect("step");
        assert_eq!(snap_a, snap_b, "trajectories diverged");
    }
}

#[test]
fn different_seeds_produce_different_placements() {
    let world_a = World::initialize(seeded_config()).expect("valid config");
    let world_b = World::initialize(SimulationConfig {
        seed: 7,
        ..seeded_config()
    })
    .expect("valid config");

    assert_ne!(world_a.snapshot(), world_b.snapshot());
}

#[test]
fn snapshot_is_idempotent_between_steps() {
    let mut world = World::initialize(seeded_config()).expect("valid config");
    let stepped = world.step().expect("step");

    let first = world.snapshot();
    let second = world.snapshot();
    assert_eq!(first, second);
    assert_eq!(first, stepped);
    assert_eq!(&first, world.last_snapshot());
}

#[test]
fn snapshot_reports_completed_step_count() {
    let mut world = World::initialize(seeded_config()).expect("valid config");
    assert_eq!(world.snapshot().step, 0);

    for expected in 1..=10u64 {
        let snapshot = world.step().expect("step");
        assert_eq!(snapshot.step, expected);
        assert_eq!(world.step_count(), expected);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_integration_matches_sequential() {
    let mut sequential = World::initialize(seeded_config()).expect("valid config");
    let mut parallel = World::initialize(seeded_config()).expect("valid config");
    parallel.set_parallel_enabled(true);
    assert!(parallel.parallel_enabled());

    for _ in 0..60 {
        let snap_a = sequential.step().expect("step");
        let snap_b = parallel.step().expect("step");
        assert_eq!(snap_a, snap_b, "parallel path diverged from sequential");
    }
}
