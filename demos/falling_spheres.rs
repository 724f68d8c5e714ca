use spherique::*;

fn main() {
    let total_steps = 600;
    let mut world = World::initialize(SimulationConfig {
        boundary: Boundary::new(Vec2::ZERO, Vec2::splat(100.0)),
        spheres: SphereSet::Seeded {
            count: 200,
            radius_range: (0.5, 2.8),
        },
        initial_speed: 40.0,
        seed: 42,
        ..Default::default()
    })
    .expect("valid configuration");

    for step in 1..=total_steps {
        world.step().expect("step");
        if step % 100 == 0 {
            println!("Calculated {step}/{total_steps}");
        }
    }

    let snapshot = world.snapshot();
    println!(
        "Finished: {} spheres after {} steps",
        snapshot.spheres.len(),
        snapshot.step
    );
    for state in snapshot.spheres.iter().take(5) {
        println!(
            "  sphere {} at ({:.2}, {:.2}), radius {:.2}",
            state.color_index, state.position.x, state.position.y, state.radius
        );
    }
}
