use spherique::*;

fn main() {
    let dt = 1.0 / 60.0;
    let mut left = SphereInit::at_rest(Vec2::new(17.0, 10.0), 1.0);
    left.velocity = Vec2::new(1.0, 0.0);
    left.restitution = Some(1.0);
    let mut right = SphereInit::at_rest(Vec2::new(23.0, 10.0), 1.0);
    right.velocity = Vec2::new(-1.0, 0.0);
    right.restitution = Some(1.0);
    right.color_index = 1;

    let mut world = World::initialize(SimulationConfig {
        boundary: Boundary::new(Vec2::ZERO, Vec2::new(40.0, 20.0)),
        gravity: Vec2::ZERO,
        dt,
        spheres: SphereSet::Explicit(vec![left, right]),
        ..Default::default()
    })
    .expect("valid configuration");

    println!(
        "before: v_left = {:?}, v_right = {:?}",
        world.sphere(0).unwrap().velocity(dt),
        world.sphere(1).unwrap().velocity(dt)
    );

    for _ in 0..150 {
        world.step().expect("step");
    }

    println!(
        "after:  v_left = {:?}, v_right = {:?}",
        world.sphere(0).unwrap().velocity(dt),
        world.sphere(1).unwrap().velocity(dt)
    );
    println!(
        "center distance = {:.3}",
        world
            .sphere(0)
            .unwrap()
            .position
            .distance(world.sphere(1).unwrap().position)
    );
}
