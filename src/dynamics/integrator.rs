use glam::Vec2;

use crate::core::sphere::Sphere;
use crate::core::store::SphereStore;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Verlet integrator stepping every sphere forward under gravity.
///
/// `new_position = position + (position - previous_position) + gravity * dt^2`
/// followed by the shift `previous_position = position; position = new`.
/// There is no explicit velocity field; constant-force stability comes from
/// the position-pair formulation.
#[derive(Debug, Clone)]
pub struct Integrator {
    pub dt: f32,
    pub gravity: Vec2,
    parallel: bool,
}

impl Integrator {
    pub fn new(dt: f32, gravity: Vec2) -> Self {
        Self {
            dt,
            gravity,
            parallel: false,
        }
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    fn advance_sphere(&self, sphere: &mut Sphere) {
        let next =
            sphere.position + sphere.displacement() + self.gravity * (self.dt * self.dt);
        sphere.previous_position = sphere.position;
        sphere.position = next;
    }

    /// Advances every sphere by one tick. The sequential path runs in
    /// ascending index order; the parallel path touches each sphere
    /// independently, so both produce bit-identical state.
    pub fn step(&self, store: &mut SphereStore) {
        #[cfg(feature = "parallel")]
        if self.parallel {
            store
                .as_mut_slice()
                .par_iter_mut()
                .for_each(|sphere| self.advance_sphere(sphere));
            return;
        }

        for sphere in store.iter_mut() {
            self.advance_sphere(sphere);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_velocity_is_preserved_without_gravity() {
        let dt = 1.0 / 60.0;
        let integrator = Integrator::new(dt, Vec2::ZERO);
        let mut store = SphereStore::new();
        let mut sphere = Sphere::new(Vec2::ZERO, 1.0, 1.0, 1.0, 0);
        sphere.set_velocity(Vec2::new(3.0, 0.0), dt);
        store.push(sphere);

        for _ in 0..60 {
            integrator.step(&mut store);
        }

        let sphere = store.get(0).unwrap();
        assert_relative_eq!(sphere.position.x, 3.0, epsilon = 1e-3);
        assert_relative_eq!(sphere.velocity(dt).x, 3.0, epsilon = 1e-3);
    }

    #[test]
    fn free_fall_matches_closed_form() {
        let dt = 1.0 / 120.0;
        let gravity = Vec2::new(0.0, -9.81);
        let integrator = Integrator::new(dt, gravity);
        let mut store = SphereStore::new();
        store.push(Sphere::new(Vec2::new(0.0, 100.0), 1.0, 1.0, 1.0, 0));

        let steps = 120;
        for _ in 0..steps {
            integrator.step(&mut store);
        }

        // y(t) = y0 - g t^2 / 2 after one second; Verlet error is O(dt).
        let sphere = store.get(0).unwrap();
        assert_relative_eq!(sphere.position.y, 100.0 - 9.81 * 0.5, epsilon = 0.1);
    }

    #[test]
    fn integration_order_is_ascending_index() {
        let dt = 1.0 / 60.0;
        let integrator = Integrator::new(dt, Vec2::new(0.0, -9.81));

        let mut store_a = SphereStore::new();
        let mut store_b = SphereStore::new();
        for i in 0..8 {
            let sphere = Sphere::new(Vec2::new(i as f32, 10.0), 0.5, 1.0, 0.9, i as u32);
            store_a.push(sphere);
            store_b.push(sphere);
        }

        integrator.step(&mut store_a);
        integrator.step(&mut store_b);

        for (a, b) in store_a.iter().zip(store_b.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.previous_position, b.previous_position);
        }
    }
}
