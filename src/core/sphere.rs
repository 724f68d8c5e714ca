use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One rigid spherical body with Verlet state.
///
/// Velocity is implicit: `(position - previous_position) / dt`. The pair of
/// position fields is the entire kinematic state; there is deliberately no
/// explicit velocity field, since the integration scheme derives its
/// stability from this representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub position: Vec2,
    pub previous_position: Vec2,
    /// Positive, immutable after creation.
    pub radius: f32,
    /// Positive, immutable after creation.
    pub mass: f32,
    /// Collision elasticity in [0, 1].
    pub restitution: f32,
    /// Opaque tag for external rendering; the core never interprets it.
    pub color_index: u32,
}

impl Sphere {
    /// Creates a sphere at rest.
    pub fn new(position: Vec2, radius: f32, mass: f32, restitution: f32, color_index: u32) -> Self {
        Self {
            position,
            previous_position: position,
            radius,
            mass,
            restitution,
            color_index,
        }
    }

    /// Per-step displacement, i.e. velocity in units of distance per tick.
    pub fn displacement(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Implicit velocity for the given fixed timestep.
    pub fn velocity(&self, dt: f32) -> Vec2 {
        self.displacement() / dt
    }

    /// Encodes a velocity into the Verlet state by rewriting
    /// `previous_position`, leaving `position` untouched.
    pub fn set_velocity(&mut self, velocity: Vec2, dt: f32) {
        self.previous_position = self.position - velocity * dt;
    }

    /// Translates the sphere without changing its implicit velocity.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        self.previous_position += delta;
    }

    /// Kinetic energy derived from the implicit velocity.
    pub fn kinetic_energy(&self, dt: f32) -> f32 {
        0.5 * self.mass * self.velocity(dt).length_squared()
    }

    /// True when both state vectors hold finite components.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.previous_position.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn velocity_round_trips_through_previous_position() {
        let dt = 1.0 / 60.0;
        let mut sphere = Sphere::new(Vec2::new(3.0, 4.0), 1.0, 1.0, 0.9, 0);
        sphere.set_velocity(Vec2::new(2.0, -1.0), dt);

        let velocity = sphere.velocity(dt);
        assert_relative_eq!(velocity.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(velocity.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn translate_preserves_implicit_velocity() {
        let dt = 1.0 / 60.0;
        let mut sphere = Sphere::new(Vec2::ZERO, 1.0, 1.0, 0.9, 0);
        sphere.set_velocity(Vec2::new(1.0, 0.5), dt);

        let before = sphere.velocity(dt);
        sphere.translate(Vec2::new(-3.0, 7.0));
        let after = sphere.velocity(dt);

        assert_relative_eq!(before.x, after.x, epsilon = 1e-6);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-6);
    }

    #[test]
    fn kinetic_energy_scales_with_mass() {
        let dt = 0.5;
        let mut light = Sphere::new(Vec2::ZERO, 1.0, 1.0, 1.0, 0);
        let mut heavy = Sphere::new(Vec2::ZERO, 1.0, 4.0, 1.0, 0);
        light.set_velocity(Vec2::new(2.0, 0.0), dt);
        heavy.set_velocity(Vec2::new(2.0, 0.0), dt);

        assert_relative_eq!(heavy.kinetic_energy(dt), 4.0 * light.kinetic_energy(dt));
    }
}
