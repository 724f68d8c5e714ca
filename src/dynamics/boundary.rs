use crate::core::store::SphereStore;
use crate::core::types::Boundary;

/// Keeps every sphere inside the simulation volume.
///
/// After integration and contact resolution, each axis is checked
/// independently: a sphere whose surface crosses a wall is clamped to the
/// wall and its implicit velocity along that axis is negated and damped by
/// the wall restitution. The reflected velocity is written back by
/// reconstructing `previous_position`, matching the resolver's idiom.
#[derive(Debug, Clone, Copy)]
pub struct WallConstraint {
    pub bounds: Boundary,
    /// Wall restitution factor in [0, 1]; may differ from sphere-sphere
    /// restitution.
    pub restitution: f32,
}

impl WallConstraint {
    pub fn new(bounds: Boundary, restitution: f32) -> Self {
        Self { bounds, restitution }
    }

    /// Applies the constraint to every sphere in ascending index order.
    pub fn apply(&self, store: &mut SphereStore) {
        for sphere in store.iter_mut() {
            let mut velocity = sphere.displacement();
            let mut reflected = false;
            let radius = sphere.radius;

            if sphere.position.x - radius < self.bounds.min.x {
                sphere.position.x = self.bounds.min.x + radius;
                velocity.x = -velocity.x * self.restitution;
                reflected = true;
            } else if sphere.position.x + radius > self.bounds.max.x {
                sphere.position.x = self.bounds.max.x - radius;
                velocity.x = -velocity.x * self.restitution;
                reflected = true;
            }

            if sphere.position.y - radius < self.bounds.min.y {
                sphere.position.y = self.bounds.min.y + radius;
                velocity.y = -velocity.y * self.restitution;
                reflected = true;
            } else if sphere.position.y + radius > self.bounds.max.y {
                sphere.position.y = self.bounds.max.y - radius;
                velocity.y = -velocity.y * self.restitution;
                reflected = true;
            }

            if reflected {
                sphere.previous_position = sphere.position - velocity;
            }
        }
    }
}
