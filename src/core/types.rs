use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned simulation volume. Spheres are kept inside `[min, max]`
/// accounting for their radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::splat(100.0),
        }
    }
}

impl Boundary {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Extent of the volume on each axis.
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    /// True when min lies strictly below max on every axis and both corners
    /// are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x < self.max.x
            && self.min.y < self.max.y
    }

    /// True when a sphere of the given radius has room inside the volume.
    pub fn admits_radius(&self, radius: f32) -> bool {
        let extent = self.extent();
        2.0 * radius <= extent.x && 2.0 * radius <= extent.y
    }

    /// True when a sphere centered at `position` with `radius` lies fully
    /// inside the volume, within `tolerance`.
    pub fn contains_sphere(&self, position: Vec2, radius: f32, tolerance: f32) -> bool {
        position.x - radius >= self.min.x - tolerance
            && position.y - radius >= self.min.y - tolerance
            && position.x + radius <= self.max.x + tolerance
            && position.y + radius <= self.max.y + tolerance
    }
}
