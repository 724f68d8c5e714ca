//! Simulation defaults and the explicit configuration record.
//!
//! Every tunable the engine accepts is enumerated here and validated once at
//! startup; there is no ambient global configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::Boundary;
use crate::error::ConfigError;

/// Default gravity vector (Y-up).
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, -9.81];

/// Default fixed timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Number of detect/resolve substeps performed per tick.
pub const DEFAULT_SUBSTEPS: u32 = 8;

/// Default sphere-sphere restitution.
pub const DEFAULT_RESTITUTION: f32 = 0.95;

/// Default wall restitution (energy retained on a wall bounce).
pub const DEFAULT_WALL_RESTITUTION: f32 = 0.9;

/// Area density used to derive mass from radius when none is given.
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Largest startup overlap accepted before initialization fails.
pub const DEFAULT_OVERLAP_TOLERANCE: f32 = 1e-3;

/// Rejection-sampling attempts per sphere during seeded placement.
pub const PLACEMENT_ATTEMPTS_PER_SPHERE: usize = 128;

/// Initial state of one explicitly placed sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereInit {
    pub position: Vec2,
    /// Initial velocity; encoded into the Verlet state as
    /// `previous_position = position - velocity * dt`.
    pub velocity: Vec2,
    pub radius: f32,
    /// Explicit mass; derived from radius and density when `None`.
    pub mass: Option<f32>,
    /// Per-sphere restitution; falls back to the world default when `None`.
    pub restitution: Option<f32>,
    pub color_index: u32,
}

impl SphereInit {
    pub fn at_rest(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            mass: None,
            restitution: None,
            color_index: 0,
        }
    }
}

/// How the initial population is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SphereSet {
    /// Caller supplies every sphere.
    Explicit(Vec<SphereInit>),
    /// Seeded random placement: radii drawn uniformly from the range,
    /// positions rejection-sampled until overlap-free.
    Seeded { count: usize, radius_range: (f32, f32) },
}

impl Default for SphereSet {
    fn default() -> Self {
        Self::Seeded {
            count: 0,
            radius_range: (0.5, 2.8),
        }
    }
}

/// Complete, validated-once description of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub boundary: Boundary,
    pub gravity: Vec2,
    /// Fixed timestep in seconds.
    pub dt: f32,
    /// Detect/resolve passes per tick.
    pub substeps: u32,
    /// Default sphere-sphere restitution in [0, 1].
    pub restitution: f32,
    /// Wall restitution in [0, 1].
    pub wall_restitution: f32,
    /// Area density for radius-derived masses.
    pub density: f32,
    /// Largest tolerated startup overlap.
    pub overlap_tolerance: f32,
    /// Launch speed for seeded spheres (random direction under the seed).
    pub initial_speed: f32,
    /// Seed for placement and launch directions.
    pub seed: u64,
    pub spheres: SphereSet,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            boundary: Boundary::default(),
            gravity: Vec2::from_slice(&DEFAULT_GRAVITY),
            dt: DEFAULT_TIME_STEP,
            substeps: DEFAULT_SUBSTEPS,
            restitution: DEFAULT_RESTITUTION,
            wall_restitution: DEFAULT_WALL_RESTITUTION,
            density: DEFAULT_DENSITY,
            overlap_tolerance: DEFAULT_OVERLAP_TOLERANCE,
            initial_speed: 0.0,
            seed: 42,
            spheres: SphereSet::default(),
        }
    }
}

impl SimulationConfig {
    /// Mass derived from radius via area density.
    pub fn derived_mass(&self, radius: f32) -> f32 {
        self.density * std::f32::consts::PI * radius * radius
    }

    /// Checks every invariant the scheduler relies on. Called once by
    /// `World::initialize`; the simulation never starts on failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimestep(self.dt));
        }
        if self.substeps == 0 {
            return Err(ConfigError::InvalidSubsteps);
        }
        if !self.boundary.is_valid() {
            return Err(ConfigError::InvalidBoundary {
                min: self.boundary.min.to_array(),
                max: self.boundary.max.to_array(),
            });
        }
        for value in [self.restitution, self.wall_restitution] {
            if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                return Err(ConfigError::InvalidRestitution { value });
            }
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::InvalidDensity(self.density));
        }

        match &self.spheres {
            SphereSet::Seeded { count: _, radius_range } => {
                let (min_r, max_r) = *radius_range;
                if !(min_r.is_finite() && max_r.is_finite() && min_r > 0.0 && min_r <= max_r) {
                    return Err(ConfigError::InvalidRadius {
                        index: 0,
                        radius: min_r.min(max_r),
                    });
                }
                if !self.boundary.admits_radius(max_r) {
                    return Err(ConfigError::OutOfBounds {
                        index: 0,
                        radius: max_r,
                    });
                }
            }
            SphereSet::Explicit(inits) => self.validate_explicit(inits)?,
        }

        Ok(())
    }

    fn validate_explicit(&self, inits: &[SphereInit]) -> Result<(), ConfigError> {
        for (index, init) in inits.iter().enumerate() {
            if !(init.radius.is_finite() && init.radius > 0.0) {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: init.radius,
                });
            }
            let mass = init.mass.unwrap_or_else(|| self.derived_mass(init.radius));
            if !(mass.is_finite() && mass > 0.0) {
                return Err(ConfigError::InvalidMass { index, mass });
            }
            if let Some(value) = init.restitution {
                if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                    return Err(ConfigError::InvalidRestitution { value });
                }
            }
            if !self
                .boundary
                .contains_sphere(init.position, init.radius, self.overlap_tolerance)
            {
                return Err(ConfigError::OutOfBounds {
                    index,
                    radius: init.radius,
                });
            }
        }

        for a in 0..inits.len() {
            for b in (a + 1)..inits.len() {
                let distance = inits[a].position.distance(inits[b].position);
                let depth = inits[a].radius + inits[b].radius - distance;
                if depth > self.overlap_tolerance {
                    return Err(ConfigError::InitialOverlap { a, b, depth });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn non_positive_timestep_is_rejected() {
        let config = SimulationConfig {
            dt: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTimestep(0.0)));
    }

    #[test]
    fn zero_substeps_is_rejected() {
        let config = SimulationConfig {
            substeps: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSubsteps));
    }

    #[test]
    fn overlapping_explicit_spheres_are_rejected() {
        let config = SimulationConfig {
            spheres: SphereSet::Explicit(vec![
                SphereInit::at_rest(Vec2::new(10.0, 10.0), 2.0),
                SphereInit::at_rest(Vec2::new(11.0, 10.0), 2.0),
            ]),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialOverlap { a: 0, b: 1, .. })
        ));
    }

    #[test]
    fn sphere_larger_than_boundary_is_rejected() {
        let config = SimulationConfig {
            spheres: SphereSet::Seeded {
                count: 1,
                radius_range: (60.0, 60.0),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn derived_mass_follows_area_density() {
        let config = SimulationConfig {
            density: 2.0,
            ..Default::default()
        };
        let expected = 2.0 * std::f32::consts::PI * 9.0;
        assert!((config.derived_mass(3.0) - expected).abs() < 1e-4);
    }
}
