//! Error types for simulation setup and stepping.

use thiserror::Error;

/// Errors raised while validating a [`crate::config::SimulationConfig`] and
/// building the initial world. The simulation never starts when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Timestep must be positive and finite.
    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f32),

    /// At least one resolver substep is required per tick.
    #[error("substeps must be at least 1")]
    InvalidSubsteps,

    /// Boundary volume is degenerate or non-finite.
    #[error("boundary min {min:?} must lie strictly below max {max:?} on every axis")]
    InvalidBoundary {
        min: [f32; 2],
        max: [f32; 2],
    },

    /// A sphere was created with a non-positive radius.
    #[error("sphere {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    /// A sphere was created with a non-positive mass.
    #[error("sphere {index} has non-positive mass {mass}")]
    InvalidMass { index: usize, mass: f32 },

    /// Restitution coefficients live in [0, 1].
    #[error("restitution {value} outside [0, 1]")]
    InvalidRestitution { value: f32 },

    /// Density used to derive mass from radius must be positive.
    #[error("density must be positive, got {0}")]
    InvalidDensity(f32),

    /// A sphere does not fit inside the boundary volume.
    #[error("sphere {index} (radius {radius}) does not fit inside the boundary")]
    OutOfBounds { index: usize, radius: f32 },

    /// Two spheres overlap beyond the configured tolerance at startup.
    #[error("spheres {a} and {b} overlap by {depth} at startup")]
    InitialOverlap { a: usize, b: usize, depth: f32 },

    /// Seeded placement could not find room for the requested population.
    #[error("placed only {placed} of {requested} spheres after {attempts} attempts")]
    PlacementFailed {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
}

/// Errors surfaced by [`crate::world::World::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The scheduler is in its terminal state; no further steps will run.
    #[error("simulation is halted")]
    Halted,

    /// A position or implicit velocity became non-finite during the step.
    /// The world transitions to Halted; the last good snapshot remains
    /// available.
    #[error("non-finite state for sphere {index} at step {step}")]
    NumericFault { index: usize, step: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_render_useful_messages() {
        let err = ConfigError::InvalidTimestep(-0.5);
        assert!(err.to_string().contains("-0.5"));

        let err = ConfigError::InitialOverlap {
            a: 3,
            b: 7,
            depth: 0.25,
        };
        let msg = err.to_string();
        assert!(msg.contains('3') && msg.contains('7'));
    }

    #[test]
    fn step_errors_render_useful_messages() {
        let err = StepError::NumericFault { index: 12, step: 400 };
        let msg = err.to_string();
        assert!(msg.contains("12") && msg.contains("400"));
        assert_eq!(StepError::Halted.to_string(), "simulation is halted");
    }
}
