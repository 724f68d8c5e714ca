//! Spherique – deterministic Verlet sphere physics for Rust.
//!
//! This crate advances a fixed population of rigid spherical bodies under
//! gravity inside a bounded volume, resolving pairwise collisions and wall
//! contacts every fixed step. Integration is positional Verlet (the state is
//! the current/previous position pair, with no explicit velocity field), the
//! broad phase is a uniform grid, and the scheduler runs a strictly
//! sequential pipeline so identical initial configurations yield bit-for-bit
//! identical trajectories.
//!
//! Rendering, color mapping, and configuration loading are external
//! collaborators: they consume [`world::Snapshot`] values and never touch
//! sphere state.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{broadphase::BroadPhase, narrowphase::Contact};
pub use config::{SimulationConfig, SphereInit, SphereSet};
pub use self::core::{sphere::Sphere, store::SphereStore, types::Boundary};
pub use dynamics::{boundary::WallConstraint, integrator::Integrator, solver::ContactSolver};
pub use error::{ConfigError, StepError};
pub use world::{SimState, Snapshot, SphereState, World};
