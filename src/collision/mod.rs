//! Collision detection modules: broad-phase grid and narrow-phase overlap tests.

pub mod broadphase;
pub mod narrowphase;

pub use broadphase::{BroadPhase, SpatialGrid};
pub use narrowphase::Contact;
