//! Core types describing simulation bodies and shared data.

pub mod sphere;
pub mod store;
pub mod types;

pub use sphere::Sphere;
pub use store::SphereStore;
pub use types::Boundary;
