//! Simulation dynamics modules: Verlet integration, contact resolution, and
//! wall constraints.

pub mod boundary;
pub mod integrator;
pub mod solver;

pub use boundary::WallConstraint;
pub use integrator::Integrator;
pub use solver::ContactSolver;
