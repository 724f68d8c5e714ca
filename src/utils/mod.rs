//! Utility helpers: scoped logging timers and step profiling.

pub mod logging;
pub mod profiling;

pub use logging::ScopedTimer;
pub use profiling::{SectionTimer, StepProfiler};
