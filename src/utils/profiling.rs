use std::time::{Duration, Instant};

/// Per-step timing breakdown for the simulation pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepProfiler {
    pub integrator_time: Duration,
    pub broad_phase_time: Duration,
    pub narrow_phase_time: Duration,
    pub solver_time: Duration,
    pub boundary_time: Duration,
    pub total_step_time: Duration,

    pub sphere_count: usize,
    pub candidate_pair_count: usize,
    pub contact_count: usize,
}

impl StepProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_step_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::debug!(
            "step profile: spheres {}, candidate pairs {}, contacts {}",
            self.sphere_count,
            self.candidate_pair_count,
            self.contact_count
        );
        log::debug!(
            "  integrator {:.2} ms, broad {:.2} ms, narrow {:.2} ms, solver {:.2} ms, walls {:.2} ms, total {:.2} ms",
            self.integrator_time.as_secs_f32() * 1000.0,
            self.broad_phase_time.as_secs_f32() * 1000.0,
            self.narrow_phase_time.as_secs_f32() * 1000.0,
            self.solver_time.as_secs_f32() * 1000.0,
            self.boundary_time.as_secs_f32() * 1000.0,
            self.total_step_time.as_secs_f32() * 1000.0,
        );
    }
}

/// Accumulates elapsed time into a profiler field on drop.
pub struct SectionTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> SectionTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for SectionTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
