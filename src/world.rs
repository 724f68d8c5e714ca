use std::time::Instant;

use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    collision::{broadphase::BroadPhase, narrowphase, narrowphase::Contact},
    config::{SimulationConfig, SphereSet, PLACEMENT_ATTEMPTS_PER_SPHERE},
    core::{sphere::Sphere, store::SphereStore, types::Boundary},
    dynamics::{boundary::WallConstraint, integrator::Integrator, solver::ContactSolver},
    error::{ConfigError, StepError},
    utils::{
        logging::{warn_if_step_budget_exceeded, ScopedTimer},
        profiling::{SectionTimer, StepProfiler},
    },
};

/// Scheduler state. Halted is terminal; there is no resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimState {
    Uninitialized,
    Running,
    Halted,
}

/// Read-only view of one sphere, consumed by rendering or logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereState {
    pub position: Vec2,
    pub radius: f32,
    pub color_index: u32,
}

/// Immutable per-step emission: every sphere in index order plus the number
/// of completed steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub step: u64,
    pub spheres: Vec<SphereState>,
}

/// Central simulation container orchestrating all subsystems.
///
/// The world is the sole mutable aggregate: spheres are owned here
/// exclusively, external consumers only ever see [`Snapshot`] values, and
/// the step pipeline runs strictly sequentially so that identical initial
/// configurations produce bit-for-bit identical trajectories.
pub struct World {
    store: SphereStore,
    integrator: Integrator,
    broadphase: BroadPhase,
    solver: ContactSolver,
    walls: WallConstraint,
    dt: f32,
    substeps: u32,
    state: SimState,
    stop_requested: bool,
    step_count: u64,
    last_snapshot: Snapshot,
    profiler: StepProfiler,
    contacts: Vec<Contact>,
}

impl World {
    /// Validates the configuration, places the initial population, and
    /// returns a Running world. The population is sealed afterwards: spheres
    /// are never added or removed mid-run.
    pub fn initialize(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let store = match &config.spheres {
            SphereSet::Explicit(inits) => {
                let mut store = SphereStore::with_capacity(inits.len());
                for init in inits {
                    let mass = init.mass.unwrap_or_else(|| config.derived_mass(init.radius));
                    let mut sphere = Sphere::new(
                        init.position,
                        init.radius,
                        mass,
                        init.restitution.unwrap_or(config.restitution),
                        init.color_index,
                    );
                    sphere.set_velocity(init.velocity, config.dt);
                    store.push(sphere);
                }
                store
            }
            SphereSet::Seeded { count, radius_range } => {
                Self::place_seeded(&config, *count, *radius_range)?
            }
        };

        // Cell size is fixed once: radii are immutable, so 2 * max_radius
        // holds for the whole run.
        let cell_size = (2.0 * store.max_radius()).max(1.0);

        let mut world = Self {
            integrator: Integrator::new(config.dt, config.gravity),
            broadphase: BroadPhase::new(cell_size),
            solver: ContactSolver::new(),
            walls: WallConstraint::new(config.boundary, config.wall_restitution),
            dt: config.dt,
            substeps: config.substeps,
            state: SimState::Uninitialized,
            stop_requested: false,
            step_count: 0,
            last_snapshot: Snapshot {
                step: 0,
                spheres: Vec::new(),
            },
            profiler: StepProfiler::default(),
            contacts: Vec::new(),
            store,
        };
        world.last_snapshot = world.snapshot();
        world.state = SimState::Running;
        log::info!(
            "initialized world: {} spheres, dt {}, {} substeps, cell size {}",
            world.store.len(),
            world.dt,
            world.substeps,
            cell_size
        );
        Ok(world)
    }

    fn place_seeded(
        config: &SimulationConfig,
        count: usize,
        radius_range: (f32, f32),
    ) -> Result<SphereStore, ConfigError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut store = SphereStore::with_capacity(count);
        let bounds = config.boundary;

        for index in 0..count {
            let radius = rng.gen_range(radius_range.0..=radius_range.1);
            let mut placed = false;

            for _ in 0..PLACEMENT_ATTEMPTS_PER_SPHERE {
                let position = Vec2::new(
                    rng.gen_range(bounds.min.x + radius..=bounds.max.x - radius),
                    rng.gen_range(bounds.min.y + radius..=bounds.max.y - radius),
                );

                let overlaps = store.iter().any(|other| {
                    position.distance(other.position)
                        < radius + other.radius + config.overlap_tolerance
                });
                if overlaps {
                    continue;
                }

                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let velocity = Vec2::new(angle.cos(), angle.sin()) * config.initial_speed;
                let mut sphere = Sphere::new(
                    position,
                    radius,
                    config.derived_mass(radius),
                    config.restitution,
                    index as u32,
                );
                sphere.set_velocity(velocity, config.dt);
                store.push(sphere);
                placed = true;
                break;
            }

            if !placed {
                return Err(ConfigError::PlacementFailed {
                    placed: index,
                    requested: count,
                    attempts: PLACEMENT_ATTEMPTS_PER_SPHERE,
                });
            }
        }

        Ok(store)
    }

    /// Advances exactly one fixed tick:
    /// integrate → rebuild grid → (detect + resolve) × substeps → walls →
    /// finiteness check → snapshot.
    ///
    /// A step is always either fully applied or not started: the stop flag is
    /// honored only here, before any mutation, and a numeric fault halts the
    /// world while the previous snapshot stays retrievable.
    pub fn step(&mut self) -> Result<Snapshot, StepError> {
        if self.state == SimState::Halted {
            return Err(StepError::Halted);
        }
        if self.stop_requested {
            log::info!("stop requested, halting at step {}", self.step_count);
            self.state = SimState::Halted;
            return Err(StepError::Halted);
        }

        let step_start = Instant::now();
        let _span = ScopedTimer::new("world::step");
        self.profiler.reset();
        self.profiler.sphere_count = self.store.len();

        {
            let _timer = SectionTimer::new(&mut self.profiler.integrator_time);
            self.integrator.step(&mut self.store);
        }

        let pairs = {
            let _timer = SectionTimer::new(&mut self.profiler.broad_phase_time);
            self.broadphase.candidate_pairs(&self.store)
        };
        self.profiler.candidate_pair_count = pairs.len();

        for _ in 0..self.substeps {
            {
                let _timer = SectionTimer::new(&mut self.profiler.narrow_phase_time);
                narrowphase::generate_contacts(&self.store, &pairs, &mut self.contacts);
            }
            self.profiler.contact_count += self.contacts.len();
            {
                let _timer = SectionTimer::new(&mut self.profiler.solver_time);
                self.solver.resolve(&mut self.store, &self.contacts);
            }
        }

        {
            let _timer = SectionTimer::new(&mut self.profiler.boundary_time);
            self.walls.apply(&mut self.store);
        }

        if let Some(index) = self.first_non_finite() {
            log::error!(
                "non-finite state for sphere {index} at step {}, halting",
                self.step_count
            );
            self.state = SimState::Halted;
            return Err(StepError::NumericFault {
                index,
                step: self.step_count,
            });
        }

        self.step_count += 1;
        self.profiler.total_step_time = step_start.elapsed();
        self.profiler.report();
        warn_if_step_budget_exceeded(self.profiler.total_step_time, self.dt * 1000.0);

        self.last_snapshot = self.snapshot();
        Ok(self.last_snapshot.clone())
    }

    /// Builds a read-only snapshot of the current state. Idempotent between
    /// steps.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.step_count,
            spheres: self
                .store
                .iter()
                .map(|sphere| SphereState {
                    position: sphere.position,
                    radius: sphere.radius,
                    color_index: sphere.color_index,
                })
                .collect(),
        }
    }

    /// Snapshot of the last fully applied step (or the initial state).
    /// Remains available after a numeric fault.
    pub fn last_snapshot(&self) -> &Snapshot {
        &self.last_snapshot
    }

    /// Asks the scheduler to halt at the next step boundary. Never interrupts
    /// a step in flight.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn sphere_count(&self) -> usize {
        self.store.len()
    }

    pub fn sphere(&self, index: usize) -> Option<&Sphere> {
        self.store.get(index)
    }

    pub fn spheres(&self) -> &[Sphere] {
        self.store.as_slice()
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn gravity(&self) -> Vec2 {
        self.integrator.gravity
    }

    pub fn boundary(&self) -> Boundary {
        self.walls.bounds
    }

    pub fn profiler(&self) -> &StepProfiler {
        &self.profiler
    }

    /// Enables or disables the parallel integration path.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    /// Collects contacts for the current state without advancing the
    /// simulation. Useful for debugging and tests.
    pub fn collect_contacts(&mut self) -> Vec<Contact> {
        let pairs = self.broadphase.candidate_pairs(&self.store);
        let mut contacts = Vec::new();
        narrowphase::generate_contacts(&self.store, &pairs, &mut contacts);
        contacts
    }

    fn first_non_finite(&self) -> Option<usize> {
        self.store
            .iter()
            .enumerate()
            .find(|(_, sphere)| !sphere.is_finite())
            .map(|(index, _)| index)
    }
}
