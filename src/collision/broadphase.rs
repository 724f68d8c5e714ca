use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::core::store::SphereStore;

/// Uniform grid spatial partitioning used by the broad-phase.
///
/// The grid owns no sphere data, only index lists per cell. It is rebuilt
/// from current positions every step and is never ground truth.
pub struct SpatialGrid {
    cell_size: f32,
    grid: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(f32::EPSILON),
            grid: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn world_to_grid(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// Inserts a sphere into every cell its bounding square overlaps. A body
    /// straddling a cell border lands in each touched cell, which is what
    /// guarantees no colliding pair is missed regardless of cell size.
    pub fn insert(&mut self, index: usize, position: Vec2, radius: f32) {
        let min_cell = self.world_to_grid(position - Vec2::splat(radius));
        let max_cell = self.world_to_grid(position + Vec2::splat(radius));

        for x in min_cell.0..=max_cell.0 {
            for y in min_cell.1..=max_cell.1 {
                self.grid.entry((x, y)).or_default().push(index);
            }
        }
    }

    /// Sphere indices sharing any cell with the queried bounding square,
    /// ascending and deduplicated.
    pub fn query(&self, position: Vec2, radius: f32) -> Vec<usize> {
        let mut results = Vec::new();
        let min_cell = self.world_to_grid(position - Vec2::splat(radius));
        let max_cell = self.world_to_grid(position + Vec2::splat(radius));

        for x in min_cell.0..=max_cell.0 {
            for y in min_cell.1..=max_cell.1 {
                if let Some(indices) = self.grid.get(&(x, y)) {
                    results.extend(indices);
                }
            }
        }

        results.sort_unstable();
        results.dedup();
        results
    }

    /// Rebuilds the grid from current positions. Linear in sphere count.
    pub fn update(&mut self, store: &SphereStore) {
        self.grid.clear();
        for (index, sphere) in store.iter().enumerate() {
            self.insert(index, sphere.position, sphere.radius);
        }
    }
}

/// Broad phase driver returning candidate sphere pairs.
pub struct BroadPhase {
    grid: SpatialGrid,
}

impl BroadPhase {
    pub fn new(cell_size: f32) -> Self {
        Self {
            grid: SpatialGrid::new(cell_size),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.grid.cell_size()
    }

    /// Rebuilds the grid and returns canonical `(a, b)` pairs with `a < b`.
    ///
    /// Outer iteration is ascending sphere index and per-sphere query results
    /// are sorted, so the emitted list is lexicographically ordered. That
    /// ordering is load-bearing: the resolver consumes pairs in this order
    /// and the trajectory must be reproducible run-to-run.
    pub fn candidate_pairs(&mut self, store: &SphereStore) -> Vec<(usize, usize)> {
        self.grid.update(store);

        let mut pairs = Vec::new();
        let mut checked = HashSet::new();

        for (index, sphere) in store.iter().enumerate() {
            for other in self.grid.query(sphere.position, sphere.radius) {
                if other == index {
                    continue;
                }

                let pair_key = if index < other {
                    (index, other)
                } else {
                    (other, index)
                };

                if checked.insert(pair_key) {
                    pairs.push(pair_key);
                }
            }
        }

        pairs
    }
}
