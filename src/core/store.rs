use crate::core::sphere::Sphere;

/// Contiguous, index-stable storage for every sphere in the simulation.
///
/// The population is fixed at initialization: the store never grows or
/// shrinks during a run, so a plain `usize` index is a stable identity for
/// the lifetime of the world. Iteration order is always ascending index,
/// which pins floating-point summation order and therefore the trajectory.
#[derive(Debug, Default, Clone)]
pub struct SphereStore {
    spheres: Vec<Sphere>,
}

impl SphereStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spheres: Vec::with_capacity(capacity),
        }
    }

    /// Appends a sphere during world construction. Crate-private: the
    /// population is sealed once the scheduler starts running.
    pub(crate) fn push(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sphere> {
        self.spheres.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Sphere> {
        self.spheres.get_mut(index)
    }

    /// Disjoint mutable access to a pair of spheres. Returns `None` when the
    /// indices coincide or either is out of range.
    pub(crate) fn get2_mut(&mut self, a: usize, b: usize) -> Option<(&mut Sphere, &mut Sphere)> {
        if a == b || a >= self.spheres.len() || b >= self.spheres.len() {
            return None;
        }

        let (low, high, flipped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (left, right) = self.spheres.split_at_mut(high);
        let first = &mut left[low];
        let second = &mut right[0];

        if flipped {
            Some((second, first))
        } else {
            Some((first, second))
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sphere> {
        self.spheres.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Sphere> {
        self.spheres.iter_mut()
    }

    pub(crate) fn as_slice(&self) -> &[Sphere] {
        &self.spheres
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Sphere] {
        &mut self.spheres
    }

    /// Largest radius in the store; the broad-phase cell size derives from
    /// this once at startup (radii are immutable).
    pub fn max_radius(&self) -> f32 {
        self.spheres.iter().map(|s| s.radius).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn store_of(count: usize) -> SphereStore {
        let mut store = SphereStore::new();
        for i in 0..count {
            store.push(Sphere::new(
                Vec2::new(i as f32 * 3.0, 0.0),
                1.0 + i as f32 * 0.5,
                1.0,
                0.9,
                i as u32,
            ));
        }
        store
    }

    #[test]
    fn pair_access_is_disjoint_in_both_orders() {
        let mut store = store_of(4);

        let (a, b) = store.get2_mut(1, 3).expect("valid pair");
        assert_eq!(a.color_index, 1);
        assert_eq!(b.color_index, 3);

        let (b, a) = store.get2_mut(3, 1).expect("valid flipped pair");
        assert_eq!(b.color_index, 3);
        assert_eq!(a.color_index, 1);

        assert!(store.get2_mut(2, 2).is_none());
        assert!(store.get2_mut(0, 9).is_none());
    }

    #[test]
    fn max_radius_tracks_largest_sphere() {
        let store = store_of(3);
        assert_eq!(store.max_radius(), 2.0);
        assert_eq!(SphereStore::new().max_radius(), 0.0);
    }
}
