use glam::Vec2;
use log::debug;

use crate::core::store::SphereStore;

/// Squared center distance below which a pair is treated as coincident.
const DEGENERATE_DISTANCE_SQ: f32 = 1e-12;

/// Contact info shared between the narrow phase and the resolver.
///
/// `normal` points from sphere `b` toward sphere `a`; `depth` is the overlap
/// along that normal at detection time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
    pub normal: Vec2,
    pub depth: f32,
}

/// Deterministic separation axis for coincident centers. Chosen from the
/// pair indices alone so the same degenerate pair always separates along the
/// same axis.
fn fallback_axis(a: usize, b: usize) -> Vec2 {
    if (a + b) % 2 == 0 {
        Vec2::X
    } else {
        Vec2::Y
    }
}

/// Exact overlap test for one candidate pair. Expects `a < b` (the broad
/// phase emits canonical pairs) so a pair is never tested twice in one pass.
pub fn test_pair(store: &SphereStore, a: usize, b: usize) -> Option<Contact> {
    let sphere_a = store.get(a)?;
    let sphere_b = store.get(b)?;

    let delta = sphere_a.position - sphere_b.position;
    let min_distance = sphere_a.radius + sphere_b.radius;
    let distance_sq = delta.length_squared();

    if distance_sq >= min_distance * min_distance {
        return None;
    }

    if distance_sq < DEGENERATE_DISTANCE_SQ {
        // Coincident centers: recoverable, resolved along a fixed axis
        // instead of dividing by zero.
        debug!("coincident centers for spheres {a} and {b}, using fallback axis");
        return Some(Contact {
            a,
            b,
            normal: fallback_axis(a, b),
            depth: min_distance,
        });
    }

    let distance = distance_sq.sqrt();
    Some(Contact {
        a,
        b,
        normal: delta / distance,
        depth: min_distance - distance,
    })
}

/// Runs the narrow phase over the tick's candidate pairs, appending contacts
/// in the pairs' canonical order.
pub fn generate_contacts(
    store: &SphereStore,
    pairs: &[(usize, usize)],
    contacts: &mut Vec<Contact>,
) {
    contacts.clear();
    for &(a, b) in pairs {
        if let Some(contact) = test_pair(store, a, b) {
            contacts.push(contact);
        }
    }
}
