use crate::collision::narrowphase::Contact;
use crate::core::store::SphereStore;

/// Resolves sphere-sphere contacts with a positional correction followed by
/// an impulse-based velocity response.
///
/// Because the Verlet state carries no explicit velocity, both corrections
/// are expressed through the position pair: the positional push moves
/// `position` and `previous_position` together (velocity unchanged), and the
/// impulse rewrites `previous_position` alone to encode the post-collision
/// velocity. Velocities here are in displacement-per-tick units, which keeps
/// the impulse math independent of `dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSolver;

impl ContactSolver {
    pub fn new() -> Self {
        Self
    }

    /// Combined restitution for a pair. Fixed rule: the less elastic body
    /// wins.
    fn pair_restitution(e_a: f32, e_b: f32) -> f32 {
        e_a.min(e_b)
    }

    /// Resolves one contact. Separation is restored exactly to the sum of
    /// radii, split inversely proportional to mass.
    pub fn resolve_contact(&self, store: &mut SphereStore, contact: &Contact) {
        let Some((a, b)) = store.get2_mut(contact.a, contact.b) else {
            return;
        };

        let total_mass = a.mass + b.mass;
        let weight_a = b.mass / total_mass;
        let weight_b = a.mass / total_mass;

        let correction = contact.normal * contact.depth;
        a.translate(correction * weight_a);
        b.translate(-correction * weight_b);

        let velocity_a = a.displacement();
        let velocity_b = b.displacement();
        let approach = (velocity_a - velocity_b).dot(contact.normal);
        if approach >= 0.0 {
            // Already separating; the positional push is enough.
            return;
        }

        let restitution = Self::pair_restitution(a.restitution, b.restitution);
        let inv_mass = 1.0 / a.mass + 1.0 / b.mass;
        let impulse = -(1.0 + restitution) * approach / inv_mass;

        a.previous_position = a.position - (velocity_a + contact.normal * (impulse / a.mass));
        b.previous_position = b.position - (velocity_b - contact.normal * (impulse / b.mass));
    }

    /// Resolves a batch of contacts in the order given. Callers pass the
    /// narrow phase's canonically ordered list, which pins the relaxation
    /// order for reproducibility.
    pub fn resolve(&self, store: &mut SphereStore, contacts: &[Contact]) {
        for contact in contacts {
            self.resolve_contact(store, contact);
        }
    }
}
