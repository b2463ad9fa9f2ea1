//! Fatal-encounter detection
//!
//! Pure predicates over current positions and radii. A hit is a designed
//! terminal signal, not an error: there is no damage model and no recovery
//! short of a full session re-initialization. The per-frame cost is one
//! linear scan; at pool sizes in the tens to hundreds a spatial index would
//! buy nothing.

use glam::Vec3;

use super::hazards::HazardPool;
use super::state::Observer;

/// Strict sphere-overlap test
#[inline]
pub fn spheres_overlap(a: Vec3, radius_a: f32, b: Vec3, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Scan the pool for the first hazard overlapping the observer.
///
/// Returns the slot index of the first hit, if any. Hazards that were never
/// placed sit far behind the observer and cannot overlap.
pub fn first_collision(observer: &Observer, pool: &HazardPool) -> Option<usize> {
    pool.iter()
        .find(|h| spheres_overlap(observer.pos, observer.radius, h.pos, h.radius))
        .map(|h| h.slot)
}
