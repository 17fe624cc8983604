//! Line-of-sight between two points through a collider set.

use glam::Vec3;

use sentinel_core::types::LayerMask;

use crate::ray::{raycast, Ray};
use crate::shapes::Collider;

/// Surface slack so a collider touching `to` does not count as a blocker.
const LOS_EPSILON: f32 = 1e-3;

/// Check line-of-sight between `from` and `to`.
///
/// Returns true if no collider in `mask` is struck strictly before `to`.
/// Coincident points always see each other. Callers exclude the colliders
/// of the two endpoints themselves.
pub fn has_line_of_sight<'a, K, I>(from: Vec3, to: Vec3, mask: LayerMask, colliders: I) -> bool
where
    I: IntoIterator<Item = (K, Vec3, &'a Collider)>,
{
    let Some(ray) = Ray::new(from, to - from) else {
        return true; // Same point
    };
    let distance = from.distance(to);
    let limit = (distance - LOS_EPSILON).max(0.0);

    raycast(&ray, limit, mask, colliders).is_none()
}
