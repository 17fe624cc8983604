//! Cleanup system: removes sentries together with their vision cones.

use hecs::{Entity, World};

use sentinel_core::components::Sentry;

use crate::vision_cone::{ConeLink, VisionCone};

/// Despawn the sentry with `sentry_id` and its cone.
/// Returns false if no such sentry exists.
pub fn despawn_sentry(
    world: &mut World,
    sentry_id: u32,
    despawn_buffer: &mut Vec<Entity>,
) -> bool {
    despawn_buffer.clear();

    for (entity, (sentry, link)) in world.query_mut::<(&Sentry, Option<&ConeLink>)>() {
        if sentry.sentry_id == sentry_id {
            despawn_buffer.push(entity);
            if let Some(link) = link {
                despawn_buffer.push(link.0);
            }
        }
    }

    // Cones whose link was lost still carry the sentry id.
    for (entity, cone) in world.query_mut::<&VisionCone>() {
        if cone.sentry_id == sentry_id && !despawn_buffer.contains(&entity) {
            despawn_buffer.push(entity);
        }
    }

    let found = !despawn_buffer.is_empty();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    found
}
