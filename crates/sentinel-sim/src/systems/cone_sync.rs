//! Keeps each vision cone glued to its sentry head.

use hecs::{Entity, World};

use sentinel_core::types::Transform;

use crate::vision_cone::ConeLink;

/// Copy every head transform onto its linked cone entity.
pub fn run(world: &mut World) {
    let links: Vec<(Entity, Transform)> = world
        .query::<(&ConeLink, &Transform)>()
        .iter()
        .map(|(_, (link, head))| (link.0, *head))
        .collect();

    for (cone, head) in links {
        if let Ok(mut transform) = world.get::<&mut Transform>(cone) {
            *transform = head;
        }
    }
}
