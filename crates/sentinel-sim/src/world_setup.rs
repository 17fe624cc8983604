//! Entity spawn factories for populating the simulation world.
//!
//! Creates sentries (with their vision cone child), players, and
//! obstacles with the appropriate component bundles.

use hecs::{Entity, World};
use log::info;

use sentinel_core::components::*;
use sentinel_core::config::ConfigError;
use sentinel_core::enums::Tag;
use sentinel_core::types::{yaw_rotation, Transform, Velocity};
use sentinel_occlusion::{Collider, Shape};
use sentinel_patrol::sweep;

use crate::scenario::{ObstacleDef, PlayerDef, PlayerError, SentryDef};
use crate::vision_cone::{ConeLink, ConeMesh, VisionCone};

/// Head transform for a sentry definition. Without a head, the mount rotates.
pub fn head_transform(def: &SentryDef) -> Transform {
    let mount = Transform::from_yaw(def.position, def.yaw_deg);
    match def.head {
        Some(head) => Transform::new(
            mount.transform_point(head.offset),
            mount.rotation * yaw_rotation(head.yaw_deg),
        ),
        None => mount,
    }
}

/// Spawn a sentry and its vision cone. Returns the sentry entity.
pub fn spawn_sentry(
    world: &mut World,
    sentry_id: u32,
    def: &SentryDef,
) -> Result<Entity, ConfigError> {
    def.config.validate()?;

    let mount = Transform::from_yaw(def.position, def.yaw_deg);
    let head = head_transform(def);
    let patrol = sweep::initial_state(&head);

    let sentry = world.spawn((
        Sentry {
            sentry_id,
            config: def.config.clone(),
        },
        Mount(mount),
        head,
        patrol,
    ));
    if let Some(collider) = def.collider {
        let _ = world.insert(sentry, (collider, Tag::Untagged));
    }

    let cone = world.spawn((
        VisionCone {
            sentry_id,
            mesh: ConeMesh::from_config(&def.config),
        },
        head,
    ));
    let _ = world.insert_one(sentry, ConeLink(cone));

    info!(
        "sentry {sentry_id} spawned at {} facing {:.1} deg",
        head.position,
        patrol.initial_yaw_deg
    );
    Ok(sentry)
}

/// Spawn a player with a sphere collider.
pub fn spawn_player(world: &mut World, def: &PlayerDef) -> Result<Entity, PlayerError> {
    def.validate()?;

    let player = world.spawn((
        Player,
        Tag::Player,
        Transform::from_yaw(def.position, 0.0),
        Velocity(def.velocity),
        Collider {
            shape: Shape::Sphere { radius: def.radius },
            layer: def.layer,
        },
    ));
    if let Some(wander) = def.wander {
        let _ = world.insert_one(
            player,
            Wander {
                min: wander.min,
                max: wander.max,
                speed: wander.speed,
                waypoint: None,
            },
        );
    }
    Ok(player)
}

/// Spawn a static occluder.
pub fn spawn_obstacle(world: &mut World, def: &ObstacleDef) -> Entity {
    world.spawn((
        Obstacle,
        Tag::Obstacle,
        Transform::from_yaw(def.position, 0.0),
        def.collider(),
    ))
}
