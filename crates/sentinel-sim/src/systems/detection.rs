//! Player detection system.
//!
//! A player is seen when it is within `detection_range` of the head, inside
//! half the field of view of the head's forward axis, and the sight ray
//! (cast toward it through the sentry's `player_layers`) first strikes a
//! collider tagged `Player`.

use glam::{Quat, Vec3};
use hecs::{Entity, World};
use log::info;

use sentinel_core::components::{Player, Sentry};
use sentinel_core::config::SentryConfig;
use sentinel_core::enums::Tag;
use sentinel_core::events::DetectionEvent;
use sentinel_core::state::DebugRay;
use sentinel_core::types::Transform;
use sentinel_occlusion::{raycast, Collider, Ray, RaycastHit};

/// Collider as seen by the sight ray: owner, world center, shape, tag.
pub type SightCollider = (Entity, Vec3, Collider, Tag);

/// A detection and the player entity the sight ray struck.
#[derive(Debug, Clone, Copy)]
pub struct Detection {
    pub player: Entity,
    pub event: DetectionEvent,
}

/// Distance and cone test, without occlusion.
pub fn in_field_of_view(head: &Transform, config: &SentryConfig, target: Vec3) -> bool {
    let to_target = target - head.position;
    let distance = to_target.length();
    if distance <= f32::EPSILON || distance > config.detection_range {
        return false;
    }
    let angle = head.forward().angle_between(to_target).to_degrees();
    angle <= config.half_fov_deg()
}

/// Full check for one sentry against one target position.
///
/// Returns the sight-ray hit when it lands on a `Player`-tagged collider.
/// `owner` is the sentry's own entity, which the ray ignores.
pub fn check_target(
    head: &Transform,
    config: &SentryConfig,
    target: Vec3,
    owner: Entity,
    colliders: &[SightCollider],
) -> Option<RaycastHit<Entity>> {
    if !in_field_of_view(head, config, target) {
        return None;
    }
    let ray = Ray::new(head.position, target - head.position)?;
    let hit = raycast(
        &ray,
        config.detection_range,
        config.player_layers,
        colliders
            .iter()
            .filter(|(entity, ..)| *entity != owner)
            .map(|(entity, center, collider, _)| (*entity, *center, collider)),
    )?;

    let struck_player = colliders
        .iter()
        .any(|(entity, _, _, tag)| *entity == hit.key && *tag == Tag::Player);
    struck_player.then_some(hit)
}

/// Left and right boundary rays of the field of view, `detection_range` long.
pub fn fov_edge_rays(head: &Transform, config: &SentryConfig) -> [DebugRay; 2] {
    let half = config.half_fov_deg().to_radians();
    let reach = head.forward() * config.detection_range;
    let edge = |angle: f32| DebugRay {
        origin: head.position,
        end: head.position + Quat::from_rotation_y(angle) * reach,
    };
    [edge(-half), edge(half)]
}

/// Gather every collider in the world with its tag.
pub fn collect_colliders(world: &World) -> Vec<SightCollider> {
    world
        .query::<(&Transform, &Collider, Option<&Tag>)>()
        .iter()
        .map(|(entity, (transform, collider, tag))| {
            (
                entity,
                transform.position,
                *collider,
                tag.copied().unwrap_or_default(),
            )
        })
        .collect()
}

/// Run detection for every sentry against every player.
///
/// No players is a no-op. Detections are returned in world iteration order,
/// at most one per sentry and struck player.
pub fn run(world: &World, current_tick: u64) -> Vec<Detection> {
    let players: Vec<Vec3> = world
        .query::<(&Player, &Transform)>()
        .iter()
        .map(|(_, (_, t))| t.position)
        .collect();
    if players.is_empty() {
        return Vec::new();
    }

    let colliders = collect_colliders(world);
    let mut detections = Vec::new();

    let mut struck: Vec<Entity> = Vec::new();

    for (entity, (sentry, head)) in world.query::<(&Sentry, &Transform)>().iter() {
        struck.clear();
        for target in &players {
            let Some(hit) = check_target(head, &sentry.config, *target, entity, &colliders) else {
                continue;
            };
            // A player in front of another intercepts both sight rays
            if struck.contains(&hit.key) {
                continue;
            }
            struck.push(hit.key);
            info!(
                "sentry {} detected player at {} ({:.2} away)",
                sentry.sentry_id, hit.point, hit.distance
            );
            detections.push(Detection {
                player: hit.key,
                event: DetectionEvent {
                    sentry_id: sentry.sentry_id,
                    point: hit.point,
                    distance: hit.distance,
                    tick: current_tick,
                },
            });
        }
    }

    detections
}
