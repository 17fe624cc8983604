//! Snapshot system: queries the ECS world and builds a complete SentryStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use sentinel_core::components::{Mount, PatrolState, Player, Sentry};
use sentinel_core::enums::SimPhase;
use sentinel_core::events::SentryEvent;
use sentinel_core::state::*;
use sentinel_core::types::{SimTime, Transform};

use crate::systems::detection::{fov_edge_rays, Detection};
use crate::vision_cone::{ConeLink, VisionCone};

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    events: Vec<SentryEvent>,
    detections: &[Detection],
) -> SentryStateSnapshot {
    SentryStateSnapshot {
        time: *time,
        phase,
        sentries: build_sentries(world),
        players: build_players(world, detections),
        events,
    }
}

/// Build SentryView list, ordered by sentry id.
fn build_sentries(world: &World) -> Vec<SentryView> {
    let mut query =
        world.query::<(&Sentry, &Mount, &Transform, &PatrolState, Option<&ConeLink>)>();
    let mut sentries: Vec<SentryView> = query
        .iter()
        .map(|(_, (sentry, mount, head, patrol, link))| {
            let (cone_position, cone_vertex_count) = link
                .and_then(|link| {
                    let transform = world.get::<&Transform>(link.0).ok()?;
                    let cone = world.get::<&VisionCone>(link.0).ok()?;
                    Some((transform.position, cone.mesh.vertices.len()))
                })
                .unwrap_or((head.position, 0));

            SentryView {
                sentry_id: sentry.sentry_id,
                mount_position: mount.0.position,
                head_position: head.position,
                yaw_deg: head.yaw_degrees(),
                rotating: patrol.rotating,
                next_direction: patrol.next_direction,
                timer_secs: patrol.timer_secs,
                cone_position,
                cone_vertex_count,
                edge_rays: fov_edge_rays(head, &sentry.config),
            }
        })
        .collect();
    sentries.sort_by_key(|s| s.sentry_id);
    sentries
}

/// Build PlayerView list with the sentries that saw each player this tick.
fn build_players(world: &World, detections: &[Detection]) -> Vec<PlayerView> {
    world
        .query::<(&Player, &Transform)>()
        .iter()
        .map(|(entity, (_, transform))| {
            let mut seen_by: Vec<u32> = detections
                .iter()
                .filter(|d| d.player == entity)
                .map(|d| d.event.sentry_id)
                .collect();
            seen_by.sort_unstable();
            seen_by.dedup();
            PlayerView {
                position: transform.position,
                seen_by,
            }
        })
        .collect()
}
