//! State snapshot: the complete visible state produced after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{SimPhase, SweepDirection};
use crate::events::SentryEvent;
use crate::types::SimTime;

/// Complete simulation state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentryStateSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub sentries: Vec<SentryView>,
    pub players: Vec<PlayerView>,
    pub events: Vec<SentryEvent>,
}

/// A sentry as seen from outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentryView {
    pub sentry_id: u32,
    /// Position of the fixed mount the head sits on.
    pub mount_position: Vec3,
    pub head_position: Vec3,
    /// Current head yaw in degrees, `[0, 360)`.
    pub yaw_deg: f32,
    pub rotating: bool,
    pub next_direction: SweepDirection,
    pub timer_secs: f32,
    /// World-space position of the vision cone apex.
    pub cone_position: Vec3,
    pub cone_vertex_count: usize,
    /// Left and right field-of-view boundary rays for debug drawing.
    pub edge_rays: [DebugRay; 2],
}

/// Line segment for debug overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugRay {
    pub origin: Vec3,
    pub end: Vec3,
}

/// A player entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    /// Ids of the sentries that saw this player during the tick.
    pub seen_by: Vec<u32>,
}
