//! Events emitted by the simulation for observers and UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::SweepDirection;

/// A sentry saw a player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionEvent {
    pub sentry_id: u32,
    /// World-space point where the sight ray struck the player.
    pub point: Vec3,
    /// Distance from the head to `point`.
    pub distance: f32,
    pub tick: u64,
}

/// Everything that happened during a tick, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SentryEvent {
    /// A head started sweeping toward a new extreme.
    SweepStarted {
        sentry_id: u32,
        direction: SweepDirection,
        target_yaw_deg: f32,
    },
    /// A head reached its sweep target.
    SweepFinished { sentry_id: u32, yaw_deg: f32 },
    /// A player was detected.
    PlayerDetected(DetectionEvent),
}
