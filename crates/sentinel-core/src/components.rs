//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems and in the patrol state machine.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::SentryConfig;
use crate::enums::SweepDirection;
use crate::types::Transform;

/// A stationary security camera. The entity's `Transform` is its head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentry {
    /// Unique id assigned at spawn.
    pub sentry_id: u32,
    pub config: SentryConfig,
}

/// Fixed mount transform the head sits on (does not rotate).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mount(pub Transform);

/// Sweep state of a sentry head.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatrolState {
    /// Yaw of the head at spawn (degrees). Sweeps are centered on it.
    pub initial_yaw_deg: f32,
    /// Orientation the head is rotating toward.
    pub target_rotation: Quat,
    /// True while a sweep is in progress.
    pub rotating: bool,
    /// Direction of the next sweep to start.
    pub next_direction: SweepDirection,
    /// Seconds accumulated toward the next sweep.
    pub timer_secs: f32,
}

/// Marks an entity as a player (the detection target).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as static scenery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

/// Random waypoint wandering inside an axis-aligned region (players only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wander {
    pub min: Vec3,
    pub max: Vec3,
    pub speed: f32,
    /// Current waypoint; picked on first update when absent.
    pub waypoint: Option<Vec3>,
}
