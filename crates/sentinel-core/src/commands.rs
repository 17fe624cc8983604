//! Commands sent from a controller (harness, game code) to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SentryCommand {
    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f32 },

    // --- Player control ---
    /// Teleport every player to a position.
    MovePlayer { position: Vec3 },
    /// Set the linear velocity of every player.
    SetPlayerVelocity { velocity: Vec3 },

    // --- Sentries ---
    /// Remove a sentry together with its vision cone.
    DespawnSentry { sentry_id: u32 },
}
