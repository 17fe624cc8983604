//! Shared enums used across the simulation.

use serde::{Deserialize, Serialize};

/// Run state of the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Active,
    Paused,
}

/// Direction of the next (or current) head sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    /// Toward `initial_yaw + max_rotation_angle`.
    #[default]
    Right,
    /// Toward `initial_yaw - max_rotation_angle`.
    Left,
}

impl SweepDirection {
    pub fn flipped(self) -> Self {
        match self {
            SweepDirection::Right => SweepDirection::Left,
            SweepDirection::Left => SweepDirection::Right,
        }
    }

    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            SweepDirection::Right => 1.0,
            SweepDirection::Left => -1.0,
        }
    }
}

/// Gameplay tag used to identify what a raycast hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[default]
    Untagged,
    Player,
    Obstacle,
}
