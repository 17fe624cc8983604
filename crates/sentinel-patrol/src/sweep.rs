//! Dwell/sweep finite state machine.
//!
//! Pure functions over `PatrolState`; no ECS dependency.
//!
//! The head waits `rotation_interval_secs`, then turns at
//! `rotation_speed_deg_per_sec` to `initial_yaw ± max_rotation_angle`,
//! alternating sides. The dwell timer keeps counting during a sweep and is
//! cleared when the head arrives, so every dwell starts from zero.

use glam::Quat;

use sentinel_core::components::PatrolState;
use sentinel_core::config::SentryConfig;
use sentinel_core::constants::ROTATION_ARRIVAL_TOLERANCE_DEG;
use sentinel_core::enums::SweepDirection;
use sentinel_core::types::{normalize_degrees, yaw_rotation, Transform};

use crate::rotation::{angle_between, rotate_towards};

/// A sweep that began during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepStart {
    pub direction: SweepDirection,
    /// Target yaw in degrees, `[0, 360)`.
    pub target_yaw_deg: f32,
}

/// Result of advancing the state machine by one step.
#[derive(Debug, Clone, Copy)]
pub struct PatrolUpdate {
    /// Head orientation after the step.
    pub rotation: Quat,
    pub started: Option<SweepStart>,
    pub finished: bool,
}

/// Initial state for a head: idle, facing its spawn orientation,
/// first sweep to the right.
pub fn initial_state(head: &Transform) -> PatrolState {
    PatrolState {
        initial_yaw_deg: head.yaw_degrees(),
        target_rotation: head.rotation,
        rotating: false,
        next_direction: SweepDirection::Right,
        timer_secs: 0.0,
    }
}

/// Yaw extremes `(left, right)` in degrees, not normalized.
pub fn sweep_bounds(state: &PatrolState, config: &SentryConfig) -> (f32, f32) {
    (
        state.initial_yaw_deg - config.max_rotation_angle_deg,
        state.initial_yaw_deg + config.max_rotation_angle_deg,
    )
}

/// Begin a sweep toward the extreme on the `next_direction` side.
///
/// The target is a pure yaw: any pitch or roll the head had is dropped.
pub fn start_rotation(state: &mut PatrolState, config: &SentryConfig) -> SweepStart {
    let direction = state.next_direction;
    let target_yaw = state.initial_yaw_deg + direction.sign() * config.max_rotation_angle_deg;

    state.target_rotation = yaw_rotation(target_yaw);
    state.next_direction = direction.flipped();
    state.rotating = true;

    SweepStart {
        direction,
        target_yaw_deg: normalize_degrees(target_yaw),
    }
}

/// Advance the state machine by `dt` seconds from the head orientation `current`.
pub fn step(
    state: &mut PatrolState,
    current: Quat,
    config: &SentryConfig,
    dt: f32,
) -> PatrolUpdate {
    let dt = dt.max(0.0);
    let mut update = PatrolUpdate {
        rotation: current,
        started: None,
        finished: false,
    };

    state.timer_secs += dt;
    if state.timer_secs >= config.rotation_interval_secs && !state.rotating {
        update.started = Some(start_rotation(state, config));
    }

    if state.rotating {
        update.rotation = rotate_towards(
            current,
            state.target_rotation,
            config.rotation_speed_deg_per_sec * dt,
        );

        if angle_between(update.rotation, state.target_rotation) < ROTATION_ARRIVAL_TOLERANCE_DEG {
            state.rotating = false;
            state.timer_secs = 0.0;
            update.finished = true;
        }
    }

    update
}
