//! Per-sentry tuning parameters.
//!
//! Every field has a default so scenario files only need to list overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::LayerMask;

/// Behavior parameters of a single sentry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentryConfig {
    /// Dwell time between sweeps (seconds).
    pub rotation_interval_secs: f32,
    /// Sweep half-amplitude around the initial yaw (degrees).
    pub max_rotation_angle_deg: f32,
    /// Head angular speed (degrees per second).
    pub rotation_speed_deg_per_sec: f32,
    /// Maximum detection distance.
    pub detection_range: f32,
    /// Full cone aperture (degrees).
    pub field_of_view_deg: f32,
    /// Fan segments of the vision cone mesh.
    pub fov_mesh_segments: u32,
    /// Layers the occlusion raycast is allowed to hit.
    pub player_layers: LayerMask,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            rotation_interval_secs: DEFAULT_ROTATION_INTERVAL_SECS,
            max_rotation_angle_deg: DEFAULT_MAX_ROTATION_ANGLE_DEG,
            rotation_speed_deg_per_sec: DEFAULT_ROTATION_SPEED_DEG_PER_SEC,
            detection_range: DEFAULT_DETECTION_RANGE,
            field_of_view_deg: DEFAULT_FIELD_OF_VIEW_DEG,
            fov_mesh_segments: DEFAULT_FOV_MESH_SEGMENTS,
            player_layers: LayerMask::ALL,
        }
    }
}

/// Reasons a `SentryConfig` is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("max_rotation_angle_deg must be in [0, 90), got {0}")]
    SweepAngle(f32),
    #[error("field_of_view_deg must be in (0, 360], got {0}")]
    FieldOfView(f32),
    #[error("fov_mesh_segments must be at least 1")]
    NoSegments,
}

impl SentryConfig {
    /// Half of the cone aperture (degrees).
    pub fn half_fov_deg(&self) -> f32 {
        self.field_of_view_deg * 0.5
    }

    /// Check that every parameter is usable by the patrol, detection and mesh code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("rotation_interval_secs", self.rotation_interval_secs)?;
        positive("rotation_speed_deg_per_sec", self.rotation_speed_deg_per_sec)?;
        positive("detection_range", self.detection_range)?;

        // Extremes 180 degrees or more apart would make the shortest-arc
        // sweep cut through the back of the head instead of the front.
        let sweep = self.max_rotation_angle_deg;
        if !sweep.is_finite() || !(0.0..90.0).contains(&sweep) {
            return Err(ConfigError::SweepAngle(sweep));
        }
        let fov = self.field_of_view_deg;
        if !fov.is_finite() || fov <= 0.0 || fov > 360.0 {
            return Err(ConfigError::FieldOfView(fov));
        }
        if self.fov_mesh_segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
