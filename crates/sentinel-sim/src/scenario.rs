//! Scenario definitions: which sentries, players and obstacles to spawn.
//!
//! Scenarios are plain serde data loaded from JSON, plus a built-in demo.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sentinel_core::config::{ConfigError, SentryConfig};
use sentinel_core::constants::{DEFAULT_PLAYER_RADIUS, OBSTACLE_LAYER, PLAYER_LAYER};
use sentinel_occlusion::{Collider, Shape};

/// Errors raised while loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sentry #{index}: {source}")]
    Sentry {
        index: usize,
        #[source]
        source: ConfigError,
    },
    #[error("player #{index}: {source}")]
    Player {
        index: usize,
        #[source]
        source: PlayerError,
    },
}

/// A player definition that cannot be spawned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    #[error("radius must be positive and finite, got {0}")]
    Radius(f32),
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("wander region [{min}, {max}] is empty or unbounded")]
    WanderRegion { min: Vec3, max: Vec3 },
    #[error("wander speed must be finite and non-negative, got {0}")]
    WanderSpeed(f32),
}

/// Complete scenario description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub sentries: Vec<SentryDef>,
    pub players: Vec<PlayerDef>,
    pub obstacles: Vec<ObstacleDef>,
}

/// A sentry to spawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentryDef {
    /// Mount position.
    pub position: Vec3,
    /// Mount yaw (degrees).
    #[serde(default)]
    pub yaw_deg: f32,
    /// Separate rotating head. When absent the mount itself rotates.
    #[serde(default)]
    pub head: Option<HeadDef>,
    #[serde(default)]
    pub config: SentryConfig,
    /// Body collider centered on the head. Ignored by the sentry's own sight ray.
    #[serde(default)]
    pub collider: Option<Collider>,
}

/// Head placement relative to the mount.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadDef {
    /// Offset in mount-local space.
    pub offset: Vec3,
    /// Yaw relative to the mount (degrees).
    pub yaw_deg: f32,
}

/// A player to spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerDef {
    pub position: Vec3,
    pub radius: f32,
    pub layer: u8,
    pub velocity: Vec3,
    pub wander: Option<WanderDef>,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: DEFAULT_PLAYER_RADIUS,
            layer: PLAYER_LAYER,
            velocity: Vec3::ZERO,
            wander: None,
        }
    }
}

/// Random waypoint wandering region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WanderDef {
    pub min: Vec3,
    pub max: Vec3,
    pub speed: f32,
}

/// A static occluder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleDef {
    pub position: Vec3,
    pub shape: Shape,
    #[serde(default = "default_obstacle_layer")]
    pub layer: u8,
}

fn default_obstacle_layer() -> u8 {
    OBSTACLE_LAYER
}

impl PlayerDef {
    /// Check that the player can be spawned and wander without degenerate input.
    pub fn validate(&self) -> Result<(), PlayerError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(PlayerError::Radius(self.radius));
        }
        if !self.position.is_finite() {
            return Err(PlayerError::NotFinite { field: "position" });
        }
        if !self.velocity.is_finite() {
            return Err(PlayerError::NotFinite { field: "velocity" });
        }
        if let Some(wander) = &self.wander {
            wander.validate()?;
        }
        Ok(())
    }
}

impl WanderDef {
    /// The region must be a finite box with `min <= max` whose extent the
    /// waypoint sampler can represent.
    pub fn validate(&self) -> Result<(), PlayerError> {
        let extent = self.max - self.min;
        let bounded = self.min.is_finite()
            && self.max.is_finite()
            && self.min.cmple(self.max).all()
            && (extent * 2.0).is_finite();
        if !bounded {
            return Err(PlayerError::WanderRegion {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(PlayerError::WanderSpeed(self.speed));
        }
        Ok(())
    }
}

impl ObstacleDef {
    pub fn collider(&self) -> Collider {
        Collider {
            shape: self.shape,
            layer: self.layer,
        }
    }
}

impl Scenario {
    /// Parse a scenario from JSON text and validate it.
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Check every definition without spawning anything.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (index, sentry) in self.sentries.iter().enumerate() {
            sentry
                .config
                .validate()
                .map_err(|source| ScenarioError::Sentry { index, source })?;
        }
        for (index, player) in self.players.iter().enumerate() {
            player
                .validate()
                .map_err(|source| ScenarioError::Player { index, source })?;
        }
        Ok(())
    }

    /// "Corridor": two facing cameras guarding a hallway with a pillar,
    /// and one intruder wandering between them.
    pub fn corridor() -> Self {
        let camera = SentryConfig {
            detection_range: 12.0,
            ..Default::default()
        };
        let head = HeadDef {
            offset: Vec3::new(0.0, 2.5, 0.0),
            yaw_deg: 0.0,
        };

        Scenario {
            name: "corridor".to_string(),
            sentries: vec![
                SentryDef {
                    position: Vec3::ZERO,
                    yaw_deg: 0.0,
                    head: Some(head),
                    config: camera.clone(),
                    collider: None,
                },
                SentryDef {
                    position: Vec3::new(0.0, 0.0, 20.0),
                    yaw_deg: 180.0,
                    head: Some(head),
                    config: SentryConfig {
                        rotation_interval_secs: 2.0,
                        ..camera
                    },
                    collider: None,
                },
            ],
            players: vec![PlayerDef {
                position: Vec3::new(-4.0, 1.0, 10.0),
                wander: Some(WanderDef {
                    min: Vec3::new(-6.0, 1.0, 2.0),
                    max: Vec3::new(6.0, 1.0, 18.0),
                    speed: 2.0,
                }),
                ..Default::default()
            }],
            obstacles: vec![
                ObstacleDef {
                    position: Vec3::new(2.0, 1.5, 7.0),
                    shape: Shape::Box {
                        half_extents: Vec3::new(0.5, 1.5, 0.5),
                    },
                    layer: OBSTACLE_LAYER,
                },
                ObstacleDef {
                    position: Vec3::new(-2.0, 1.5, 13.0),
                    shape: Shape::Box {
                        half_extents: Vec3::new(0.5, 1.5, 0.5),
                    },
                    layer: OBSTACLE_LAYER,
                },
            ],
        }
    }
}
