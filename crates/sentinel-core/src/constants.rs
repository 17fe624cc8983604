//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Maximum time scale accepted by `SetTimeScale`.
pub const MAX_TIME_SCALE: f32 = 4.0;

// --- Sentry defaults ---

/// Seconds the head dwells at an extreme before sweeping again.
pub const DEFAULT_ROTATION_INTERVAL_SECS: f32 = 3.0;

/// Sweep half-amplitude around the initial yaw (degrees).
pub const DEFAULT_MAX_ROTATION_ANGLE_DEG: f32 = 45.0;

/// Head angular speed (degrees per second).
pub const DEFAULT_ROTATION_SPEED_DEG_PER_SEC: f32 = 90.0;

/// Detection distance (world units).
pub const DEFAULT_DETECTION_RANGE: f32 = 10.0;

/// Full vision cone aperture (degrees).
pub const DEFAULT_FIELD_OF_VIEW_DEG: f32 = 60.0;

/// Fan segments in the vision cone mesh.
pub const DEFAULT_FOV_MESH_SEGMENTS: u32 = 10;

/// A sweep is finished once the head is within this angle of its target (degrees).
pub const ROTATION_ARRIVAL_TOLERANCE_DEG: f32 = 0.1;

// --- Intruders ---

/// Default collision radius of a player body.
pub const DEFAULT_PLAYER_RADIUS: f32 = 0.5;

/// Distance at which a wandering player considers its waypoint reached.
pub const WANDER_ARRIVAL_RADIUS: f32 = 0.25;

// --- Layers ---

/// Layer assigned to players unless a scenario overrides it.
pub const PLAYER_LAYER: u8 = 8;

/// Layer assigned to obstacles unless a scenario overrides it.
pub const OBSTACLE_LAYER: u8 = 0;
