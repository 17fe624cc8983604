//! Simulation engine for SENTINEL.
//!
//! Owns the hecs ECS world, runs sentry systems each tick, notifies
//! detection observers, and produces `SentryStateSnapshot`s.

pub mod engine;
pub mod observers;
pub mod scenario;
pub mod systems;
pub mod vision_cone;
pub mod world_setup;

pub use engine::{SentryEngine, SimConfig};
pub use observers::{DetectionHub, SubscriptionId};
pub use scenario::{PlayerError, Scenario, ScenarioError};
pub use sentinel_core as core;
pub use vision_cone::ConeMesh;
