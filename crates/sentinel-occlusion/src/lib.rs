//! Occlusion queries for SENTINEL.
//!
//! Collider shapes, layer-filtered ray casting, and line-of-sight checks
//! between points in the sentry world.

pub use sentinel_core as core;

pub mod los;
pub mod ray;
pub mod shapes;

// Re-export key types for convenience.
pub use los::has_line_of_sight;
pub use ray::{raycast, Ray, RaycastHit};
pub use shapes::{Collider, Shape};
