//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod cleanup;
pub mod cone_sync;
pub mod detection;
pub mod movement;
pub mod patrol;
pub mod snapshot;
