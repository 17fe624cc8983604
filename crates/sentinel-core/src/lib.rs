//! Core types and definitions for the SENTINEL sentry simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! transforms, components, configuration, commands, state snapshots,
//! events, and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
