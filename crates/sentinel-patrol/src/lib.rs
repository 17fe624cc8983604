//! Sweep behavior for SENTINEL sentries.
//!
//! Implements the dwell/sweep state machine that turns a sentry head
//! left and right around its initial heading, plus the orientation
//! stepping helpers it is built on.

pub mod rotation;
pub mod sweep;

pub use sentinel_core as core;

#[cfg(test)]
mod tests;
