//! Headless intercept simulation engine.
//!
//! Owns the hecs ECS world, processes commands, runs the systems in a
//! fixed order each tick, and produces deterministic snapshots.

pub mod engagement;
pub mod engine;
pub mod systems;

#[cfg(test)]
mod tests;

pub use engine::{SimConfig, SimEngine};
