//! Commands accepted by the simulation engine.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A command queued by the caller and processed at the next tick boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Spawn a target from raw (unscaled) position derivatives: index 0
    /// is position, 1 velocity, 2 acceleration, and so on.
    SpawnTarget { derivatives: Vec<DVec3> },
    /// Spawn a target with randomly drawn derivatives.
    SpawnRandomTarget,
    /// Replace the shooter's motion derivatives (raw, unscaled).
    SetShooterDerivatives { derivatives: Vec<DVec3> },
    /// Fire a projectile at the oldest unengaged target. `derivatives`
    /// are the projectile's own raw derivatives; the slot at
    /// `order_to_minimize` is free and will be filled by the solver.
    FireProjectile {
        derivatives: Vec<DVec3>,
        order_to_minimize: u32,
        fallback_time: f64,
    },
    /// Stop advancing the simulation clock.
    Pause,
    /// Resume after a pause.
    Resume,
}
