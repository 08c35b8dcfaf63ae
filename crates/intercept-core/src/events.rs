//! Events emitted by the simulation for callers (UI, logging, tests).

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One discrete occurrence during a tick. Drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A target entered the world.
    TargetSpawned { spawn_order: u32, position: DVec3 },
    /// A projectile launched with a solved intercept solution.
    ProjectileSpawned {
        spawn_order: u32,
        target_spawn_order: u32,
        intercept_time: f64,
        order_to_minimize: u32,
        derivative: DVec3,
    },
    /// The solver used its clamped fallback time instead of a critical
    /// point from the root search.
    SolverFellBack {
        target_spawn_order: u32,
        fallback_time: f64,
    },
    /// A projectile reached its target.
    Collision {
        projectile_spawn_order: u32,
        target_spawn_order: u32,
        position: DVec3,
    },
    /// A target outlived its expiry bounds.
    TargetExpired { spawn_order: u32 },
    /// A projectile outlived its expiry bounds without a hit.
    ProjectileExpired { spawn_order: u32 },
}
