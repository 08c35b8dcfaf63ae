//! Snapshot structs: the complete externally visible state of one tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::types::SimTime;

/// Read-only view of a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub spawn_order: u32,
    pub position: DVec3,
    pub lifetime: f64,
    pub engaged: bool,
}

/// Read-only view of a projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub spawn_order: u32,
    pub target_spawn_order: u32,
    pub position: DVec3,
    pub lifetime: f64,
    pub intercept_time: f64,
}

/// Running totals for the session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub targets_spawned: u32,
    pub projectiles_fired: u32,
    pub hits: u32,
    pub targets_expired: u32,
    pub projectiles_expired: u32,
}

/// Everything a caller can observe after one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub shooter_position: DVec3,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: ScoreView,
    /// Events that occurred during this tick, in emission order.
    pub events: Vec<SimEvent>,
}
