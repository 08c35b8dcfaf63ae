//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Current evaluated position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Taylor-series motion state: factorial-scaled position derivatives
/// around the entity's own spawn instant, plus the seconds elapsed on
/// that clock. Position each tick is the Horner evaluation of `series`
/// at `lifetime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motion {
    /// Scaled coefficients: index `i` holds derivative `i` divided by `i!`.
    pub series: Vec<DVec3>,
    /// Seconds since this entity spawned.
    pub lifetime: f64,
}

/// Sphere collider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Expiry bounds: an entity is removed once it outlives `max_lifetime`
/// or strays farther than `max_distance` from the origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Expiry {
    pub max_lifetime: f64,
    pub max_distance: f64,
}

/// Marks an entity as a target and records its spawn order; fire control
/// pairs projectiles with the oldest unengaged target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub spawn_order: u32,
    pub engaged: bool,
}

/// Marks an entity as a projectile chasing a specific target. The target
/// is referenced by spawn order; the engagement map in the engine holds
/// the entity handles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub spawn_order: u32,
    pub target_spawn_order: u32,
    /// Intercept time the solver chose, on this projectile's clock.
    pub intercept_time: f64,
}

/// Marks the single launch platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shooter;
