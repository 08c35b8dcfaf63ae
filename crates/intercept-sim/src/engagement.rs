//! Engagement data model — links a projectile in flight to its target.
//!
//! Stored in `SimEngine`'s engagement map, NOT as ECS entities.

/// One projectile-target pairing, created at launch and removed on hit,
/// expiry, or target loss.
#[derive(Debug, Clone, Copy)]
pub struct Engagement {
    pub projectile: hecs::Entity,
    pub target: hecs::Entity,
    pub projectile_spawn_order: u32,
    pub target_spawn_order: u32,
}
