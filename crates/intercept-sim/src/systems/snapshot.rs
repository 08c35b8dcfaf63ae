//! Snapshot system — distills the ECS world into the serializable
//! per-tick view callers consume.

use hecs::World;

use intercept_core::components::{Motion, Position, Projectile, Shooter, Target};
use intercept_core::events::SimEvent;
use intercept_core::state::{ProjectileView, ScoreView, SimSnapshot, TargetView};
use intercept_core::types::SimTime;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    paused: bool,
    events: Vec<SimEvent>,
    score: &ScoreView,
) -> SimSnapshot {
    let shooter_position = world
        .query::<(&Shooter, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, position))| position.0)
        .unwrap_or_default();

    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position, &Motion)>()
        .iter()
        .map(|(_, (target, position, motion))| TargetView {
            spawn_order: target.spawn_order,
            position: position.0,
            lifetime: motion.lifetime,
            engaged: target.engaged,
        })
        .collect();
    // hecs iteration order is not stable across runs; sort for
    // reproducible snapshots.
    targets.sort_by_key(|view| view.spawn_order);

    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Motion)>()
        .iter()
        .map(|(_, (projectile, position, motion))| ProjectileView {
            spawn_order: projectile.spawn_order,
            target_spawn_order: projectile.target_spawn_order,
            position: position.0,
            lifetime: motion.lifetime,
            intercept_time: projectile.intercept_time,
        })
        .collect();
    projectiles.sort_by_key(|view| view.spawn_order);

    SimSnapshot {
        time: *time,
        paused,
        shooter_position,
        targets,
        projectiles,
        score: *score,
        events,
    }
}
