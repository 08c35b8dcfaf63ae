//! Cleanup system — expires entities that outlive their bounds.
//!
//! An entity expires when its lifetime exceeds `Expiry::max_lifetime` or
//! its position strays beyond `Expiry::max_distance` from the origin.
//! Targets left behind by an expired projectile become eligible for
//! re-engagement.

use std::collections::HashMap;

use hecs::World;

use intercept_core::components::{Expiry, Motion, Position, Projectile, Target};
use intercept_core::events::SimEvent;
use intercept_core::state::ScoreView;

use crate::engagement::Engagement;

fn expired(motion: &Motion, position: &Position, expiry: &Expiry) -> bool {
    motion.lifetime > expiry.max_lifetime
        || position.0.length_squared() > expiry.max_distance * expiry.max_distance
}

pub fn run(
    world: &mut World,
    engagements: &mut HashMap<u32, Engagement>,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    for (entity, (target, motion, position, expiry)) in world
        .query::<(&Target, &Motion, &Position, &Expiry)>()
        .iter()
    {
        if expired(motion, position, expiry) {
            log::debug!("target {} expired", target.spawn_order);
            events.push(SimEvent::TargetExpired {
                spawn_order: target.spawn_order,
            });
            score.targets_expired += 1;
            despawn_buffer.push(entity);
        }
    }

    let mut released_targets = Vec::new();
    for (entity, (projectile, motion, position, expiry)) in world
        .query::<(&Projectile, &Motion, &Position, &Expiry)>()
        .iter()
    {
        if expired(motion, position, expiry) {
            log::debug!("projectile {} expired", projectile.spawn_order);
            events.push(SimEvent::ProjectileExpired {
                spawn_order: projectile.spawn_order,
            });
            score.projectiles_expired += 1;
            despawn_buffer.push(entity);
            if let Some(engagement) = engagements.remove(&projectile.spawn_order) {
                released_targets.push(engagement.target);
            }
        }
    }

    // An expired projectile frees its target for another shot.
    for target_entity in released_targets {
        if let Ok(mut target) = world.get::<&mut Target>(target_entity) {
            target.engaged = false;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Drop engagements whose target expired out from under the projectile.
    engagements.retain(|_, engagement| world.contains(engagement.target));
}
