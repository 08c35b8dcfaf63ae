//! Collision system — checks each engaged projectile/target pair for
//! sphere overlap and despawns both on a hit.
//!
//! Only engaged pairs are tested; projectiles fly through targets they
//! were not fired at.

use std::collections::HashMap;

use hecs::World;

use intercept_core::components::{Collider, Position};
use intercept_core::events::SimEvent;
use intercept_core::state::ScoreView;

use crate::engagement::Engagement;

pub fn run(
    world: &mut World,
    engagements: &mut HashMap<u32, Engagement>,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    engagements.retain(|_, engagement| {
        let projectile_state = world
            .get::<&Position>(engagement.projectile)
            .map(|p| p.0)
            .and_then(|p| {
                world
                    .get::<&Collider>(engagement.projectile)
                    .map(|c| (p, c.radius))
            });
        let target_state = world
            .get::<&Position>(engagement.target)
            .map(|p| p.0)
            .and_then(|p| {
                world
                    .get::<&Collider>(engagement.target)
                    .map(|c| (p, c.radius))
            });

        // Either side already despawned: the engagement is stale.
        let (Ok((projectile_pos, projectile_radius)), Ok((target_pos, target_radius))) =
            (projectile_state, target_state)
        else {
            return false;
        };

        let reach = projectile_radius + target_radius;
        if projectile_pos.distance_squared(target_pos) > reach * reach {
            return true;
        }

        log::info!(
            "projectile {} hit target {}",
            engagement.projectile_spawn_order,
            engagement.target_spawn_order
        );
        events.push(SimEvent::Collision {
            projectile_spawn_order: engagement.projectile_spawn_order,
            target_spawn_order: engagement.target_spawn_order,
            position: target_pos,
        });
        score.hits += 1;
        despawn_buffer.push(engagement.projectile);
        despawn_buffer.push(engagement.target);
        false
    });

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
