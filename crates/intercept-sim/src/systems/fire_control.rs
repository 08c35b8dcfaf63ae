//! Fire control system — pairs a projectile with the oldest unengaged
//! target, runs the intercept solver, and launches the projectile with
//! the solved derivative seeded into its motion series.

use std::collections::HashMap;

use glam::DVec3;
use hecs::World;

use intercept_core::components::{Collider, Expiry, Motion, Position, Projectile, Shooter, Target};
use intercept_core::constants::*;
use intercept_core::events::SimEvent;
use intercept_core::state::ScoreView;
use intercept_solver::{solve_intercept_derivative, ScaledSeries};

use crate::engagement::Engagement;

/// Attempt to launch one projectile. Skips silently (with a log line)
/// when no unengaged target exists; solver argument rejections are
/// logged and dropped, matching the command-queue contract that bad
/// commands never poison the engine.
#[allow(clippy::too_many_arguments)]
pub fn fire(
    world: &mut World,
    engagements: &mut HashMap<u32, Engagement>,
    next_projectile_order: &mut u32,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    raw_derivatives: &[DVec3],
    order_to_minimize: u32,
    fallback_time: f64,
) {
    // Oldest unengaged target by spawn order.
    let target_pick = {
        let mut query = world.query::<&Target>();
        query
            .iter()
            .filter(|(_, target)| !target.engaged)
            .min_by_key(|(_, target)| target.spawn_order)
            .map(|(entity, target)| (entity, target.spawn_order))
    };
    let Some((target_entity, target_spawn_order)) = target_pick else {
        log::info!("no unengaged target available, skipping projectile launch");
        return;
    };

    let (target_series, target_elapsed) = match world.get::<&Motion>(target_entity) {
        Ok(motion) => (
            ScaledSeries::from_scaled(motion.series.clone()),
            motion.lifetime,
        ),
        Err(_) => return,
    };

    let launch_position = {
        let mut query = world.query::<(&Shooter, &Position)>();
        let Some((_, (_, position))) = query.iter().next() else {
            log::warn!("no shooter entity, skipping projectile launch");
            return;
        };
        position.0
    };

    // The solve origin must be the series the projectile will actually fly:
    // launch position at index 0, the caller's scaled derivatives in the
    // other slots, and a zero placeholder where the solved derivative goes.
    // The solver's guarantee `origin(t) + derivative * t^order == target(t)`
    // then holds for the launched projectile exactly.
    let mut series = ScaledSeries::from_derivatives(raw_derivatives)
        .coefficients()
        .to_vec();
    let order_index = order_to_minimize as usize;
    if series.len() <= order_index {
        series.resize(order_index + 1, DVec3::ZERO);
    }
    series[0] = launch_position;
    series[order_index] = DVec3::ZERO;
    let origin = ScaledSeries::from_scaled(series.clone());

    let solution = match solve_intercept_derivative(
        &target_series,
        &origin,
        target_elapsed,
        order_to_minimize,
        fallback_time,
        DEFAULT_EXPIRY_LIFETIME,
    ) {
        Ok(solution) => solution,
        Err(error) => {
            log::warn!("intercept solve rejected: {error}");
            return;
        }
    };

    if solution.used_fallback {
        log::debug!(
            "no usable critical time for target {target_spawn_order}, \
             falling back to t = {}",
            solution.intercept_time
        );
        events.push(SimEvent::SolverFellBack {
            target_spawn_order,
            fallback_time: solution.intercept_time,
        });
    }

    series[order_index] = solution.derivative;

    let spawn_order = *next_projectile_order;
    *next_projectile_order += 1;
    let projectile_entity = world.spawn((
        Projectile {
            spawn_order,
            target_spawn_order,
            intercept_time: solution.intercept_time,
        },
        Motion {
            series,
            lifetime: 0.0,
        },
        Position(launch_position),
        Collider {
            radius: DEFAULT_PROJECTILE_RADIUS,
        },
        Expiry {
            max_lifetime: DEFAULT_EXPIRY_LIFETIME,
            max_distance: DEFAULT_EXPIRY_DISTANCE,
        },
    ));

    if let Ok(mut target) = world.get::<&mut Target>(target_entity) {
        target.engaged = true;
    }

    engagements.insert(
        spawn_order,
        Engagement {
            projectile: projectile_entity,
            target: target_entity,
            projectile_spawn_order: spawn_order,
            target_spawn_order,
        },
    );

    log::info!(
        "projectile {spawn_order} launched at target {target_spawn_order}, \
         intercept at t = {:.3}",
        solution.intercept_time
    );
    events.push(SimEvent::ProjectileSpawned {
        spawn_order,
        target_spawn_order,
        intercept_time: solution.intercept_time,
        order_to_minimize,
        derivative: solution.derivative,
    });
    score.projectiles_fired += 1;
}
