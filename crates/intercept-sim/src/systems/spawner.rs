//! Target spawn factories: explicit derivative vectors or random draws.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use intercept_core::components::{Collider, Expiry, Motion, Position, Target};
use intercept_core::constants::*;
use intercept_core::events::SimEvent;
use intercept_core::state::ScoreView;
use intercept_solver::ScaledSeries;

/// Spawn a target from raw (unscaled) position derivatives.
pub fn spawn_target(
    world: &mut World,
    raw_derivatives: &[DVec3],
    next_spawn_order: &mut u32,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
) -> hecs::Entity {
    let spawn_order = *next_spawn_order;
    *next_spawn_order += 1;

    let series = ScaledSeries::from_derivatives(raw_derivatives);
    let position = series.evaluate_at(0.0);

    let entity = world.spawn((
        Target {
            spawn_order,
            engaged: false,
        },
        Motion {
            series: series.coefficients().to_vec(),
            lifetime: 0.0,
        },
        Position(position),
        Collider {
            radius: DEFAULT_TARGET_RADIUS,
        },
        Expiry {
            max_lifetime: DEFAULT_EXPIRY_LIFETIME,
            max_distance: DEFAULT_EXPIRY_DISTANCE,
        },
    ));

    log::info!("target {spawn_order} spawned at {position}");
    events.push(SimEvent::TargetSpawned {
        spawn_order,
        position,
    });
    score.targets_spawned += 1;

    entity
}

/// Spawn a target with `RANDOM_SERIES_LENGTH` randomly drawn derivatives.
/// Draws below the minimum magnitude are resampled a bounded number of
/// times, then pushed outward component-wise.
pub fn spawn_random_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_spawn_order: &mut u32,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
) -> hecs::Entity {
    let min_magnitude_sq = RANDOM_MIN_MAGNITUDE * RANDOM_MIN_MAGNITUDE;
    let mut raw = Vec::with_capacity(RANDOM_SERIES_LENGTH);

    for _ in 0..RANDOM_SERIES_LENGTH {
        let mut derivative = random_derivative(rng);
        let mut attempts = 1;
        while derivative.length_squared() < min_magnitude_sq
            && attempts < RANDOM_RESAMPLE_ATTEMPTS
        {
            derivative = random_derivative(rng);
            attempts += 1;
        }
        if derivative.length_squared() < min_magnitude_sq {
            derivative = DVec3::new(
                signed_min(rng),
                signed_min(rng),
                signed_min(rng),
            );
        }
        raw.push(derivative);
    }

    spawn_target(world, &raw, next_spawn_order, events, score)
}

fn random_derivative(rng: &mut ChaCha8Rng) -> DVec3 {
    DVec3::new(
        rng.gen_range(-RANDOM_DERIVATIVE_RANGE..RANDOM_DERIVATIVE_RANGE),
        rng.gen_range(-RANDOM_DERIVATIVE_RANGE..RANDOM_DERIVATIVE_RANGE),
        rng.gen_range(-RANDOM_DERIVATIVE_RANGE..RANDOM_DERIVATIVE_RANGE),
    )
}

fn signed_min(rng: &mut ChaCha8Rng) -> f64 {
    if rng.gen_bool(0.5) {
        RANDOM_MIN_MAGNITUDE
    } else {
        -RANDOM_MIN_MAGNITUDE
    }
}
