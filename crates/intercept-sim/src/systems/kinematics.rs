//! Kinematic update system.
//!
//! Each entity's position is the Horner evaluation of its own scaled
//! Taylor series at its accumulated lifetime — the same evaluation the
//! solver uses, so solved trajectories land exactly where predicted.

use hecs::World;

use intercept_core::components::{Motion, Position};
use intercept_core::constants::DT;
use intercept_solver::series::horner;

/// Advance lifetimes by one tick and re-evaluate positions.
pub fn run(world: &mut World) {
    for (_entity, (motion, position)) in world.query_mut::<(&mut Motion, &mut Position)>() {
        motion.lifetime += DT;
        position.0 = horner(&motion.series, motion.lifetime);
    }
}
