//! Simulation systems, run once per tick in the order listed in
//! `SimEngine::run_systems`.

pub mod cleanup;
pub mod collision;
pub mod fire_control;
pub mod kinematics;
pub mod snapshot;
pub mod spawner;
