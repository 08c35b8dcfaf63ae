//! Simulation engine — owns the hecs ECS world, processes commands, runs
//! all systems, and produces `SimSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::{HashMap, VecDeque};

use glam::DVec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use intercept_core::commands::SimCommand;
use intercept_core::components::{Motion, Position, Shooter};
use intercept_core::events::SimEvent;
use intercept_core::state::{ScoreView, SimSnapshot};
use intercept_core::types::SimTime;
use intercept_solver::ScaledSeries;

use crate::engagement::Engagement;
use crate::systems;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Raw (unscaled) motion derivatives of the shooter; defaults to a
    /// stationary shooter at the origin.
    pub shooter_derivatives: Vec<DVec3>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            shooter_derivatives: vec![DVec3::ZERO],
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimEngine {
    world: World,
    time: SimTime,
    paused: bool,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    engagements: HashMap<u32, Engagement>,
    next_target_order: u32,
    next_projectile_order: u32,
    score: ScoreView,
}

impl SimEngine {
    /// Create a new engine with the given config. The shooter entity is
    /// spawned immediately.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let shooter_series = ScaledSeries::from_derivatives(&config.shooter_derivatives);
        let shooter_position = shooter_series.evaluate_at(0.0);
        world.spawn((
            Shooter,
            Position(shooter_position),
            Motion {
                series: shooter_series.coefficients().to_vec(),
                lifetime: 0.0,
            },
        ));

        Self {
            world,
            time: SimTime::default(),
            paused: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            engagements: HashMap::new(),
            next_target_order: 0,
            next_projectile_order: 0,
            score: ScoreView::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if !self.paused {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.paused, events, &self.score)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the engagement map.
    #[cfg(test)]
    pub fn engagements(&self) -> &HashMap<u32, Engagement> {
        &self.engagements
    }

    /// Get the running score.
    pub fn score(&self) -> ScoreView {
        self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SpawnTarget { derivatives } => {
                systems::spawner::spawn_target(
                    &mut self.world,
                    &derivatives,
                    &mut self.next_target_order,
                    &mut self.events,
                    &mut self.score,
                );
            }
            SimCommand::SpawnRandomTarget => {
                systems::spawner::spawn_random_target(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.next_target_order,
                    &mut self.events,
                    &mut self.score,
                );
            }
            SimCommand::SetShooterDerivatives { derivatives } => {
                let series = ScaledSeries::from_derivatives(&derivatives);
                for (_entity, (_shooter, motion, position)) in self
                    .world
                    .query_mut::<(&Shooter, &mut Motion, &mut Position)>()
                {
                    motion.series = series.coefficients().to_vec();
                    // New derivatives re-center the shooter's clock at now.
                    motion.lifetime = 0.0;
                    position.0 = series.evaluate_at(0.0);
                }
            }
            SimCommand::FireProjectile {
                derivatives,
                order_to_minimize,
                fallback_time,
            } => {
                systems::fire_control::fire(
                    &mut self.world,
                    &mut self.engagements,
                    &mut self.next_projectile_order,
                    &mut self.events,
                    &mut self.score,
                    &derivatives,
                    order_to_minimize,
                    fallback_time,
                );
            }
            SimCommand::Pause => {
                self.paused = true;
            }
            SimCommand::Resume => {
                self.paused = false;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Kinematics: advance lifetimes, evaluate positions.
        systems::kinematics::run(&mut self.world);
        // 2. Collision: projectile-target proximity checks.
        systems::collision::run(
            &mut self.world,
            &mut self.engagements,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 3. Cleanup: expiry by lifetime or distance.
        systems::cleanup::run(
            &mut self.world,
            &mut self.engagements,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
    }
}
