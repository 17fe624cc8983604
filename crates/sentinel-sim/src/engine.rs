//! Simulation engine: the sentry world's main loop.
//!
//! `SentryEngine` owns the hecs ECS world, processes queued commands,
//! runs all systems, notifies detection observers, and produces
//! `SentryStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::commands::SentryCommand;
use sentinel_core::components::{Player, Sentry};
use sentinel_core::config::ConfigError;
use sentinel_core::constants::{DT, MAX_TIME_SCALE};
use sentinel_core::enums::SimPhase;
use sentinel_core::events::{DetectionEvent, SentryEvent};
use sentinel_core::state::SentryStateSnapshot;
use sentinel_core::types::{SimTime, Transform, Velocity};
use sentinel_occlusion::has_line_of_sight;

use crate::observers::{DetectionHub, SubscriptionId};
use crate::scenario::{ObstacleDef, PlayerDef, PlayerError, Scenario, ScenarioError, SentryDef};
use crate::systems;
use crate::vision_cone::{ConeLink, ConeMesh, VisionCone};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SentryEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    time_scale: f32,
    rng: ChaCha8Rng,
    next_sentry_id: u32,
    command_queue: VecDeque<SentryCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SentryEvent>,
    hub: DetectionHub,
}

impl SentryEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_sentry_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            hub: DetectionHub::new(),
        }
    }

    /// Spawn everything a scenario describes. Nothing is spawned if any
    /// definition is invalid. Returns the ids of the new sentries.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Result<Vec<u32>, ScenarioError> {
        scenario.validate()?;

        for obstacle in &scenario.obstacles {
            self.spawn_obstacle(obstacle);
        }
        for (index, player) in scenario.players.iter().enumerate() {
            self.spawn_player(player)
                .map_err(|source| ScenarioError::Player { index, source })?;
        }
        let mut ids = Vec::with_capacity(scenario.sentries.len());
        for (index, def) in scenario.sentries.iter().enumerate() {
            let id = self
                .spawn_sentry(def)
                .map_err(|source| ScenarioError::Sentry { index, source })?;
            ids.push(id);
        }
        Ok(ids)
    }

    /// Spawn a sentry (and its vision cone). Returns its id.
    pub fn spawn_sentry(&mut self, def: &SentryDef) -> Result<u32, ConfigError> {
        let sentry_id = self.next_sentry_id;
        world_setup::spawn_sentry(&mut self.world, sentry_id, def)?;
        self.next_sentry_id += 1;
        Ok(sentry_id)
    }

    /// Remove a sentry, its cone, and the observers bound to it.
    pub fn despawn_sentry(&mut self, sentry_id: u32) -> bool {
        let found =
            systems::cleanup::despawn_sentry(&mut self.world, sentry_id, &mut self.despawn_buffer);
        if found {
            self.hub.remove_sentry(sentry_id);
        }
        found
    }

    /// Spawn a player. Rejects definitions the movement systems cannot run.
    pub fn spawn_player(&mut self, def: &PlayerDef) -> Result<Entity, PlayerError> {
        world_setup::spawn_player(&mut self.world, def)
    }

    pub fn spawn_obstacle(&mut self, def: &ObstacleDef) -> Entity {
        world_setup::spawn_obstacle(&mut self.world, def)
    }

    /// Register `callback` for detections made by one sentry.
    pub fn subscribe_to_player_detection(
        &mut self,
        sentry_id: u32,
        callback: impl FnMut(&DetectionEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.hub.subscribe(sentry_id, callback)
    }

    /// Register `callback` for detections made by any sentry.
    pub fn subscribe_all(
        &mut self,
        callback: impl FnMut(&DetectionEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.hub.subscribe_all(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SentryCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SentryCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one fixed tick (`DT` scaled by the time scale).
    pub fn tick(&mut self) -> SentryStateSnapshot {
        self.step(DT * self.time_scale)
    }

    /// Advance by an explicit frame time and return the resulting snapshot.
    pub fn step(&mut self, dt: f32) -> SentryStateSnapshot {
        self.process_commands();

        let mut detections = Vec::new();
        if self.phase == SimPhase::Active {
            let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
            detections = self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events, &detections)
    }

    /// Get the current run phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Entity of the sentry with `sentry_id`.
    pub fn sentry_entity(&self, sentry_id: u32) -> Option<Entity> {
        self.world
            .query::<&Sentry>()
            .iter()
            .find(|(_, s)| s.sentry_id == sentry_id)
            .map(|(entity, _)| entity)
    }

    /// Current head transform of a sentry.
    pub fn head_transform(&self, sentry_id: u32) -> Option<Transform> {
        let entity = self.sentry_entity(sentry_id)?;
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }

    /// Cone mesh and its current world transform, for renderers.
    pub fn vision_cone(&self, sentry_id: u32) -> Option<(ConeMesh, Transform)> {
        let entity = self.sentry_entity(sentry_id)?;
        let link = *self.world.get::<&ConeLink>(entity).ok()?;
        let cone = self.world.get::<&VisionCone>(link.0).ok()?;
        let transform = self.world.get::<&Transform>(link.0).ok()?;
        Some((cone.mesh.clone(), *transform))
    }

    /// Whether a sentry's head has an unobstructed line to `point`, through
    /// the sentry's sight layers. Ignores range and field of view. Colliders
    /// enclosing `point` (such as the body of a player standing there) do
    /// not block it.
    pub fn has_line_of_sight(&self, sentry_id: u32, point: Vec3) -> Option<bool> {
        let entity = self.sentry_entity(sentry_id)?;
        let sentry = self.world.get::<&Sentry>(entity).ok()?;
        let head = *self.world.get::<&Transform>(entity).ok()?;

        let colliders = systems::detection::collect_colliders(&self.world);
        Some(has_line_of_sight(
            head.position,
            point,
            sentry.config.player_layers,
            colliders
                .iter()
                .filter(|(e, center, collider, _)| {
                    *e != entity && !collider.shape.contains(*center, point)
                })
                .map(|(e, center, collider, _)| (*e, *center, collider)),
        ))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SentryCommand) {
        match command {
            SentryCommand::Pause => {
                if self.phase == SimPhase::Active {
                    self.phase = SimPhase::Paused;
                }
            }
            SentryCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Active;
                }
            }
            SentryCommand::SetTimeScale { scale } => {
                if scale.is_finite() {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                } else {
                    warn!("ignoring non-finite time scale {scale}");
                }
            }
            SentryCommand::MovePlayer { position } => {
                for (_entity, (_player, transform)) in
                    self.world.query_mut::<(&Player, &mut Transform)>()
                {
                    transform.position = position;
                }
            }
            SentryCommand::SetPlayerVelocity { velocity } => {
                for (_entity, (_player, vel)) in self.world.query_mut::<(&Player, &mut Velocity)>() {
                    vel.0 = velocity;
                }
            }
            SentryCommand::DespawnSentry { sentry_id } => {
                if !self.despawn_sentry(sentry_id) {
                    warn!("DespawnSentry: no sentry with id {sentry_id}");
                }
            }
        }
    }

    /// Run all systems in order and return this tick's detections.
    fn run_systems(&mut self, dt: f32) -> Vec<systems::detection::Detection> {
        // 1. Intruder movement
        systems::movement::run(&mut self.world, dt);
        systems::movement::wander(&mut self.world, &mut self.rng, dt);
        // 2. Head sweep
        systems::patrol::run(&mut self.world, dt, &mut self.events);
        // 3. Vision cones follow their heads
        systems::cone_sync::run(&mut self.world);
        // 4. Detection against the updated head orientation
        let detections = systems::detection::run(&self.world, self.time.tick);
        // 5. Observers
        for detection in &detections {
            self.hub.notify(&detection.event);
            self.events.push(SentryEvent::PlayerDetected(detection.event));
        }
        detections
    }
}
