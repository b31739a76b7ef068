//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::constants::MAX_TICK_DT;
use skyraid_core::enums::{GamePhase, Key};
use skyraid_core::events::GameEvent;
use skyraid_core::state::{GameStateSnapshot, ObstacleView};
use skyraid_core::tuning::{InvalidTuning, Tuning};
use skyraid_core::types::SimTime;

use crate::input::InputState;
use crate::stats::GameStats;
use crate::systems;
use crate::systems::snapshot::Singletons;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gameplay tuning.
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    muted: bool,
    tuning: Tuning,
    rng: ChaCha8Rng,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    stats: GameStats,
    next_enemy_seq: u64,
    next_projectile_seq: u64,

    player: Entity,
    base: Entity,
    shield: Entity,
}

impl SimulationEngine {
    /// Create a new engine and generate the city. The game starts in the main menu.
    ///
    /// Fails if the tuning holds a value the systems cannot run with.
    pub fn new(config: SimConfig) -> Result<Self, InvalidTuning> {
        let tuning = config.tuning;
        tuning.validate()?;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        world_setup::build_city(&mut world, &mut rng, &tuning);
        let player = world_setup::spawn_player(&mut world, &tuning);
        let base = world_setup::spawn_enemy_base(&mut world);
        let shield = world_setup::spawn_shield_pickup(&mut world);

        Ok(Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            muted: false,
            tuning,
            rng,
            input: InputState::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            stats: GameStats::default(),
            next_enemy_seq: 0,
            next_projectile_seq: 0,
            player,
            base,
            shield,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    /// `dt` is capped at `MAX_TICK_DT`; negative or non-finite values count as zero.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_TICK_DT)
        } else {
            0.0
        };

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.muted,
            events,
            &self.stats,
            self.singletons(),
            &self.tuning,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Whether audio is muted.
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Get the running score and vitals.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Static obstacles for building the scene, in layout order.
    pub fn layout(&self) -> Vec<ObstacleView> {
        systems::snapshot::build_layout(&self.world)
    }

    /// Player entity handle.
    #[cfg(test)]
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Mutable world access for tests that stage exact positions.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a drone at an exact position (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: glam::Vec3) -> Entity {
        world_setup::spawn_enemy_at(
            &mut self.world,
            position,
            &mut self.next_enemy_seq,
            &self.tuning,
        )
    }

    fn singletons(&self) -> Singletons {
        Singletons {
            player: self.player,
            base: self.base,
            shield: self.shield,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => match Key::from_name(&key) {
                Some(mapped) => {
                    self.input.press(mapped);
                    match mapped {
                        Key::Boost => self.activate_boost(),
                        Key::Fire => self.fire(),
                        _ => {}
                    }
                }
                None => log::trace!("ignoring unmapped key {key:?}"),
            },
            PlayerCommand::KeyUp { key } => match Key::from_name(&key) {
                Some(mapped) => self.input.release(mapped),
                None => log::trace!("ignoring unmapped key {key:?}"),
            },
            PlayerCommand::Fire => self.fire(),
            PlayerCommand::ActivateBoost => self.activate_boost(),
            PlayerCommand::StartGame => {
                if self.phase.can_start() {
                    self.start_game();
                } else {
                    log::warn!("start ignored in phase {:?}", self.phase);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.set_phase(GamePhase::Paused);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.set_phase(GamePhase::Active);
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.set_phase(GamePhase::Paused),
                GamePhase::Paused => self.set_phase(GamePhase::Active),
                _ => {}
            },
            PlayerCommand::SetMuted { muted } => {
                self.muted = muted;
            }
            PlayerCommand::ToggleMute => {
                self.muted = !self.muted;
            }
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        log::info!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Reset all dynamic state and begin a new game. The city is kept.
    fn start_game(&mut self) {
        world_setup::clear_combatants(&mut self.world, &mut self.despawn_buffer);
        systems::effects::clear(&mut self.world, &mut self.despawn_buffer);
        world_setup::reset_player(&mut self.world, self.player);
        world_setup::reset_enemy_base(&mut self.world, self.base);
        world_setup::reset_shield_pickup(&mut self.world, self.shield, &self.tuning);

        self.stats = GameStats::default();
        self.time = SimTime::default();
        self.events.clear();

        systems::enemy_ai::spawn_initial(
            &mut self.world,
            &mut self.rng,
            self.player,
            &mut self.next_enemy_seq,
            &self.tuning,
        );
        self.set_phase(GamePhase::Active);
    }

    fn fire(&mut self) {
        if self.phase != GamePhase::Active {
            log::debug!("fire ignored in phase {:?}", self.phase);
            return;
        }
        if let Some(position) = systems::projectiles::fire(
            &mut self.world,
            self.player,
            &mut self.next_projectile_seq,
            &mut self.stats,
            &self.tuning,
        ) {
            self.events.push(GameEvent::ShotFired { position });
        }
    }

    fn activate_boost(&mut self) {
        if self.phase != GamePhase::Active {
            log::debug!("boost ignored in phase {:?}", self.phase);
            return;
        }
        systems::flight::activate_boost(&mut self.world, self.player, &self.tuning, &mut self.events);
    }

    /// End the game. Only the first call per game has any effect.
    fn finish(&mut self, phase: GamePhase) {
        if self.phase != GamePhase::Active {
            return;
        }
        let score = self.stats.score;
        let event = match phase {
            GamePhase::Victory => GameEvent::MissionAccomplished { score },
            _ => GameEvent::MissionFailed { score },
        };
        self.events.push(event);
        self.set_phase(phase);
        log::info!("final score {score:.0}");
    }

    /// Run all systems in order. Stops early once the game has ended.
    fn run_systems(&mut self, dt: f32) {
        // 1. Player flight and boost timers
        let controls = self.input.controls();
        systems::flight::run(
            &mut self.world,
            self.player,
            &controls,
            dt,
            &self.tuning,
            &mut self.events,
        );
        // 2. Drones: reinforcements, seek, contact damage
        let dead = systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            self.player,
            &mut self.next_enemy_seq,
            &mut self.stats,
            dt,
            &self.tuning,
        );
        if dead {
            self.finish(GamePhase::GameOver);
            return;
        }
        // 3. Projectiles: flight, expiry, hits
        let base_destroyed = systems::projectiles::run(
            &mut self.world,
            self.player,
            self.base,
            &mut self.stats,
            &mut self.events,
            &mut self.despawn_buffer,
            dt,
            &self.tuning,
        );
        if base_destroyed {
            self.finish(GamePhase::Victory);
            return;
        }
        // 4. Shield buff and pickup
        systems::shield::run(
            &mut self.world,
            &mut self.rng,
            self.player,
            self.shield,
            &mut self.events,
            dt,
            &self.tuning,
        );
        // 5. Collision against the city
        systems::collision::run(&mut self.world, self.player, &mut self.events, dt, &self.tuning);
        // 6. Flash timers
        systems::effects::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 7. Passive score
        self.stats.score += self.tuning.passive_score_per_sec * dt;
    }
}
