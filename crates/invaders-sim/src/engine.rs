//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity registry, processes round commands,
//! runs all systems in frame order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::commands::PlayerCommand;
use invaders_core::config::GameRules;
use invaders_core::enums::{GamePhase, MovementState, RoundOutcome};
use invaders_core::events::{AudioEvent, ScoreEvent};
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::SimTime;
use invaders_formation::director::MovementDirector;

use crate::contacts::{ContactPair, ContactQueue};
use crate::input::InputQueue;
use crate::registry::{EntityId, EntityRegistry};
use crate::score::ScoreState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    pub rules: GameRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: GameRules::default(),
        }
    }
}

/// The simulation engine. Owns the registry and all round state.
pub struct SimulationEngine {
    registry: EntityRegistry,
    time: SimTime,
    phase: GamePhase,
    rules: GameRules,
    rng: ChaCha8Rng,
    director: MovementDirector,
    command_queue: VecDeque<PlayerCommand>,
    input: InputQueue,
    contacts: ContactQueue,
    audio_events: Vec<AudioEvent>,
    score_events: Vec<ScoreEvent>,
    score: ScoreState,
    outcome: Option<RoundOutcome>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            registry: EntityRegistry::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            director: MovementDirector::from_rules(&config.rules),
            score: ScoreState::new(&config.rules),
            rules: config.rules,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            input: InputQueue::new(),
            contacts: ContactQueue::new(),
            audio_events: Vec::new(),
            score_events: Vec::new(),
            outcome: None,
        }
    }

    /// Queue a round command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Producer handle for taps and steering. Safe to move to another thread.
    pub fn input(&self) -> InputQueue {
        self.input.clone()
    }

    /// Producer handle for contact reports. Safe to move to another thread.
    pub fn contacts(&self) -> ContactQueue {
        self.contacts.clone()
    }

    /// Report a contact pair for resolution on the next tick.
    pub fn enqueue_contact(&self, pair: ContactPair) {
        self.contacts.enqueue(pair);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.time.advance();
            self.run_systems();
        } else {
            self.discard_input();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let score_events = std::mem::take(&mut self.score_events);
        systems::snapshot::build_snapshot(
            &self.registry,
            &self.time,
            self.phase,
            self.director.state(),
            audio_events,
            score_events,
            &self.score,
            self.outcome,
        )
    }

    /// Fire a ship bullet now, unless one is already in flight.
    pub fn fire_ship(&mut self) -> Option<EntityId> {
        systems::bullets::fire_ship(
            &mut self.registry,
            &self.rules,
            self.time.elapsed_secs,
            &mut self.audio_events,
        )
    }

    /// Fire an invader bullet now, unless one is already in flight.
    pub fn fire_invader(&mut self) -> Option<EntityId> {
        systems::bullets::fire_invader(
            &mut self.registry,
            &mut self.rng,
            &self.rules,
            self.time.elapsed_secs,
            &mut self.audio_events,
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

    /// Get the current formation movement state.
    pub fn movement_state(&self) -> MovementState {
        self.director.state()
    }

    /// How the current round ended, if it has.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Get a read-only reference to the registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Get a read-only reference to the score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single round command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRound => self.start_round(),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    log::info!("paused at tick {}", self.time.tick);
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    log::info!("resumed at tick {}", self.time.tick);
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    fn start_round(&mut self) {
        self.registry.clear();
        // Reports naming the previous round's entities are meaningless now.
        self.contacts.drain();
        world_setup::setup_round(&mut self.registry, &self.rules);
        self.time = SimTime::default();
        self.director.reset(self.time.elapsed_secs);
        self.score = ScoreState::new(&self.rules);
        self.outcome = None;
        self.phase = GamePhase::Active;
        log::info!(
            "round started with {} invaders",
            self.rules.invader_rows * self.rules.invader_cols
        );
    }

    /// Drop taps and contacts reported outside play; steering is left as is.
    fn discard_input(&mut self) {
        let taps = self.input.drain().len();
        let contacts = self.contacts.drain().len();
        if taps > 0 || contacts > 0 {
            log::debug!(
                "{:?}: dropped {taps} taps and {contacts} contacts",
                self.phase
            );
        }
    }

    /// Run all systems in frame order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;

        // 1. Steering
        let steering = self.input.steering();
        systems::steering::run(&mut self.registry, steering, &self.rules);
        // 2. Formation movement
        systems::formation::run(&mut self.registry, &mut self.director, now);
        // 3. Ship fire from this frame's taps
        let taps = self.input.drain();
        systems::taps::run(
            &mut self.registry,
            taps,
            &self.rules,
            now,
            &mut self.audio_events,
        );
        // 4. Invader fire
        systems::bullets::fire_invader(
            &mut self.registry,
            &mut self.rng,
            &self.rules,
            now,
            &mut self.audio_events,
        );
        // 5. Bullet flight and arrival
        systems::bullets::advance(&mut self.registry, now);
        // 6. Contacts
        let pairs = self.contacts.drain();
        systems::contact_resolver::run(
            &mut self.registry,
            pairs,
            &self.rules,
            &mut self.score,
            &mut self.audio_events,
            &mut self.score_events,
        );
        // 7. Cleanup
        systems::cleanup::run(&mut self.registry);
        // 8. Outcome
        if self.outcome.is_none() {
            self.outcome = systems::snapshot::round_outcome(&self.registry);
            if let Some(outcome) = self.outcome {
                // The formation stops; bullets in flight play out.
                self.director.halt();
                log::info!(
                    "round over: {outcome:?} at tick {} with score {}",
                    self.time.tick,
                    self.score.score
                );
            }
        }
    }
}
