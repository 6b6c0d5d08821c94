//! Simulation engine for the invaders game.
//!
//! Owns the entity registry (a hecs world plus a kind index), the
//! thread-safe input and contact queues, runs the per-frame systems at a
//! fixed tick rate, and produces GameStateSnapshots for the renderer.

pub mod contacts;
pub mod engine;
pub mod input;
pub mod registry;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use invaders_core as core;
pub use registry::{EntityId, EntityRegistry};
