//! ECS systems that operate on the entity registry each frame.
//!
//! Systems are plain functions over the registry and the engine's state.
//! They do not own state: entity data lives in components, round state in
//! the engine.

pub mod bullets;
pub mod cleanup;
pub mod contact_resolver;
pub mod formation;
pub mod snapshot;
pub mod steering;
pub mod taps;
