//! Headless invaders host.
//!
//! Runs the simulation on its own thread, stands in for the physics
//! collaborator by detecting overlaps between snapshot bodies, and exposes
//! a small command surface for a frontend.

pub mod contact_detector;
pub mod game_loop;
pub mod ipc;
pub mod state;

pub use invaders_core as core;
