//! Invader formation movement for the invaders simulation.
//!
//! Implements the formation direction state machine as an explicit
//! transition table, and the time-gated director that owns the single
//! movement state of a round.

pub mod director;
pub mod fsm;

pub use invaders_core as core;

#[cfg(test)]
mod tests;
