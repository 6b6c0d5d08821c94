//! Player commands sent from the driver to the simulation.
//!
//! Commands are queued and applied at the next tick boundary. Taps and
//! steering are not commands: they go through the engine's input queue.

use serde::{Deserialize, Serialize};

/// All round-level player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Clear the stage and spawn a fresh formation and ship.
    StartRound,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
