//! Application state shared between the command surface and the game loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use invaders_core::commands::PlayerCommand;
use invaders_core::state::GameStateSnapshot;

use crate::game_loop::GameLoopHandle;

/// Commands sent from the command surface to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A round command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - The loop handle is `None` until `start_simulation` succeeds.
/// - The latest snapshot is shared with the game loop thread.
pub struct AppState {
    pub game_loop: Mutex<Option<GameLoopHandle>>,
    /// Latest snapshot for synchronous polling. Updated after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            game_loop: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game loop thread has been started and not shut down.
    pub fn is_running(&self) -> bool {
        self.game_loop
            .lock()
            .map(|handle| handle.is_some())
            .unwrap_or(false)
    }
}

/// Sender side of the command channel.
pub type CommandSender = mpsc::Sender<GameLoopCommand>;
