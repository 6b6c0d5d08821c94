//! Command surface for a frontend.
//!
//! Each handler bridges one frontend request to the game loop thread and
//! reports failures as strings the frontend can show.

use invaders_core::commands::PlayerCommand;
use invaders_core::state::GameStateSnapshot;
use invaders_sim::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), String> {
    let mut game_loop = state.game_loop.lock().map_err(|e| e.to_string())?;

    if game_loop.is_some() {
        return Err("Simulation already running".into());
    }

    let handle = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())
        .map_err(|e| format!("Failed to spawn game loop: {e}"))?;
    *game_loop = Some(handle);

    Ok(())
}

/// Send a round command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let game_loop = state.game_loop.lock().map_err(|e| e.to_string())?;

    match game_loop.as_ref() {
        Some(handle) => handle
            .commands
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {e}")),
        None => Err("Simulation not started".into()),
    }
}

/// Report a tap gesture.
pub fn tap(state: &AppState, tap_count: u32) -> Result<(), String> {
    let game_loop = state.game_loop.lock().map_err(|e| e.to_string())?;
    let handle = game_loop.as_ref().ok_or("Simulation not started")?;
    handle.input.push_tap(tap_count);
    Ok(())
}

/// Report the current steering value.
pub fn steer(state: &AppState, value: f64) -> Result<(), String> {
    let game_loop = state.game_loop.lock().map_err(|e| e.to_string())?;
    let handle = game_loop.as_ref().ok_or("Simulation not started")?;
    handle.input.set_steering(value);
    Ok(())
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to finish.
pub fn shutdown(state: &AppState) -> Result<(), String> {
    let handle = state
        .game_loop
        .lock()
        .map_err(|e| e.to_string())?
        .take()
        .ok_or("Simulation not started")?;

    // The loop also exits on disconnect, so a failed send is not an error.
    let _ = handle.commands.send(GameLoopCommand::Shutdown);
    handle
        .thread
        .join()
        .map_err(|_| "Game loop thread panicked".to_string())
}
