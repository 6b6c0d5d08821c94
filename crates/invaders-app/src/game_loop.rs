//! Game loop thread: runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! Round commands arrive via an `mpsc` channel. Taps and steering go
//! straight into the engine's input queue from any thread. After each tick
//! the snapshot is checked for overlaps and the resulting contacts are
//! queued for the next tick.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use invaders_core::constants::TICK_RATE;
use invaders_core::state::GameStateSnapshot;
use invaders_sim::input::InputQueue;
use invaders_sim::{SimConfig, SimulationEngine};

use crate::contact_detector;
use crate::state::{CommandSender, GameLoopCommand};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Handles to a running game loop thread.
pub struct GameLoopHandle {
    pub commands: CommandSender,
    pub input: InputQueue,
    pub thread: JoinHandle<()>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let engine = SimulationEngine::new(config);
    let input = engine.input();

    let thread = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        input,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    log::info!("game loop started");
    let contacts = engine.contacts();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopped at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Report this frame's overlaps for resolution next tick
        for pair in contact_detector::detect(&snapshot) {
            contacts.enqueue(pair);
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            log::debug!("game loop behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}
