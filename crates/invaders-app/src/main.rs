//! Headless demo: plays one round with a simple autopilot and logs the
//! result.
//!
//! Usage: `invaders-app [rules.json] [seed]`

use std::time::{Duration, Instant};

use invaders_app::ipc;
use invaders_app::state::AppState;
use invaders_core::commands::PlayerCommand;
use invaders_core::config::GameRules;
use invaders_core::enums::EntityKind;
use invaders_core::state::GameStateSnapshot;
use invaders_sim::SimConfig;

/// Give up on a round that has not finished by then.
const ROUND_TIMEOUT: Duration = Duration::from_secs(120);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let rules = match args.next() {
        Some(path) => {
            log::info!("loading rules from {path}");
            GameRules::load(&path).unwrap_or_else(|e| {
                log::error!("{path}: {e}; using default rules");
                GameRules::default()
            })
        }
        None => GameRules::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse().map_err(|e| format!("bad seed {seed}: {e}"))?,
        None => SimConfig::default().seed,
    };

    let state = AppState::new();
    ipc::start_simulation(&state, SimConfig { seed, rules })?;
    ipc::send_command(&state, PlayerCommand::StartRound)?;

    let started = Instant::now();
    let last = loop {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snapshot) = ipc::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.outcome.is_some() || started.elapsed() > ROUND_TIMEOUT {
            break snapshot;
        }
        autopilot(&state, &snapshot)?;
    };

    ipc::shutdown(&state)?;

    match last.outcome {
        Some(outcome) => log::info!("round finished: {outcome:?}"),
        None => log::warn!("round timed out after {:?}", ROUND_TIMEOUT),
    }
    let summary = serde_json::to_string_pretty(&last.score).map_err(|e| e.to_string())?;
    println!("{summary}");
    Ok(())
}

/// Steer under the lowest invader and keep firing.
fn autopilot(state: &AppState, snapshot: &GameStateSnapshot) -> Result<(), String> {
    let ship_x = snapshot
        .entities
        .iter()
        .find(|v| v.kind == EntityKind::Ship)
        .map(|v| v.position.x);
    let target_x = snapshot
        .entities
        .iter()
        .filter(|v| v.kind == EntityKind::Invader)
        .min_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .map(|v| v.position.x);

    let (Some(ship_x), Some(target_x)) = (ship_x, target_x) else {
        return ipc::steer(state, 0.0);
    };
    let steering = ((target_x - ship_x) / 40.0).clamp(-1.0, 1.0);
    ipc::steer(state, steering)?;
    if snapshot.count(EntityKind::ShipBullet) == 0 {
        ipc::tap(state, 1)?;
    }
    Ok(())
}
