//! Tap system: drains the frame's taps into ship fire attempts.

use invaders_core::config::GameRules;
use invaders_core::events::AudioEvent;

use crate::input::TapDrain;
use crate::registry::EntityRegistry;
use crate::systems::bullets;

/// What the frame's taps did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TapReport {
    pub taps: u32,
    pub fire_attempts: u32,
    pub bullets_fired: u32,
}

/// Consume every drained tap. Single taps attempt to fire; any other tap
/// count is ignored.
pub fn run(
    registry: &mut EntityRegistry,
    taps: TapDrain,
    rules: &GameRules,
    current_time: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> TapReport {
    let mut report = TapReport::default();
    for tap in taps {
        report.taps += 1;
        if !tap.is_single() {
            log::warn!("ignoring tap with count {}", tap.tap_count);
            continue;
        }
        report.fire_attempts += 1;
        if bullets::fire_ship(registry, rules, current_time, audio_events).is_some() {
            report.bullets_fired += 1;
        }
    }
    report
}
