//! Contact resolution: applies removals, score and health for every pair
//! drained from the contact queue this frame.

use invaders_core::config::GameRules;
use invaders_core::events::{AudioEvent, ScoreEvent};

use crate::contacts::{classify, ContactClass, ContactPair};
use crate::registry::EntityRegistry;
use crate::score::ScoreState;

/// Counts of what happened to the frame's pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactReport {
    pub ship_hits: u32,
    pub invader_hits: u32,
    /// Pairs naming an entity that was already removed.
    pub stale: u32,
    pub unclassified: u32,
}

/// Resolve each pair once, in report order.
pub fn run(
    registry: &mut EntityRegistry,
    pairs: Vec<ContactPair>,
    rules: &GameRules,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
    score_events: &mut Vec<ScoreEvent>,
) -> ContactReport {
    let mut report = ContactReport::default();

    for pair in pairs {
        let (a, b) = (pair.body_a.entity, pair.body_b.entity);
        if !registry.is_attached(a) || !registry.is_attached(b) {
            log::trace!("skipping contact with removed entity: {pair:?}");
            report.stale += 1;
            continue;
        }

        match classify(&pair) {
            ContactClass::ShipHit => {
                audio_events.push(AudioEvent::ShipHit);
                registry.remove(a);
                registry.remove(b);
                let amount = score.record_ship_hit(rules);
                score_events.push(ScoreEvent::HealthDecrement { amount });
                report.ship_hits += 1;
                log::debug!("ship hit, health now {:.3}", score.health);
            }
            ContactClass::InvaderHit => {
                audio_events.push(AudioEvent::InvaderHit);
                registry.remove(a);
                registry.remove(b);
                let points = score.record_invader_destroyed(rules);
                score_events.push(ScoreEvent::ScoreIncrement { points });
                report.invader_hits += 1;
                log::debug!("invader destroyed, score now {}", score.score);
            }
            ContactClass::Unclassified => {
                log::warn!(
                    "unclassified contact between {} and {}",
                    pair.body_a.tag.tag(),
                    pair.body_b.tag.tag()
                );
                report.unclassified += 1;
            }
        }
    }

    report
}
