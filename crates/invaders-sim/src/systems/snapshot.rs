//! Snapshot system: reads the registry and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only: it never modifies the registry.

use invaders_core::components::InvaderClass;
use invaders_core::enums::*;
use invaders_core::events::{AudioEvent, ScoreEvent};
use invaders_core::state::{EntityView, GameStateSnapshot};
use invaders_core::types::SimTime;

use crate::registry::EntityRegistry;
use crate::score::ScoreState;

/// Draw order: ship, formation, then bullets.
const VIEW_ORDER: [EntityKind; 4] = [
    EntityKind::Ship,
    EntityKind::Invader,
    EntityKind::ShipBullet,
    EntityKind::InvaderBullet,
];

/// Build a complete GameStateSnapshot from the current registry state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    registry: &EntityRegistry,
    time: &SimTime,
    phase: GamePhase,
    movement: MovementState,
    audio_events: Vec<AudioEvent>,
    score_events: Vec<ScoreEvent>,
    score: &ScoreState,
    outcome: Option<RoundOutcome>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        movement,
        entities: build_entities(registry),
        audio_events,
        score_events,
        score: score.view(registry.count(EntityKind::Invader) as u32),
        outcome,
    }
}

/// Round outcome derived from registry state; `None` while both sides stand.
pub fn round_outcome(registry: &EntityRegistry) -> Option<RoundOutcome> {
    if registry.count(EntityKind::Ship) == 0 {
        Some(RoundOutcome::ShipDestroyed)
    } else if registry.count(EntityKind::Invader) == 0 {
        Some(RoundOutcome::Cleared)
    } else {
        None
    }
}

fn build_entities(registry: &EntityRegistry) -> Vec<EntityView> {
    VIEW_ORDER
        .iter()
        .flat_map(|&kind| registry.live(kind).iter().map(move |&entity| (kind, entity)))
        .filter_map(|(kind, entity)| {
            Some(EntityView {
                id: entity.to_bits().get(),
                kind,
                position: registry.position(entity)?,
                size: registry.size(entity)?,
                invader_type: registry
                    .component::<InvaderClass>(entity)
                    .map(|class| class.0),
            })
        })
        .collect()
}
