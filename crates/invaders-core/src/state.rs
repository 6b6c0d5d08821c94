//! Game state snapshot: the complete visible state handed to the
//! rendering collaborator after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, ScoreEvent};
use crate::types::{Position, SimTime, Size};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub movement: MovementState,
    pub entities: Vec<EntityView>,
    pub audio_events: Vec<AudioEvent>,
    pub score_events: Vec<ScoreEvent>,
    pub score: ScoreView,
    /// Set once the formation is empty or the ship is gone.
    pub outcome: Option<RoundOutcome>,
}

/// A live entity for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    /// Opaque entity identifier, stable for the entity's lifetime.
    pub id: u64,
    pub kind: EntityKind,
    pub position: Position,
    pub size: Size,
    /// Only set for invaders.
    pub invader_type: Option<InvaderType>,
}

/// Running score for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    /// Ship health, 0.0 - 1.0.
    pub health: f64,
    pub invaders_destroyed: u32,
    pub invaders_remaining: u32,
}

impl GameStateSnapshot {
    /// Number of live entities of the given kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}
