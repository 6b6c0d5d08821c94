//! Time-gated formation director.
//!
//! Owns the round's `MovementState` and the time of the last move. Each
//! frame it decides whether the formation moves, and re-evaluates the
//! transition table against the formation as it will stand after this
//! frame's displacement.

use invaders_core::config::GameRules;
use invaders_core::enums::MovementState;

use crate::fsm::{displacement, propose, InvaderSpan, StageBounds};

/// What the formation should do this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementDecision {
    /// Whether a move application is due (and there is a formation to move).
    pub should_move: bool,
    /// The state whose displacement applies this frame.
    pub direction: MovementState,
    /// Per-invader (dx, dy); zero when `should_move` is false.
    pub dx: f64,
    pub dy: f64,
    /// State after this frame's evaluation.
    pub next: MovementState,
}

/// The formation movement director.
#[derive(Debug, Clone)]
pub struct MovementDirector {
    state: MovementState,
    time_of_last_move: f64,
    time_per_move: f64,
    step: f64,
    stage: StageBounds,
}

impl MovementDirector {
    pub fn new(time_per_move: f64, step: f64, stage: StageBounds) -> Self {
        Self {
            state: MovementState::default(),
            time_of_last_move: 0.0,
            time_per_move,
            step,
            stage,
        }
    }

    pub fn from_rules(rules: &GameRules) -> Self {
        Self::new(
            rules.time_per_move,
            rules.formation_step,
            StageBounds {
                width: rules.stage.width,
                edge_margin: rules.formation_edge_margin,
            },
        )
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn time_of_last_move(&self) -> f64 {
        self.time_of_last_move
    }

    /// Restart at `MovingRight` with the move clock anchored at `current_time`.
    pub fn reset(&mut self, current_time: f64) {
        self.state = MovementState::default();
        self.time_of_last_move = current_time;
    }

    /// Stop all formation displacement.
    pub fn halt(&mut self) {
        self.state = MovementState::Idle;
    }

    /// Evaluate one frame.
    ///
    /// `spans` are the live invaders in scan order, before this frame's
    /// displacement. The returned displacement must be applied to every
    /// live invader by the caller.
    pub fn evaluate(&mut self, current_time: f64, spans: &[InvaderSpan]) -> MovementDecision {
        let direction = self.state;
        let due = current_time - self.time_of_last_move >= self.time_per_move;
        let should_move = due && !spans.is_empty();

        let (dx, dy) = if should_move {
            self.time_of_last_move = current_time;
            displacement(direction, self.step)
        } else {
            (0.0, 0.0)
        };

        // Look ahead against the formation as it stands after this frame.
        let shifted: Vec<InvaderSpan> = spans.iter().map(|s| s.shifted(dx)).collect();
        let drop_applied = should_move && direction.is_drop();
        let proposal = propose(direction, &shifted, &self.stage, drop_applied);

        if proposal.changed_from(self.state) {
            log::debug!(
                "formation direction {:?} -> {:?} (trigger {:?})",
                self.state,
                proposal.next,
                proposal.trigger
            );
            self.state = proposal.next;
        } else if !should_move {
            log::trace!("formation gated at t={current_time:.3}");
        }

        MovementDecision {
            should_move,
            direction,
            dx,
            dy,
            next: self.state,
        }
    }
}
