//! Formation direction finite state machine.
//!
//! Pure functions over plain data: the formation is described by the
//! horizontal span of each live invader, in registry iteration order.
//! No ECS dependency.

use invaders_core::enums::MovementState;

/// Horizontal extent of one live invader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvaderSpan {
    pub min_x: f64,
    pub max_x: f64,
}

impl InvaderSpan {
    pub fn new(min_x: f64, max_x: f64) -> Self {
        Self { min_x, max_x }
    }

    /// Same span moved horizontally by `dx`.
    pub fn shifted(&self, dx: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            max_x: self.max_x + dx,
        }
    }
}

/// Horizontal limits the formation turns around at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageBounds {
    pub width: f64,
    /// An invader within this distance of a side edge triggers a turn.
    pub edge_margin: f64,
}

/// Condition a transition fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Some invader's right edge is at or past `width - edge_margin`.
    AnyAtRightEdge,
    /// Some invader's left edge is at or before `edge_margin`.
    AnyAtLeftEdge,
    /// The drop step of a `Drop*` state has been applied on this pass.
    DropApplied,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub from: MovementState,
    pub guard: Guard,
    pub to: MovementState,
}

/// The complete transition table. States with no row (`Idle`) never change
/// on their own.
pub const TRANSITIONS: [Transition; 4] = [
    Transition {
        from: MovementState::MovingRight,
        guard: Guard::AnyAtRightEdge,
        to: MovementState::DropThenLeft,
    },
    Transition {
        from: MovementState::MovingLeft,
        guard: Guard::AnyAtLeftEdge,
        to: MovementState::DropThenRight,
    },
    Transition {
        from: MovementState::DropThenLeft,
        guard: Guard::DropApplied,
        to: MovementState::MovingLeft,
    },
    Transition {
        from: MovementState::DropThenRight,
        guard: Guard::DropApplied,
        to: MovementState::MovingRight,
    },
];

/// Result of evaluating the table for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal {
    pub next: MovementState,
    /// Index of the first invader that satisfied an edge guard, if any.
    pub trigger: Option<usize>,
}

impl Proposal {
    pub fn changed_from(&self, current: MovementState) -> bool {
        self.next != current
    }
}

/// Index of the first invader (in scan order) that satisfies `guard`.
/// Scanning stops at the first match. `DropApplied` never matches an invader.
pub fn first_trigger(guard: Guard, spans: &[InvaderSpan], stage: &StageBounds) -> Option<usize> {
    match guard {
        Guard::AnyAtRightEdge => spans
            .iter()
            .position(|s| s.max_x >= stage.width - stage.edge_margin),
        Guard::AnyAtLeftEdge => spans.iter().position(|s| s.min_x <= stage.edge_margin),
        Guard::DropApplied => None,
    }
}

/// Evaluate the transition table for `state`.
///
/// Edge guards need at least one live invader; an empty formation never
/// proposes a change out of a lateral state.
pub fn propose(
    state: MovementState,
    spans: &[InvaderSpan],
    stage: &StageBounds,
    drop_applied: bool,
) -> Proposal {
    for transition in TRANSITIONS.iter().filter(|t| t.from == state) {
        match transition.guard {
            Guard::DropApplied => {
                if drop_applied {
                    return Proposal {
                        next: transition.to,
                        trigger: None,
                    };
                }
            }
            guard => {
                if let Some(index) = first_trigger(guard, spans, stage) {
                    return Proposal {
                        next: transition.to,
                        trigger: Some(index),
                    };
                }
            }
        }
    }

    Proposal {
        next: state,
        trigger: None,
    }
}

/// Per-invader displacement applied by one move in `state`.
/// Returns (dx, dy); y grows upward so drops are negative.
pub fn displacement(state: MovementState, step: f64) -> (f64, f64) {
    match state {
        MovementState::MovingRight => (step, 0.0),
        MovementState::MovingLeft => (-step, 0.0),
        MovementState::DropThenLeft | MovementState::DropThenRight => (0.0, -step),
        MovementState::Idle => (0.0, 0.0),
    }
}
