//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What an entity is. Doubles as the name tag the collision collaborator
/// reports with each contact body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Invader,
    ShipBullet,
    InvaderBullet,
}

impl EntityKind {
    /// Stable name tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Ship => "ship",
            EntityKind::Invader => "invader",
            EntityKind::ShipBullet => "shipFiredBullet",
            EntityKind::InvaderBullet => "invaderFiredBullet",
        }
    }

    /// Bullets are ephemeral; ship and invaders live for the whole round.
    pub fn is_bullet(self) -> bool {
        matches!(self, EntityKind::ShipBullet | EntityKind::InvaderBullet)
    }
}

/// Formation movement state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementState {
    #[default]
    MovingRight,
    MovingLeft,
    /// Drop one step, then head left. Lasts for a single move application.
    DropThenLeft,
    /// Drop one step, then head right. Lasts for a single move application.
    DropThenRight,
    /// No displacement.
    Idle,
}

impl MovementState {
    pub fn is_drop(self) -> bool {
        matches!(self, MovementState::DropThenLeft | MovementState::DropThenRight)
    }
}

/// Invader appearance class, assigned per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvaderType {
    A,
    B,
    C,
}

impl InvaderType {
    /// Type for a 1-based formation row: every third row is A, rows after
    /// a multiple of three are B, the rest are C.
    pub fn for_row(row: u32) -> Self {
        match row % 3 {
            0 => InvaderType::A,
            1 => InvaderType::B,
            _ => InvaderType::C,
        }
    }
}

/// Who fired a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletType {
    ShipFired,
    InvaderFired,
}

impl BulletType {
    pub fn kind(self) -> EntityKind {
        match self {
            BulletType::ShipFired => EntityKind::ShipBullet,
            BulletType::InvaderFired => EntityKind::InvaderBullet,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round has been started yet.
    #[default]
    Idle,
    Active,
    Paused,
}

/// How a round ended, derived from registry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Every invader has been destroyed.
    Cleared,
    /// The ship has been destroyed.
    ShipDestroyed,
}
