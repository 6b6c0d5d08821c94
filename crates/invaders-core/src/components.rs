//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, not
//! components; the few helpers here are pure accessors.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, Size};

/// Identity shared by every entity: its kind, bounds and liveness.
/// Position is a separate component so kinematic systems can query it alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub kind: EntityKind,
    pub size: Size,
    /// Cleared when the entity is removed; the record is purged at end of frame.
    pub alive: bool,
}

/// Appearance class of an invader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InvaderClass(pub InvaderType);

/// Straight-line tween of a bullet toward its destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletFlight {
    pub origin: Position,
    pub destination: Position,
    /// Simulation time the bullet was fired.
    pub launched_at: f64,
    /// Seconds to reach the destination.
    pub travel_secs: f64,
    /// Seconds to wait at the destination before removal.
    pub linger_secs: f64,
}

impl BulletFlight {
    /// Position along the flight at `current_time`.
    pub fn position_at(&self, current_time: f64) -> Position {
        let progress = (current_time - self.launched_at) / self.travel_secs;
        self.origin.lerp(&self.destination, progress)
    }

    /// Whether the bullet has arrived and finished lingering.
    pub fn is_expired(&self, current_time: f64) -> bool {
        current_time >= self.launched_at + self.travel_secs + self.linger_secs
    }
}

/// Lateral motion state of the ship.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipDrive {
    /// Lateral velocity (points per second, positive = right).
    pub velocity_x: f64,
    /// Force applied on the last frame, `None` inside the deadzone.
    pub applied_force: Option<f64>,
}

bitflags! {
    /// Contact categories handed to the collision collaborator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ContactCategory: u32 {
        const INVADER = 1 << 0;
        const SHIP_FIRED_BULLET = 1 << 1;
        const SHIP = 1 << 2;
        const SCENE_EDGE = 1 << 3;
        const INVADER_FIRED_BULLET = 1 << 4;
    }
}

/// Category of a body plus the categories it wants contact reports against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMask {
    pub category: ContactCategory,
    pub contact_test: ContactCategory,
    /// Categories the body physically collides with (the ship stops at the
    /// scene edge; nothing else collides).
    pub collision: ContactCategory,
}

impl ContactMask {
    /// Mask for an entity of the given kind.
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Ship => Self {
                category: ContactCategory::SHIP,
                contact_test: ContactCategory::empty(),
                collision: ContactCategory::SCENE_EDGE,
            },
            EntityKind::Invader => Self {
                category: ContactCategory::INVADER,
                contact_test: ContactCategory::empty(),
                collision: ContactCategory::empty(),
            },
            EntityKind::ShipBullet => Self {
                category: ContactCategory::SHIP_FIRED_BULLET,
                contact_test: ContactCategory::INVADER,
                collision: ContactCategory::empty(),
            },
            EntityKind::InvaderBullet => Self {
                category: ContactCategory::INVADER_FIRED_BULLET,
                contact_test: ContactCategory::SHIP,
                collision: ContactCategory::empty(),
            },
        }
    }

    /// Whether a contact between the two bodies should be reported.
    /// Either side asking for the other's category is enough.
    pub fn tests_against(&self, other: &ContactMask) -> bool {
        self.contact_test.intersects(other.category)
            || other.contact_test.intersects(self.category)
    }
}
