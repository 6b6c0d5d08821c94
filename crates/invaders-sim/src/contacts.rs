//! Contact pairs reported by the collision collaborator.
//!
//! Pairs may be queued from any thread, any number of times per frame. The
//! simulation drains the queue once per frame; every drained pair is
//! discarded whether or not it had an effect.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use invaders_core::enums::EntityKind;
use invaders_core::state::EntityView;

use crate::registry::EntityId;

/// One side of a contact: the entity and the tag it was reported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBody {
    pub entity: EntityId,
    pub tag: EntityKind,
}

impl ContactBody {
    pub fn new(entity: EntityId, tag: EntityKind) -> Self {
        Self { entity, tag }
    }

    /// Body for an entity seen in a snapshot.
    pub fn from_view(view: &EntityView) -> Option<Self> {
        Some(Self {
            entity: EntityId::from_bits(view.id)?,
            tag: view.kind,
        })
    }
}

/// A detected overlap between two bodies. Order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    pub body_a: ContactBody,
    pub body_b: ContactBody,
}

impl ContactPair {
    pub fn new(body_a: ContactBody, body_b: ContactBody) -> Self {
        Self { body_a, body_b }
    }

    /// Whether either body carries `tag`.
    pub fn involves(&self, tag: EntityKind) -> bool {
        self.body_a.tag == tag || self.body_b.tag == tag
    }
}

/// What a contact means for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactClass {
    /// An invader bullet reached the ship.
    ShipHit,
    /// A ship bullet reached an invader.
    InvaderHit,
    /// Any other combination; never acted upon.
    Unclassified,
}

/// Classify a pair by the set of its tags.
pub fn classify(pair: &ContactPair) -> ContactClass {
    if pair.involves(EntityKind::Ship) && pair.involves(EntityKind::InvaderBullet) {
        ContactClass::ShipHit
    } else if pair.involves(EntityKind::Invader) && pair.involves(EntityKind::ShipBullet) {
        ContactClass::InvaderHit
    } else {
        ContactClass::Unclassified
    }
}

/// Thread-safe pending contact list. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct ContactQueue {
    pending: Arc<Mutex<Vec<ContactPair>>>,
}

impl ContactQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, pair: ContactPair) {
        self.lock().push(pair);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take every pair queued so far, in report order.
    pub fn drain(&self) -> Vec<ContactPair> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ContactPair>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
