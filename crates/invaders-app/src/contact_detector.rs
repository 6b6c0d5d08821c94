//! Overlap detection between the bodies of a snapshot.
//!
//! Reports a pair only when one body's contact mask asks for the other's
//! category and their frames intersect. Nothing is reported outside an
//! active round.

use invaders_core::components::ContactMask;
use invaders_core::enums::GamePhase;
use invaders_core::state::{EntityView, GameStateSnapshot};
use invaders_core::types::Rect;
use invaders_sim::contacts::{ContactBody, ContactPair};

/// Every reportable overlapping pair in the snapshot.
pub fn detect(snapshot: &GameStateSnapshot) -> Vec<ContactPair> {
    if snapshot.phase != GamePhase::Active {
        return Vec::new();
    }
    let bodies: Vec<(&EntityView, ContactMask, Rect)> = snapshot
        .entities
        .iter()
        .map(|view| {
            (
                view,
                ContactMask::for_kind(view.kind),
                Rect::centered(view.position, view.size),
            )
        })
        .collect();

    let mut pairs = Vec::new();
    for (i, (view_a, mask_a, frame_a)) in bodies.iter().enumerate() {
        for (view_b, mask_b, frame_b) in &bodies[i + 1..] {
            if !mask_a.tests_against(mask_b) || !frame_a.intersects(frame_b) {
                continue;
            }
            match (ContactBody::from_view(view_a), ContactBody::from_view(view_b)) {
                (Some(a), Some(b)) => pairs.push(ContactPair::new(a, b)),
                _ => log::warn!("snapshot id {} or {} is not an entity", view_a.id, view_b.id),
            }
        }
    }
    pairs
}
