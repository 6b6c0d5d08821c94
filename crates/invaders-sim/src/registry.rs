//! Entity registry: the hecs world as the arena, plus an index of live
//! entities per kind kept in spawn order.
//!
//! Removal is two-step. `remove` marks the entity dead and detaches it from
//! the kind index immediately, so later lookups this frame skip it; `purge`
//! despawns the dead records at the end of the frame.

use std::collections::HashMap;

use hecs::{Component, Entity, Ref, RefMut, World};

use invaders_core::components::{Body, ContactMask};
use invaders_core::enums::EntityKind;
use invaders_core::types::{Position, Rect, Size};

/// Identifier of an entity in the registry.
pub type EntityId = Entity;

/// Owns every entity record of a round.
#[derive(Default)]
pub struct EntityRegistry {
    world: World,
    index: HashMap<EntityKind, Vec<Entity>>,
    removed: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a live entity of `kind` centered on `position`.
    pub fn spawn(&mut self, kind: EntityKind, position: Position, size: Size) -> EntityId {
        let entity = self.world.spawn((
            Body {
                kind,
                size,
                alive: true,
            },
            position,
            ContactMask::for_kind(kind),
        ));
        self.index.entry(kind).or_default().push(entity);
        entity
    }

    /// Attach an extra component. Returns false if the entity is unknown.
    pub fn insert<C: Component>(&mut self, entity: EntityId, component: C) -> bool {
        self.world.insert_one(entity, component).is_ok()
    }

    /// Whether the entity exists and has not been removed.
    pub fn is_attached(&self, entity: EntityId) -> bool {
        self.world
            .get::<&Body>(entity)
            .map(|body| body.alive)
            .unwrap_or(false)
    }

    pub fn kind_of(&self, entity: EntityId) -> Option<EntityKind> {
        self.world.get::<&Body>(entity).ok().map(|body| body.kind)
    }

    /// Live entities of `kind`, in spawn order.
    pub fn live(&self, kind: EntityKind) -> &[EntityId] {
        self.index.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.live(kind).len()
    }

    /// First live entity of `kind`, if any.
    pub fn first(&self, kind: EntityKind) -> Option<EntityId> {
        self.live(kind).first().copied()
    }

    pub fn position(&self, entity: EntityId) -> Option<Position> {
        self.world.get::<&Position>(entity).ok().map(|pos| *pos)
    }

    pub fn set_position(&mut self, entity: EntityId, position: Position) {
        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
            *pos = position;
        }
    }

    pub fn size(&self, entity: EntityId) -> Option<Size> {
        self.world.get::<&Body>(entity).ok().map(|body| body.size)
    }

    /// Axis-aligned frame of the entity.
    pub fn frame(&self, entity: EntityId) -> Option<Rect> {
        Some(Rect::centered(self.position(entity)?, self.size(entity)?))
    }

    pub fn component<T: Component>(&self, entity: EntityId) -> Option<Ref<'_, T>> {
        self.world.get::<&T>(entity).ok()
    }

    pub fn component_mut<T: Component>(&self, entity: EntityId) -> Option<RefMut<'_, T>> {
        self.world.get::<&mut T>(entity).ok()
    }

    /// Mark the entity dead and detach it from the kind index.
    /// Returns false if it was already removed or never existed.
    pub fn remove(&mut self, entity: EntityId) -> bool {
        let kind = match self.world.get::<&mut Body>(entity) {
            Ok(mut body) if body.alive => {
                body.alive = false;
                body.kind
            }
            _ => return false,
        };
        if let Some(live) = self.index.get_mut(&kind) {
            live.retain(|&e| e != entity);
        }
        self.removed.push(entity);
        true
    }

    /// Despawn every entity removed since the last purge.
    /// Returns how many records were dropped.
    pub fn purge(&mut self) -> usize {
        let mut purged = 0;
        for entity in self.removed.drain(..) {
            if self.world.despawn(entity).is_ok() {
                purged += 1;
            }
        }
        purged
    }

    /// Drop every entity.
    pub fn clear(&mut self) {
        self.world.clear();
        self.index.clear();
        self.removed.clear();
    }

    /// Read-only access to the underlying world.
    pub fn world(&self) -> &World {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_invaders(count: usize) -> (EntityRegistry, Vec<EntityId>) {
        let mut registry = EntityRegistry::new();
        let ids = (0..count)
            .map(|i| {
                registry.spawn(
                    EntityKind::Invader,
                    Position::new(i as f64 * 10.0, 0.0),
                    Size::new(4.0, 4.0),
                )
            })
            .collect();
        (registry, ids)
    }

    #[test]
    fn test_kind_index_keeps_spawn_order() {
        let (mut registry, ids) = registry_with_invaders(4);
        registry.spawn(EntityKind::Ship, Position::default(), Size::new(30.0, 16.0));
        assert_eq!(registry.live(EntityKind::Invader), ids.as_slice());
        assert_eq!(registry.count(EntityKind::Ship), 1);
        assert_eq!(registry.count(EntityKind::ShipBullet), 0);
    }

    #[test]
    fn test_remove_detaches_before_purge() {
        let (mut registry, ids) = registry_with_invaders(3);
        assert!(registry.remove(ids[1]));
        assert!(!registry.is_attached(ids[1]));
        assert_eq!(registry.live(EntityKind::Invader), &[ids[0], ids[2]]);
        // Dead record still readable until purge.
        assert!(registry.world().contains(ids[1]));
        assert_eq!(registry.kind_of(ids[1]), Some(EntityKind::Invader));

        assert_eq!(registry.purge(), 1);
        assert!(!registry.world().contains(ids[1]));
        assert_eq!(registry.purge(), 0);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let (mut registry, ids) = registry_with_invaders(1);
        assert!(registry.remove(ids[0]));
        assert!(!registry.remove(ids[0]));
        registry.purge();
        assert!(!registry.remove(ids[0]));
        assert!(!registry.is_attached(ids[0]));
    }

    #[test]
    fn test_frame_from_position_and_size() {
        let (registry, ids) = registry_with_invaders(2);
        let frame = registry.frame(ids[1]).unwrap();
        assert_eq!(frame.min_x, 8.0);
        assert_eq!(frame.max_x, 12.0);
    }

    #[test]
    fn test_clear_drops_everything() {
        let (mut registry, ids) = registry_with_invaders(5);
        registry.clear();
        assert_eq!(registry.count(EntityKind::Invader), 0);
        assert!(!registry.is_attached(ids[0]));
    }
}
