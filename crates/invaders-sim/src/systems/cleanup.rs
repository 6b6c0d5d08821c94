//! Cleanup system: drops the records of entities removed this frame.

use crate::registry::EntityRegistry;

/// Despawn every removed entity. Runs once at the end of each frame, after
/// contacts are resolved, so removals made during the frame stay readable
/// until then.
pub fn run(registry: &mut EntityRegistry) -> usize {
    registry.purge()
}
