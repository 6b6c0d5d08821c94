//! Entity spawn factories for setting up a round.
//!
//! Creates the invader formation, the ship and bullets with the
//! appropriate component bundles.

use invaders_core::components::{BulletFlight, InvaderClass, ShipDrive};
use invaders_core::config::GameRules;
use invaders_core::enums::{BulletType, EntityKind, InvaderType};
use invaders_core::types::Position;

use crate::registry::{EntityId, EntityRegistry};

/// Set up a fresh round: the invader grid and the ship.
pub fn setup_round(registry: &mut EntityRegistry, rules: &GameRules) {
    spawn_formation(registry, rules);
    spawn_ship(registry, rules);
}

/// Spawn the invader grid, bottom row first, left to right.
///
/// Rows are placed on a pitch of twice the invader height above the base
/// origin; columns step by invader width plus grid spacing.
pub fn spawn_formation(registry: &mut EntityRegistry, rules: &GameRules) -> Vec<EntityId> {
    let base_x = rules.invader_base_origin_x();
    let col_pitch = rules.invader_size.width + rules.invader_grid_spacing.width;
    let row_pitch = rules.invader_size.height * 2.0;

    let mut spawned = Vec::with_capacity((rules.invader_rows * rules.invader_cols) as usize);
    for row in 1..=rules.invader_rows {
        let invader_type = InvaderType::for_row(row);
        let y = row as f64 * row_pitch + rules.invader_base_origin_y;
        for col in 0..rules.invader_cols {
            let x = base_x + col as f64 * col_pitch;
            spawned.push(spawn_invader(
                registry,
                rules,
                Position::new(x, y),
                invader_type,
            ));
        }
    }
    spawned
}

pub fn spawn_invader(
    registry: &mut EntityRegistry,
    rules: &GameRules,
    position: Position,
    invader_type: InvaderType,
) -> EntityId {
    let entity = registry.spawn(EntityKind::Invader, position, rules.invader_size);
    registry.insert(entity, InvaderClass(invader_type));
    entity
}

/// Spawn the ship centered at the bottom of the stage.
pub fn spawn_ship(registry: &mut EntityRegistry, rules: &GameRules) -> EntityId {
    let position = Position::new(rules.stage.width / 2.0, rules.ship_size.height / 2.0);
    let entity = registry.spawn(EntityKind::Ship, position, rules.ship_size);
    registry.insert(entity, ShipDrive::default());
    entity
}

/// Spawn a bullet flying from `origin` to `destination` over `travel_secs`.
pub fn spawn_bullet(
    registry: &mut EntityRegistry,
    rules: &GameRules,
    bullet_type: BulletType,
    origin: Position,
    destination: Position,
    launched_at: f64,
    travel_secs: f64,
) -> EntityId {
    let entity = registry.spawn(bullet_type.kind(), origin, rules.bullet_size);
    registry.insert(
        entity,
        BulletFlight {
            origin,
            destination,
            launched_at,
            travel_secs,
            linger_secs: rules.bullet_linger_secs,
        },
    );
    entity
}
