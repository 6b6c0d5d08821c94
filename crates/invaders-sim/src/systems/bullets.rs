//! Bullet controller: spawning, targeting and flight of both bullet kinds.
//!
//! At most one live bullet of each kind exists at a time; a fire attempt
//! while one is in flight does nothing.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::BulletFlight;
use invaders_core::config::GameRules;
use invaders_core::enums::{BulletType, EntityKind};
use invaders_core::events::AudioEvent;
use invaders_core::types::Position;

use crate::registry::{EntityId, EntityRegistry};
use crate::world_setup::spawn_bullet;

/// Fire a bullet straight up from the ship.
pub fn fire_ship(
    registry: &mut EntityRegistry,
    rules: &GameRules,
    current_time: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> Option<EntityId> {
    if registry.count(EntityKind::ShipBullet) > 0 {
        return None;
    }
    let ship = registry.first(EntityKind::Ship)?;
    let ship_pos = registry.position(ship)?;
    let ship_size = registry.size(ship)?;
    let half_bullet = rules.bullet_size.half_height();

    let origin = Position::new(ship_pos.x, ship_pos.y + ship_size.height - half_bullet);
    let destination = Position::new(ship_pos.x, rules.stage.height + half_bullet);
    let bullet = spawn_bullet(
        registry,
        rules,
        BulletType::ShipFired,
        origin,
        destination,
        current_time,
        rules.ship_bullet_travel_secs,
    );
    audio_events.push(AudioEvent::ShipFired);
    log::debug!("ship fired at x={:.1}", origin.x);
    Some(bullet)
}

/// Fire a bullet straight down from one live invader chosen uniformly at
/// random.
pub fn fire_invader(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    rules: &GameRules,
    current_time: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> Option<EntityId> {
    if registry.count(EntityKind::InvaderBullet) > 0 {
        return None;
    }
    let invaders = registry.live(EntityKind::Invader);
    if invaders.is_empty() {
        return None;
    }
    let shooter = invaders[rng.gen_range(0..invaders.len())];
    let shooter_pos = registry.position(shooter)?;
    let shooter_size = registry.size(shooter)?;
    let half_bullet = rules.bullet_size.half_height();

    let origin = Position::new(
        shooter_pos.x,
        shooter_pos.y - shooter_size.half_height() + half_bullet,
    );
    let destination = Position::new(shooter_pos.x, -half_bullet);
    let bullet = spawn_bullet(
        registry,
        rules,
        BulletType::InvaderFired,
        origin,
        destination,
        current_time,
        rules.invader_bullet_travel_secs,
    );
    audio_events.push(AudioEvent::InvaderFired);
    log::debug!("invader fired at x={:.1}", origin.x);
    Some(bullet)
}

/// Move every live bullet along its flight and remove the ones that have
/// arrived and lingered. Returns the number removed.
pub fn advance(registry: &mut EntityRegistry, current_time: f64) -> usize {
    let mut bullets: Vec<EntityId> = registry.live(EntityKind::ShipBullet).to_vec();
    bullets.extend_from_slice(registry.live(EntityKind::InvaderBullet));

    let mut expired = 0;
    for bullet in bullets {
        let Some(flight) = registry.component::<BulletFlight>(bullet).map(|f| *f) else {
            continue;
        };
        if flight.is_expired(current_time) {
            registry.remove(bullet);
            expired += 1;
        } else {
            registry.set_position(bullet, flight.position_at(current_time));
        }
    }
    expired
}
