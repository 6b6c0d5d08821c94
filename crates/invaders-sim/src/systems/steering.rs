//! Steering system: turns the steering value into lateral ship motion.
//!
//! Force outside the deadzone accelerates the ship (a = F / m); velocity is
//! capped and integrated at the fixed tick. The ship stops at the stage edge.

use invaders_core::components::ShipDrive;
use invaders_core::config::GameRules;
use invaders_core::constants::DT;
use invaders_core::enums::EntityKind;
use invaders_core::types::Position;

use crate::input::steering_force;
use crate::registry::EntityRegistry;

/// Apply one frame of steering. Returns the force applied, `None` inside
/// the deadzone or without a live ship.
pub fn run(registry: &mut EntityRegistry, steering: f64, rules: &GameRules) -> Option<f64> {
    let ship = registry.first(EntityKind::Ship)?;
    let position = registry.position(ship)?;
    let half_width = registry.size(ship)?.half_width();
    let force = steering_force(steering, rules.steering_deadzone, rules.steering_force_scale);

    let x = {
        let mut drive = registry.component_mut::<ShipDrive>(ship)?;
        drive.applied_force = force;
        if let Some(force) = force {
            drive.velocity_x += force / rules.ship_mass * DT;
        }
        drive.velocity_x = drive
            .velocity_x
            .clamp(-rules.ship_max_speed, rules.ship_max_speed);

        let mut x = position.x + drive.velocity_x * DT;
        if x - half_width < 0.0 {
            x = half_width;
            drive.velocity_x = 0.0;
        } else if x + half_width > rules.stage.width {
            x = rules.stage.width - half_width;
            drive.velocity_x = 0.0;
        }
        x
    };

    registry.set_position(ship, Position::new(x, position.y));
    force
}
