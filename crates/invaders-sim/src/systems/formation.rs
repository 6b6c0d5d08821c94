//! Formation system: asks the movement director for this frame's decision
//! and displaces every live invader when a move is due.

use invaders_core::enums::EntityKind;
use invaders_formation::director::{MovementDecision, MovementDirector};
use invaders_formation::fsm::InvaderSpan;

use crate::registry::{EntityId, EntityRegistry};

/// Run the formation for one frame.
pub fn run(
    registry: &mut EntityRegistry,
    director: &mut MovementDirector,
    current_time: f64,
) -> MovementDecision {
    let invaders: Vec<EntityId> = registry.live(EntityKind::Invader).to_vec();
    let spans: Vec<InvaderSpan> = invaders
        .iter()
        .filter_map(|&invader| registry.frame(invader))
        .map(|frame| InvaderSpan::new(frame.min_x, frame.max_x))
        .collect();

    let decision = director.evaluate(current_time, &spans);

    if decision.should_move {
        for invader in invaders {
            if let Some(pos) = registry.position(invader) {
                registry.set_position(invader, pos.offset(decision.dx, decision.dy));
            }
        }
    }
    decision
}
