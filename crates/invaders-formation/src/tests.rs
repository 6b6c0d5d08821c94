#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use invaders_core::enums::MovementState;

    use crate::director::MovementDirector;
    use crate::fsm::*;

    const STAGE: StageBounds = StageBounds {
        width: 320.0,
        edge_margin: 1.0,
    };

    fn span_at(center_x: f64) -> InvaderSpan {
        InvaderSpan::new(center_x - 12.0, center_x + 12.0)
    }

    /// Six columns laid out the way a round starts.
    fn starting_row() -> Vec<InvaderSpan> {
        (0..6)
            .map(|col| span_at(320.0 / 3.0 + col as f64 * 36.0))
            .collect()
    }

    fn director() -> MovementDirector {
        MovementDirector::new(1.0, 10.0, STAGE)
    }

    // ---- Transition table ----

    #[test]
    fn test_right_edge_proposes_drop_then_left() {
        let spans = vec![span_at(100.0), InvaderSpan::new(295.5, 319.5)];
        let proposal = propose(MovementState::MovingRight, &spans, &STAGE, false);
        assert_eq!(proposal.next, MovementState::DropThenLeft);
        assert_eq!(proposal.trigger, Some(1));
    }

    #[test]
    fn test_right_edge_threshold_is_inclusive() {
        let at = vec![InvaderSpan::new(295.0, 319.0)];
        let short = vec![InvaderSpan::new(294.9, 318.9)];
        assert_eq!(
            propose(MovementState::MovingRight, &at, &STAGE, false).next,
            MovementState::DropThenLeft
        );
        assert_eq!(
            propose(MovementState::MovingRight, &short, &STAGE, false).next,
            MovementState::MovingRight
        );
    }

    #[test]
    fn test_left_edge_proposes_drop_then_right() {
        let spans = vec![span_at(200.0), InvaderSpan::new(1.0, 25.0)];
        let proposal = propose(MovementState::MovingLeft, &spans, &STAGE, false);
        assert_eq!(proposal.next, MovementState::DropThenRight);
        assert_eq!(proposal.trigger, Some(1));
    }

    #[test]
    fn test_left_edge_ignored_while_moving_right() {
        let spans = vec![InvaderSpan::new(0.0, 24.0)];
        let proposal = propose(MovementState::MovingRight, &spans, &STAGE, false);
        assert_eq!(proposal.next, MovementState::MovingRight);
        assert_eq!(proposal.trigger, None);
    }

    #[test]
    fn test_drop_states_resolve_after_drop() {
        let spans = starting_row();
        assert_eq!(
            propose(MovementState::DropThenLeft, &spans, &STAGE, true).next,
            MovementState::MovingLeft
        );
        assert_eq!(
            propose(MovementState::DropThenRight, &spans, &STAGE, true).next,
            MovementState::MovingRight
        );
        // Until the drop has been applied the state holds.
        assert_eq!(
            propose(MovementState::DropThenLeft, &spans, &STAGE, false).next,
            MovementState::DropThenLeft
        );
    }

    #[test]
    fn test_drop_resolves_even_with_empty_formation() {
        assert_eq!(
            propose(MovementState::DropThenRight, &[], &STAGE, true).next,
            MovementState::MovingRight
        );
    }

    #[test]
    fn test_idle_never_transitions() {
        let spans = vec![InvaderSpan::new(0.0, 320.0)];
        for drop_applied in [false, true] {
            let proposal = propose(MovementState::Idle, &spans, &STAGE, drop_applied);
            assert_eq!(proposal.next, MovementState::Idle);
        }
    }

    #[test]
    fn test_first_trigger_is_first_in_scan_order() {
        let spans = vec![
            span_at(150.0),
            InvaderSpan::new(300.0, 324.0),
            InvaderSpan::new(310.0, 334.0),
        ];
        assert_eq!(first_trigger(Guard::AnyAtRightEdge, &spans, &STAGE), Some(1));
        assert_eq!(first_trigger(Guard::AnyAtLeftEdge, &spans, &STAGE), None);
        assert_eq!(first_trigger(Guard::DropApplied, &spans, &STAGE), None);
    }

    #[test]
    fn test_empty_formation_never_turns() {
        for state in [MovementState::MovingRight, MovementState::MovingLeft] {
            assert_eq!(propose(state, &[], &STAGE, false).next, state);
        }
    }

    #[test]
    fn test_table_has_one_row_per_moving_state() {
        for state in [
            MovementState::MovingRight,
            MovementState::MovingLeft,
            MovementState::DropThenLeft,
            MovementState::DropThenRight,
        ] {
            assert_eq!(TRANSITIONS.iter().filter(|t| t.from == state).count(), 1);
        }
        assert!(TRANSITIONS.iter().all(|t| t.from != MovementState::Idle));
    }

    #[test]
    fn test_displacement_per_state() {
        assert_eq!(displacement(MovementState::MovingRight, 10.0), (10.0, 0.0));
        assert_eq!(displacement(MovementState::MovingLeft, 10.0), (-10.0, 0.0));
        assert_eq!(displacement(MovementState::DropThenLeft, 10.0), (0.0, -10.0));
        assert_eq!(displacement(MovementState::DropThenRight, 10.0), (0.0, -10.0));
        assert_eq!(displacement(MovementState::Idle, 10.0), (0.0, 0.0));
    }

    // ---- Director ----

    #[test]
    fn test_gated_frame_does_not_move() {
        let mut director = director();
        let decision = director.evaluate(0.5, &starting_row());
        assert!(!decision.should_move);
        assert_eq!(decision.dx, 0.0);
        assert_eq!(decision.dy, 0.0);
        assert_eq!(director.time_of_last_move(), 0.0);
    }

    #[test]
    fn test_move_due_after_interval() {
        let mut director = director();
        let decision = director.evaluate(1.0, &starting_row());
        assert!(decision.should_move);
        assert_eq!(decision.direction, MovementState::MovingRight);
        assert_relative_eq!(decision.dx, 10.0);
        assert_relative_eq!(director.time_of_last_move(), 1.0);

        // Next move only one full interval later.
        assert!(!director.evaluate(1.9, &starting_row()).should_move);
        assert!(director.evaluate(2.0, &starting_row()).should_move);
    }

    #[test]
    fn test_empty_formation_is_noop() {
        let mut director = director();
        let decision = director.evaluate(5.0, &[]);
        assert!(!decision.should_move);
        assert_eq!(decision.next, MovementState::MovingRight);
        assert_eq!(director.time_of_last_move(), 0.0);
    }

    #[test]
    fn test_lookahead_runs_on_gated_frames() {
        let mut director = director();
        let spans = vec![InvaderSpan::new(295.5, 319.5)];
        let decision = director.evaluate(0.25, &spans);
        assert!(!decision.should_move);
        assert_eq!(director.state(), MovementState::DropThenLeft);
    }

    #[test]
    fn test_right_edge_scenario_drop_then_left() {
        let mut director = director();
        let mut spans = vec![span_at(200.0), InvaderSpan::new(295.5, 319.5)];

        // Edge within half a point of the stage bound: next evaluation drops.
        let first = director.evaluate(0.5, &spans);
        assert_eq!(first.next, MovementState::DropThenLeft);

        // The drop pass commits the lateral direction.
        let drop = director.evaluate(1.0, &spans);
        assert!(drop.should_move);
        assert_eq!(drop.direction, MovementState::DropThenLeft);
        assert_eq!(drop.dx, 0.0);
        assert_relative_eq!(drop.dy, -10.0);
        assert_eq!(drop.next, MovementState::MovingLeft);

        for span in &mut spans {
            *span = span.shifted(drop.dx);
        }
        let after = director.evaluate(2.0, &spans);
        assert_eq!(after.direction, MovementState::MovingLeft);
        assert_relative_eq!(after.dx, -10.0);
    }

    #[test]
    fn test_halt_and_reset() {
        let mut director = director();
        director.halt();
        let decision = director.evaluate(3.0, &starting_row());
        assert!(decision.should_move);
        assert_eq!(decision.direction, MovementState::Idle);
        assert_eq!((decision.dx, decision.dy), (0.0, 0.0));

        director.reset(10.0);
        assert_eq!(director.state(), MovementState::MovingRight);
        assert!(!director.evaluate(10.5, &starting_row()).should_move);
    }

    #[test]
    fn test_sweep_never_repeats_a_drop() {
        let mut director = director();
        let mut spans = starting_row();
        let mut applied = Vec::new();

        // Ten frames per move interval, long enough for several sweeps.
        for frame in 1..=2000 {
            let t = frame as f64 * 0.1;
            let decision = director.evaluate(t, &spans);
            if decision.should_move {
                for span in &mut spans {
                    *span = span.shifted(decision.dx);
                }
                applied.push(decision.direction);
            }
        }

        let drops = applied.iter().filter(|d| d.is_drop()).count();
        assert!(drops >= 4, "expected several sweeps, saw {drops} drops");

        for pair in applied.windows(2) {
            match pair[0] {
                MovementState::DropThenLeft => assert_eq!(pair[1], MovementState::MovingLeft),
                MovementState::DropThenRight => assert_eq!(pair[1], MovementState::MovingRight),
                _ => {}
            }
        }

        // The formation overshoots an edge by at most one step.
        for span in &spans {
            assert!(span.min_x >= -10.0 && span.max_x <= STAGE.width + 10.0);
        }
    }
}
