#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{BulletFlight, ContactCategory, ContactMask};
    use crate::config::{ConfigError, GameRules};
    use crate::enums::*;
    use crate::events::{AudioEvent, ScoreEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, Rect, SimTime, Size};

    // ---- Rules ----

    #[test]
    fn test_default_rules_are_valid() {
        let rules = GameRules::default();
        assert!(rules.validate().is_ok());
        assert_eq!(rules.invader_rows * rules.invader_cols, 36);
    }

    #[test]
    fn test_partial_rules_fill_defaults() {
        let rules = GameRules::from_json_str(r#"{ "invader_rows": 2, "time_per_move": 0.5 }"#)
            .unwrap();
        assert_eq!(rules.invader_rows, 2);
        assert_eq!(rules.time_per_move, 0.5);
        assert_eq!(rules.invader_cols, GameRules::default().invader_cols);
        assert_eq!(rules.stage, GameRules::default().stage);
    }

    #[test]
    fn test_rules_reject_bad_deadzone() {
        let err = GameRules::from_json_str(r#"{ "steering_deadzone": 1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "steering_deadzone",
                ..
            }
        ));
    }

    #[test]
    fn test_rules_reject_zero_move_interval() {
        let err = GameRules::from_json_str(r#"{ "time_per_move": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "time_per_move",
                ..
            }
        ));
    }

    #[test]
    fn test_rules_reject_empty_grid() {
        let err = GameRules::from_json_str(r#"{ "invader_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "invader_cols", .. }));
    }

    fn rejected_field(json: &str) -> &'static str {
        match GameRules::from_json_str(json) {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected invalid rules for {json}, got {other:?}"),
        }
    }

    #[test]
    fn test_rules_reject_negative_max_speed() {
        assert_eq!(rejected_field(r#"{ "ship_max_speed": -5.0 }"#), "ship_max_speed");
        assert_eq!(rejected_field(r#"{ "ship_max_speed": 0.0 }"#), "ship_max_speed");
    }

    #[test]
    fn test_rules_reject_zero_formation_step() {
        assert_eq!(rejected_field(r#"{ "formation_step": 0.0 }"#), "formation_step");
    }

    #[test]
    fn test_rules_reject_negative_edge_margin() {
        assert_eq!(
            rejected_field(r#"{ "formation_edge_margin": -1.0 }"#),
            "formation_edge_margin"
        );
        let flush = GameRules::from_json_str(r#"{ "formation_edge_margin": 0.0 }"#);
        assert!(flush.is_ok());
    }

    #[test]
    fn test_rules_reject_negative_force_scale() {
        assert_eq!(
            rejected_field(r#"{ "steering_force_scale": -40.0 }"#),
            "steering_force_scale"
        );
    }

    #[test]
    fn test_rules_reject_zero_max_health() {
        assert_eq!(rejected_field(r#"{ "ship_max_health": 0.0 }"#), "ship_max_health");
    }

    #[test]
    fn test_rules_reject_negative_damage() {
        assert_eq!(
            rejected_field(r#"{ "ship_damage_per_hit": -0.334 }"#),
            "ship_damage_per_hit"
        );
    }

    #[test]
    fn test_rules_malformed_json() {
        let err = GameRules::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rules_missing_file() {
        let err = GameRules::load("/definitely/not/here/rules.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Geometry ----

    #[test]
    fn test_rect_centered() {
        let rect = Rect::centered(Position::new(100.0, 50.0), Size::new(24.0, 16.0));
        assert_eq!(rect.min_x, 88.0);
        assert_eq!(rect.max_x, 112.0);
        assert_eq!(rect.min_y, 42.0);
        assert_eq!(rect.max_y, 58.0);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::centered(Position::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Rect::centered(Position::new(9.0, 0.0), Size::new(10.0, 10.0));
        let c = Rect::centered(Position::new(20.0, 0.0), Size::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_lerp_clamps() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.0, 100.0);
        assert_eq!(a.lerp(&b, 0.25).y, 25.0);
        assert_eq!(a.lerp(&b, 2.0).y, 100.0);
        assert_eq!(a.lerp(&b, -1.0).y, 0.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Components ----

    #[test]
    fn test_bullet_flight_progress_and_expiry() {
        let flight = BulletFlight {
            origin: Position::new(10.0, 0.0),
            destination: Position::new(10.0, 100.0),
            launched_at: 2.0,
            travel_secs: 1.0,
            linger_secs: 0.05,
        };
        assert_eq!(flight.position_at(2.5).y, 50.0);
        assert_eq!(flight.position_at(3.02).y, 100.0);
        assert!(!flight.is_expired(3.02));
        assert!(flight.is_expired(3.1));
    }

    #[test]
    fn test_contact_masks_pair_only_opposing_fire() {
        let ship = ContactMask::for_kind(EntityKind::Ship);
        let invader = ContactMask::for_kind(EntityKind::Invader);
        let ship_bullet = ContactMask::for_kind(EntityKind::ShipBullet);
        let invader_bullet = ContactMask::for_kind(EntityKind::InvaderBullet);

        assert!(ship_bullet.tests_against(&invader));
        assert!(invader.tests_against(&ship_bullet));
        assert!(invader_bullet.tests_against(&ship));

        assert!(!ship_bullet.tests_against(&ship));
        assert!(!invader_bullet.tests_against(&invader));
        assert!(!ship_bullet.tests_against(&invader_bullet));
        assert!(!ship.tests_against(&invader));
    }

    #[test]
    fn test_ship_collides_with_scene_edge() {
        let ship = ContactMask::for_kind(EntityKind::Ship);
        assert!(ship.collision.contains(ContactCategory::SCENE_EDGE));
        assert!(ContactMask::for_kind(EntityKind::Invader).collision.is_empty());
    }

    // ---- Enums ----

    #[test]
    fn test_invader_type_by_row() {
        assert_eq!(InvaderType::for_row(1), InvaderType::B);
        assert_eq!(InvaderType::for_row(2), InvaderType::C);
        assert_eq!(InvaderType::for_row(3), InvaderType::A);
        assert_eq!(InvaderType::for_row(6), InvaderType::A);
    }

    #[test]
    fn test_entity_tags_are_distinct() {
        let kinds = [
            EntityKind::Ship,
            EntityKind::Invader,
            EntityKind::ShipBullet,
            EntityKind::InvaderBullet,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.tag(), b.tag());
            }
        }
        assert_eq!(BulletType::ShipFired.kind(), EntityKind::ShipBullet);
        assert!(EntityKind::InvaderBullet.is_bullet());
        assert!(!EntityKind::Invader.is_bullet());
    }

    // ---- Wire shape ----

    #[test]
    fn test_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::StartRound).unwrap();
        assert_eq!(json, r#"{"type":"StartRound"}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Pause"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::Pause));
    }

    #[test]
    fn test_snapshot_serializes_events() {
        let snapshot = GameStateSnapshot {
            audio_events: vec![AudioEvent::InvaderHit],
            score_events: vec![ScoreEvent::ScoreIncrement { points: 100 }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""type":"InvaderHit""#));
        assert!(json.contains(r#""points":100"#));
        assert_eq!(AudioEvent::ShipHit.sound_name(), "ShipHit.wav");
    }
}
