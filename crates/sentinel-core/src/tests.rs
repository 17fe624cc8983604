#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::SentryCommand;
    use crate::config::{ConfigError, SentryConfig};
    use crate::enums::SweepDirection;
    use crate::events::{DetectionEvent, SentryEvent};
    use crate::types::{delta_degrees, normalize_degrees, LayerMask, SimTime, Transform};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SentryConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!(approx(config.rotation_interval_secs, 3.0));
        assert!(approx(config.max_rotation_angle_deg, 45.0));
        assert!(approx(config.rotation_speed_deg_per_sec, 90.0));
        assert!(approx(config.detection_range, 10.0));
        assert!(approx(config.field_of_view_deg, 60.0));
        assert_eq!(config.fov_mesh_segments, 10);
        assert!(approx(config.half_fov_deg(), 30.0));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let bad_range = SentryConfig {
            detection_range: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_range.validate(),
            Err(ConfigError::NotPositive {
                field: "detection_range",
                ..
            })
        ));

        let bad_speed = SentryConfig {
            rotation_speed_deg_per_sec: f32::NAN,
            ..Default::default()
        };
        assert!(bad_speed.validate().is_err());

        let bad_fov = SentryConfig {
            field_of_view_deg: 361.0,
            ..Default::default()
        };
        assert_eq!(bad_fov.validate(), Err(ConfigError::FieldOfView(361.0)));

        let bad_sweep = SentryConfig {
            max_rotation_angle_deg: -1.0,
            ..Default::default()
        };
        assert_eq!(bad_sweep.validate(), Err(ConfigError::SweepAngle(-1.0)));

        let wide_sweep = SentryConfig {
            max_rotation_angle_deg: 90.0,
            ..Default::default()
        };
        assert_eq!(wide_sweep.validate(), Err(ConfigError::SweepAngle(90.0)));

        let no_segments = SentryConfig {
            fov_mesh_segments: 0,
            ..Default::default()
        };
        assert_eq!(no_segments.validate(), Err(ConfigError::NoSegments));
    }

    #[test]
    fn test_zero_sweep_and_full_circle_fov_allowed() {
        let config = SentryConfig {
            max_rotation_angle_deg: 0.0,
            field_of_view_deg: 360.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: SentryConfig =
            serde_json::from_str(r#"{ "detection_range": 25.0, "player_layers": 256 }"#).unwrap();
        assert!(approx(config.detection_range, 25.0));
        assert!(approx(config.field_of_view_deg, 60.0));
        assert_eq!(config.player_layers, LayerMask::layer(8));
    }

    #[test]
    fn test_transform_forward_follows_yaw() {
        let north = Transform::from_yaw(Vec3::ZERO, 0.0);
        assert!(north.forward().abs_diff_eq(Vec3::Z, 1e-5));

        let east = Transform::from_yaw(Vec3::ZERO, 90.0);
        assert!(
            east.forward().abs_diff_eq(Vec3::X, 1e-5),
            "Positive yaw should turn toward +X: {:?}",
            east.forward()
        );
        assert!(approx(east.yaw_degrees(), 90.0));

        let west = Transform::from_yaw(Vec3::ZERO, -90.0);
        assert!(approx(west.yaw_degrees(), 270.0));
    }

    #[test]
    fn test_transform_point() {
        let t = Transform::from_yaw(Vec3::new(1.0, 2.0, 3.0), 90.0);
        let world = t.transform_point(Vec3::Z * 2.0);
        assert!(world.abs_diff_eq(Vec3::new(3.0, 2.0, 3.0), 1e-5));
    }

    #[test]
    fn test_degree_helpers() {
        assert!(approx(normalize_degrees(-45.0), 315.0));
        assert!(approx(normalize_degrees(720.0), 0.0));
        assert!(approx(delta_degrees(350.0, 10.0), 20.0));
        assert!(approx(delta_degrees(10.0, 350.0), -20.0));
        assert!(approx(delta_degrees(0.0, 180.0), 180.0));
    }

    #[test]
    fn test_layer_mask() {
        let mask = LayerMask::layer(3).with(8);
        assert!(mask.contains(3));
        assert!(mask.contains(8));
        assert!(!mask.contains(4));
        assert!(!mask.contains(40));
        assert_eq!(LayerMask::layer(40), LayerMask::NONE);
        assert!(LayerMask::ALL.contains(31));
        assert!(!LayerMask::NONE.contains(0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_direction_flip() {
        assert_eq!(SweepDirection::Right.flipped(), SweepDirection::Left);
        assert_eq!(SweepDirection::Left.flipped(), SweepDirection::Right);
        assert!(approx(SweepDirection::Left.sign(), -1.0));
    }

    #[test]
    fn test_command_json_is_tagged() {
        let json = serde_json::to_string(&SentryCommand::DespawnSentry { sentry_id: 4 }).unwrap();
        assert!(json.contains("\"type\":\"DespawnSentry\""), "{json}");
        let back: SentryCommand =
            serde_json::from_str(r#"{"type":"SetTimeScale","scale":2.0}"#).unwrap();
        assert!(matches!(back, SentryCommand::SetTimeScale { scale } if approx(scale, 2.0)));
    }

    #[test]
    fn test_detection_event_json() {
        let event = SentryEvent::PlayerDetected(DetectionEvent {
            sentry_id: 1,
            point: Vec3::new(0.0, 1.0, 5.0),
            distance: 5.0,
            tick: 12,
        });
        let json = serde_json::to_string(&event).unwrap();
        let back: SentryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
