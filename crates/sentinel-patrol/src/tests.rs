#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use sentinel_core::config::SentryConfig;
    use sentinel_core::enums::SweepDirection;
    use sentinel_core::types::{delta_degrees, yaw_rotation, Transform};

    use crate::rotation::{angle_between, rotate_towards};
    use crate::sweep::{initial_state, start_rotation, step, sweep_bounds};

    fn yaw_of(rotation: Quat) -> f32 {
        Transform::new(Vec3::ZERO, rotation).yaw_degrees()
    }

    fn approx(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() < tol
    }

    // ---- Rotation helpers ----

    #[test]
    fn test_angle_between_yaws() {
        let a = yaw_rotation(10.0);
        let b = yaw_rotation(40.0);
        assert!(approx(angle_between(a, b), 30.0, 1e-3));
        assert!(approx(angle_between(b, a), 30.0, 1e-3));
        assert!(approx(angle_between(a, a), 0.0, 1e-4));
    }

    #[test]
    fn test_angle_between_ignores_quaternion_sign() {
        let a = yaw_rotation(20.0);
        let b = yaw_rotation(25.0);
        assert!(approx(angle_between(a, -b), 5.0, 1e-3));
    }

    #[test]
    fn test_angle_between_small_angles_precise() {
        let a = yaw_rotation(0.0);
        let b = yaw_rotation(0.05);
        let angle = angle_between(a, b);
        assert!(approx(angle, 0.05, 1e-3), "Small angle lost precision: {angle}");
    }

    #[test]
    fn test_rotate_towards_partial_step() {
        let from = yaw_rotation(0.0);
        let to = yaw_rotation(90.0);
        let stepped = rotate_towards(from, to, 30.0);
        assert!(approx(yaw_of(stepped), 30.0, 1e-2));
    }

    #[test]
    fn test_rotate_towards_never_overshoots() {
        let from = yaw_rotation(0.0);
        let to = yaw_rotation(10.0);
        let stepped = rotate_towards(from, to, 500.0);
        assert_eq!(stepped, to);
    }

    #[test]
    fn test_rotate_towards_negative_step_is_noop() {
        let from = yaw_rotation(0.0);
        let to = yaw_rotation(10.0);
        let stepped = rotate_towards(from, to, -5.0);
        assert!(approx(angle_between(stepped, from), 0.0, 1e-3));
    }

    // ---- State machine ----

    #[test]
    fn test_initial_state() {
        let head = Transform::from_yaw(Vec3::ZERO, 30.0);
        let state = initial_state(&head);
        assert!(approx(state.initial_yaw_deg, 30.0, 1e-3));
        assert!(!state.rotating);
        assert_eq!(state.next_direction, SweepDirection::Right);
        assert_eq!(state.timer_secs, 0.0);
        assert_eq!(state.target_rotation, head.rotation);
    }

    #[test]
    fn test_no_sweep_before_interval() {
        let config = SentryConfig::default();
        let head = Transform::default();
        let mut state = initial_state(&head);
        let mut rotation = head.rotation;

        // 2.5 seconds in 0.5s steps: below the 3s interval
        for _ in 0..5 {
            let update = step(&mut state, rotation, &config, 0.5);
            assert!(update.started.is_none());
            rotation = update.rotation;
        }
        assert!(!state.rotating);
        assert_eq!(rotation, head.rotation);
        assert!(approx(state.timer_secs, 2.5, 1e-5));
    }

    #[test]
    fn test_first_sweep_goes_right_and_finishes() {
        let config = SentryConfig::default();
        let head = Transform::default();
        let mut state = initial_state(&head);
        let mut rotation = head.rotation;

        // Ticks 1-11 (2.75s): idle
        for _ in 0..11 {
            rotation = step(&mut state, rotation, &config, 0.25).rotation;
        }
        assert!(!state.rotating);

        // Tick 12: timer hits 3.0, sweep starts and turns 22.5 degrees
        let update = step(&mut state, rotation, &config, 0.25);
        let started = update.started.expect("Sweep should start at the interval");
        assert_eq!(started.direction, SweepDirection::Right);
        assert!(approx(started.target_yaw_deg, 45.0, 1e-3));
        assert!(!update.finished);
        assert!(approx(yaw_of(update.rotation), 22.5, 1e-2));
        assert_eq!(state.next_direction, SweepDirection::Left);

        // Tick 13: arrives at 45 degrees, timer cleared
        let update = step(&mut state, update.rotation, &config, 0.25);
        assert!(update.finished);
        assert!(!state.rotating);
        assert_eq!(state.timer_secs, 0.0);
        assert!(approx(yaw_of(update.rotation), 45.0, 1e-2));
    }

    #[test]
    fn test_sweeps_alternate_sides() {
        let config = SentryConfig::default();
        let head = Transform::default();
        let mut state = initial_state(&head);
        let mut rotation = head.rotation;
        let mut targets = Vec::new();

        // 20 seconds at 0.05s steps
        for _ in 0..400 {
            let update = step(&mut state, rotation, &config, 0.05);
            if let Some(started) = update.started {
                targets.push(started.target_yaw_deg);
            }
            rotation = update.rotation;
        }

        assert!(targets.len() >= 3, "Expected several sweeps, got {targets:?}");
        for (i, target) in targets.iter().enumerate() {
            let expected = if i % 2 == 0 { 45.0 } else { 315.0 };
            assert!(
                approx(*target, expected, 1e-3),
                "Sweep {i} target {target}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_head_never_leaves_sweep_bounds() {
        let config = SentryConfig {
            rotation_interval_secs: 0.4,
            rotation_speed_deg_per_sec: 200.0,
            ..Default::default()
        };
        let head = Transform::from_yaw(Vec3::ZERO, 350.0);
        let mut state = initial_state(&head);
        let mut rotation = head.rotation;
        let (left, right) = sweep_bounds(&state, &config);
        let half_width = (right - left) / 2.0;

        // Uneven frame times
        let dts = [0.016, 0.033, 0.1, 0.25, 0.007, 0.5];
        for i in 0..600 {
            rotation = step(&mut state, rotation, &config, dts[i % dts.len()]).rotation;
            let offset = delta_degrees(state.initial_yaw_deg, yaw_of(rotation));
            assert!(
                offset.abs() <= half_width + 0.01,
                "Yaw offset {offset} outside +/-{half_width} at step {i}"
            );
        }
    }

    #[test]
    fn test_initial_yaw_wraps_around_north() {
        let config = SentryConfig::default();
        let head = Transform::from_yaw(Vec3::ZERO, 350.0);
        let mut state = initial_state(&head);
        let started = start_rotation(&mut state, &config);
        assert!(approx(started.target_yaw_deg, 35.0, 1e-3));
        let started = start_rotation(&mut state, &config);
        assert!(approx(started.target_yaw_deg, 305.0, 1e-3));
    }

    #[test]
    fn test_huge_dt_lands_exactly_on_target() {
        let config = SentryConfig::default();
        let head = Transform::default();
        let mut state = initial_state(&head);
        let update = step(&mut state, head.rotation, &config, 100.0);
        assert!(update.started.is_some());
        assert!(update.finished);
        assert_eq!(update.rotation, state.target_rotation);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let config = SentryConfig::default();
        let head = Transform::from_yaw(Vec3::ZERO, 12.0);
        let mut state = initial_state(&head);
        let update = step(&mut state, head.rotation, &config, 0.0);
        assert!(update.started.is_none());
        assert!(!update.finished);
        assert_eq!(update.rotation, head.rotation);
        assert_eq!(state.timer_secs, 0.0);
    }

    #[test]
    fn test_sweep_target_drops_pitch() {
        let config = SentryConfig::default();
        let pitched = Quat::from_rotation_y(0.0) * Quat::from_rotation_x(0.3);
        let head = Transform::new(Vec3::ZERO, pitched);
        let mut state = initial_state(&head);
        start_rotation(&mut state, &config);
        let forward = state.target_rotation * Vec3::Z;
        assert!(
            forward.y.abs() < 1e-5,
            "Sweep target should be level, forward = {forward:?}"
        );
    }

    #[test]
    fn test_zero_sweep_angle_finishes_immediately() {
        let config = SentryConfig {
            max_rotation_angle_deg: 0.0,
            ..Default::default()
        };
        let head = Transform::default();
        let mut state = initial_state(&head);
        let update = step(&mut state, head.rotation, &config, 3.0);
        assert!(update.started.is_some());
        assert!(update.finished);
        assert!(!state.rotating);
    }
}
