#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use skyraid_core::constants::*;
    use skyraid_core::enums::BoostState;
    use skyraid_core::tuning::Tuning;
    use skyraid_core::types::Orientation;

    use crate::collision::{
        apply_contact, clamp_to_floor, resolve_first, sphere_box_contact, Aabb, Axis,
    };
    use crate::kinematics::*;
    use crate::steering::*;

    fn all_thrust() -> FlightControls {
        FlightControls {
            surge: 1.0,
            strafe: 1.0,
            lift: 1.0,
            ..Default::default()
        }
    }

    // ---- Kinematic integrator ----

    #[test]
    fn test_speed_never_exceeds_cap() {
        let tuning = Tuning::default();
        let controls = [
            all_thrust(),
            FlightControls {
                surge: -1.0,
                strafe: 1.0,
                lift: -1.0,
                yaw: 1.0,
                pitch: 1.0,
                roll: -1.0,
            },
            FlightControls {
                surge: 1.0,
                ..Default::default()
            },
        ];
        for boosting in [false, true] {
            let cap = speed_cap(boosting, &tuning);
            for c in &controls {
                for dt in [0.001, FIXED_DT, 0.05, MAX_TICK_DT] {
                    let mut state = FlightState::default();
                    for _ in 0..500 {
                        integrate(&mut state, c, boosting, dt, &tuning);
                        assert!(
                            state.velocity.length() <= cap + 1e-5,
                            "speed {} exceeded cap {cap} (boosting={boosting}, dt={dt})",
                            state.velocity.length()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_boost_doubles_speed_cap() {
        let tuning = Tuning::default();
        assert_abs_diff_eq!(speed_cap(false, &tuning), MAX_SPEED);
        assert_abs_diff_eq!(speed_cap(true, &tuning), MAX_SPEED * BOOST_MULTIPLIER);
    }

    #[test]
    fn test_pitch_and_roll_clamped() {
        let tuning = Tuning::default();
        let mut orientation = Orientation::default();
        let up = FlightControls {
            pitch: 1.0,
            roll: 1.0,
            ..Default::default()
        };
        for _ in 0..1000 {
            rotate(&mut orientation, &up, MAX_TICK_DT, &tuning);
        }
        assert_abs_diff_eq!(orientation.pitch, PITCH_LIMIT);
        assert_abs_diff_eq!(orientation.roll, ROLL_LIMIT);

        let down = FlightControls {
            pitch: -1.0,
            roll: -1.0,
            ..Default::default()
        };
        for _ in 0..1000 {
            rotate(&mut orientation, &down, MAX_TICK_DT, &tuning);
            assert!(orientation.pitch >= -PITCH_LIMIT && orientation.pitch <= PITCH_LIMIT);
            assert!(orientation.roll >= -ROLL_LIMIT && orientation.roll <= ROLL_LIMIT);
        }
        assert_abs_diff_eq!(orientation.pitch, -PITCH_LIMIT);
        assert_abs_diff_eq!(orientation.roll, -ROLL_LIMIT);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let tuning = Tuning::default();
        let mut orientation = Orientation::default();
        let turn = FlightControls {
            yaw: 1.0,
            ..Default::default()
        };
        for _ in 0..1000 {
            rotate(&mut orientation, &turn, FIXED_DT, &tuning);
        }
        // 1000 frames at 0.015 rad per frame.
        assert_abs_diff_eq!(orientation.yaw, 15.0, epsilon = 1e-3);
        assert!(orientation.yaw > std::f32::consts::TAU);
    }

    #[test]
    fn test_rotation_rate_is_frame_normalized() {
        let tuning = Tuning::default();
        let turn = FlightControls {
            yaw: 1.0,
            ..Default::default()
        };

        let mut at_60 = Orientation::default();
        for _ in 0..60 {
            rotate(&mut at_60, &turn, 1.0 / 60.0, &tuning);
        }
        let mut at_30 = Orientation::default();
        for _ in 0..30 {
            rotate(&mut at_30, &turn, 1.0 / 30.0, &tuning);
        }
        assert_abs_diff_eq!(at_60.yaw, at_30.yaw, epsilon = 1e-4);
    }

    #[test]
    fn test_forward_thrust_moves_along_negative_z() {
        let tuning = Tuning::default();
        let mut state = FlightState::default();
        let forward = FlightControls {
            surge: 1.0,
            ..Default::default()
        };
        integrate(&mut state, &forward, false, FIXED_DT, &tuning);

        // One frame: v = 0.04 * 0.92, p = v.
        assert_abs_diff_eq!(state.velocity.z, -MOVE_SPEED * DAMPING, epsilon = 1e-6);
        assert_abs_diff_eq!(state.position.z, -MOVE_SPEED * DAMPING, epsilon = 1e-6);
        assert_abs_diff_eq!(state.position.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_thrust_follows_yaw() {
        let tuning = Tuning::default();
        let mut state = FlightState {
            orientation: Orientation::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            ..Default::default()
        };
        let forward = FlightControls {
            surge: 1.0,
            ..Default::default()
        };
        for _ in 0..10 {
            integrate(&mut state, &forward, false, FIXED_DT, &tuning);
        }
        assert!(state.position.x < 0.0, "yawed left should travel toward -X");
        assert_abs_diff_eq!(state.position.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let tuning = Tuning::default();
        let mut state = FlightState::default();
        integrate(
            &mut state,
            &FlightControls::default(),
            false,
            FIXED_DT,
            &tuning,
        );
        assert_eq!(state.velocity, Vec3::ZERO);
        assert_eq!(state.position, Vec3::ZERO);
    }

    #[test]
    fn test_damping_decays_velocity() {
        let tuning = Tuning::default();
        let mut state = FlightState {
            velocity: Vec3::new(0.2, 0.0, 0.0),
            ..Default::default()
        };
        integrate(
            &mut state,
            &FlightControls::default(),
            false,
            FIXED_DT,
            &tuning,
        );
        assert_abs_diff_eq!(state.velocity.x, 0.2 * DAMPING, epsilon = 1e-6);

        for _ in 0..200 {
            integrate(
                &mut state,
                &FlightControls::default(),
                false,
                FIXED_DT,
                &tuning,
            );
        }
        assert!(state.velocity.length() < 1e-6);
    }

    // ---- Boost ----

    #[test]
    fn test_boost_lifecycle() {
        let tuning = Tuning::default();
        let mut boost = BoostState::Ready;

        assert!(try_activate_boost(&mut boost, &tuning));
        assert!(boost.is_boosting());

        // 1.9s in: still boosting.
        for _ in 0..19 {
            assert_eq!(advance_boost(&mut boost, 0.1, &tuning), BoostTransition::None);
        }
        assert!(boost.is_boosting());

        // Crossing 2.0s starts the cooldown.
        let mut transition = BoostTransition::None;
        for _ in 0..2 {
            let t = advance_boost(&mut boost, 0.1, &tuning);
            if t != BoostTransition::None {
                transition = t;
            }
        }
        assert_eq!(transition, BoostTransition::Depleted);
        assert!(matches!(boost, BoostState::CoolingDown { .. }));

        // Refused while cooling down.
        assert!(!try_activate_boost(&mut boost, &tuning));

        let mut ready = false;
        for _ in 0..60 {
            if advance_boost(&mut boost, 0.1, &tuning) == BoostTransition::Ready {
                ready = true;
                break;
            }
        }
        assert!(ready, "cooldown should finish within 6s");
        assert_eq!(boost, BoostState::Ready);
        assert!(try_activate_boost(&mut boost, &tuning));
    }

    #[test]
    fn test_boost_repress_refreshes_duration() {
        let tuning = Tuning::default();
        let mut boost = BoostState::Ready;
        try_activate_boost(&mut boost, &tuning);
        advance_boost(&mut boost, 1.5, &tuning);
        assert!(try_activate_boost(&mut boost, &tuning));
        assert_eq!(
            boost,
            BoostState::Boosting {
                remaining_secs: BOOST_DURATION_SECS
            }
        );
    }

    // ---- Collision ----

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0))
    }

    #[test]
    fn test_no_contact_when_clear() {
        let aabb = unit_box();
        assert!(sphere_box_contact(Vec3::new(6.6, 0.0, 0.0), 1.5, &aabb).is_none());
        assert!(sphere_box_contact(Vec3::new(0.0, 0.0, -7.0), 1.5, &aabb).is_none());
    }

    #[test]
    fn test_contact_resolves_onto_boundary_along_min_axis() {
        let aabb = unit_box();
        let radius = 1.5;
        // Deepest on y and z, shallow on x.
        let mut position = Vec3::new(5.5, 1.0, -2.0);
        let mut velocity = Vec3::new(-0.2, 0.1, 0.3);

        let contact = sphere_box_contact(position, radius, &aabb).unwrap();
        assert_eq!(contact.axis, Axis::X);
        apply_contact(&mut position, &mut velocity, &contact);

        assert_abs_diff_eq!(position.x, 5.0 + radius, epsilon = 1e-5);
        assert_abs_diff_eq!(position.y, 1.0);
        assert_abs_diff_eq!(position.z, -2.0);
        assert_eq!(velocity.x, 0.0);
        assert_abs_diff_eq!(velocity.y, 0.1);
        assert_abs_diff_eq!(velocity.z, 0.3);
    }

    #[test]
    fn test_contact_pushes_toward_negative_side() {
        let aabb = unit_box();
        let mut position = Vec3::new(0.0, 0.0, -5.8);
        let mut velocity = Vec3::new(0.0, 0.0, 0.3);
        let contact = sphere_box_contact(position, 1.5, &aabb).unwrap();
        assert_eq!(contact.axis, Axis::Z);
        apply_contact(&mut position, &mut velocity, &contact);
        assert_abs_diff_eq!(position.z, -6.5, epsilon = 1e-5);
        assert_eq!(velocity.z, 0.0);
    }

    #[test]
    fn test_contact_tie_prefers_z_then_y() {
        let aabb = unit_box();
        // Equal overlap on every axis: x needs to be strictly smallest, so z wins.
        let contact = sphere_box_contact(Vec3::new(4.0, 4.0, 4.0), 1.5, &aabb).unwrap();
        assert_eq!(contact.axis, Axis::Z);
        // y equal to x but smaller than z: y wins.
        let contact = sphere_box_contact(Vec3::new(4.0, 4.0, 3.0), 1.5, &aabb).unwrap();
        assert_eq!(contact.axis, Axis::Y);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        // Two overlapping boxes; only the first in list order is resolved.
        let boxes = [
            Aabb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(2.0)),
            Aabb::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::splat(2.0)),
        ];
        let mut position = Vec3::ZERO;
        let mut velocity = Vec3::ZERO;
        let hit = resolve_first(&mut position, &mut velocity, 1.5, boxes);
        assert_eq!(hit, Some(0));
        // Pushed away from the first box only.
        assert_abs_diff_eq!(position.x, -0.5, epsilon = 1e-5);

        let mut position = Vec3::new(50.0, 0.0, 0.0);
        assert_eq!(resolve_first(&mut position, &mut velocity, 1.5, boxes), None);
    }

    #[test]
    fn test_resolution_is_stable_once_on_boundary() {
        let aabb = unit_box();
        let mut position = Vec3::new(5.5, 0.0, 0.0);
        let mut velocity = Vec3::ZERO;
        resolve_first(&mut position, &mut velocity, 1.5, [aabb]);
        let settled = position;
        // Exactly on the inflated surface counts as clear.
        assert_eq!(resolve_first(&mut position, &mut velocity, 1.5, [aabb]), None);
        assert_eq!(position, settled);
    }

    #[test]
    fn test_floor_clamp() {
        let mut position = Vec3::new(0.0, 2.0, 0.0);
        let mut velocity = Vec3::new(0.1, -0.3, 0.0);
        assert!(clamp_to_floor(&mut position, &mut velocity, FLOOR_HEIGHT));
        assert_eq!(position.y, FLOOR_HEIGHT);
        assert_eq!(velocity.y, 0.0);
        assert_abs_diff_eq!(velocity.x, 0.1);

        let mut position = Vec3::new(0.0, 6.0, 0.0);
        assert!(!clamp_to_floor(&mut position, &mut velocity, FLOOR_HEIGHT));
        assert_eq!(position.y, 6.0);
    }

    // ---- Steering ----

    #[test]
    fn test_seek_moves_toward_target() {
        let from = Vec3::new(10.0, 0.0, 0.0);
        let next = seek(from, Vec3::ZERO, ENEMY_SEEK_SPEED, FIXED_DT);
        assert_abs_diff_eq!(next.x, 10.0 - ENEMY_SEEK_SPEED, epsilon = 1e-6);
        assert_abs_diff_eq!(next.y, 0.0);
    }

    #[test]
    fn test_seek_at_target_stays_put() {
        let at = Vec3::new(1.0, 2.0, 3.0);
        let next = seek(at, at, ENEMY_SEEK_SPEED, FIXED_DT);
        assert_eq!(next, at);
        assert!(!next.is_nan());
    }

    #[test]
    fn test_within_is_strict() {
        assert!(within(Vec3::ZERO, Vec3::new(2.9, 0.0, 0.0), 3.0));
        assert!(!within(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), 3.0));
    }

    #[test]
    fn test_spawn_around_ring() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = Vec3::new(10.0, 20.0, -5.0);
        for _ in 0..500 {
            let p = spawn_around(&mut rng, center, 30.0, 50.0, 10.0);
            let dx = p.x - center.x;
            let dz = p.z - center.z;
            let horizontal = (dx * dx + dz * dz).sqrt();
            assert!(
                (30.0 - 1e-3..=50.0 + 1e-3).contains(&horizontal),
                "horizontal distance {horizontal}"
            );
            assert!((p.y - center.y).abs() <= 5.0 + 1e-5);
        }
    }
}
