//! Kinematic integrator for the player craft.
//!
//! Converts held-key intent into rotation and translation each tick.
//! All per-frame rates are scaled by `dt * FRAME_RATE_REFERENCE`, except the
//! damping factor which is applied once per tick.

use glam::Vec3;

use skyraid_core::constants::{FRAME_RATE_REFERENCE, PITCH_LIMIT, ROLL_LIMIT};
use skyraid_core::enums::BoostState;
use skyraid_core::tuning::Tuning;
use skyraid_core::types::Orientation;

/// Control axes derived from held keys, each in -1.0..=1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightControls {
    /// Positive turns left.
    pub yaw: f32,
    /// Positive noses up.
    pub pitch: f32,
    /// Positive rolls counter-clockwise.
    pub roll: f32,
    /// Positive thrusts forward.
    pub surge: f32,
    /// Positive slides right.
    pub strafe: f32,
    /// Positive climbs.
    pub lift: f32,
}

/// Pose and motion of the craft.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Orientation,
}

/// Boost lifecycle change produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostTransition {
    None,
    /// Boost ran out; cooldown started.
    Depleted,
    /// Cooldown finished.
    Ready,
}

/// Convert elapsed seconds to frame units.
pub fn frame_units(dt: f32) -> f32 {
    dt * FRAME_RATE_REFERENCE
}

/// Speed cap for the current boost state.
pub fn speed_cap(boosting: bool, tuning: &Tuning) -> f32 {
    tuning.max_speed * speed_multiplier(boosting, tuning)
}

fn speed_multiplier(boosting: bool, tuning: &Tuning) -> f32 {
    if boosting {
        tuning.boost_multiplier
    } else {
        1.0
    }
}

/// Apply rotation input and clamp pitch and roll. Yaw is left unbounded.
pub fn rotate(orientation: &mut Orientation, controls: &FlightControls, dt: f32, tuning: &Tuning) {
    let step = tuning.rotation_speed * frame_units(dt);

    orientation.yaw += controls.yaw * step;
    orientation.pitch += controls.pitch * step;
    orientation.roll += controls.roll * step;

    orientation.pitch = orientation.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    orientation.roll = orientation.roll.clamp(-ROLL_LIMIT, ROLL_LIMIT);
}

/// Run one integrator step: rotate, accelerate, damp, cap, translate.
pub fn integrate(
    state: &mut FlightState,
    controls: &FlightControls,
    boosting: bool,
    dt: f32,
    tuning: &Tuning,
) {
    rotate(&mut state.orientation, controls, dt, tuning);

    let thrust = tuning.move_speed * speed_multiplier(boosting, tuning);
    // The craft's nose points down local -Z.
    let local = Vec3::new(
        controls.strafe * thrust,
        controls.lift * thrust,
        -controls.surge * thrust,
    );
    let world = state.orientation.rotation() * local;

    let scale = frame_units(dt);
    state.velocity += world * scale;
    state.velocity *= tuning.damping;

    let cap = speed_cap(boosting, tuning);
    if state.velocity.length() > cap {
        state.velocity = state.velocity.normalize() * cap;
    }

    state.position += state.velocity * scale;
}

/// Try to start a boost. Refused only while cooling down.
pub fn try_activate_boost(boost: &mut BoostState, tuning: &Tuning) -> bool {
    match boost {
        BoostState::CoolingDown { .. } => false,
        BoostState::Ready | BoostState::Boosting { .. } => {
            *boost = BoostState::Boosting {
                remaining_secs: tuning.boost_duration_secs,
            };
            true
        }
    }
}

/// Count the boost timers down by `dt` seconds.
pub fn advance_boost(boost: &mut BoostState, dt: f32, tuning: &Tuning) -> BoostTransition {
    match boost {
        BoostState::Ready => BoostTransition::None,
        BoostState::Boosting { remaining_secs } => {
            *remaining_secs -= dt;
            if *remaining_secs <= 0.0 {
                *boost = BoostState::CoolingDown {
                    remaining_secs: tuning.boost_cooldown_secs,
                };
                BoostTransition::Depleted
            } else {
                BoostTransition::None
            }
        }
        BoostState::CoolingDown { remaining_secs } => {
            *remaining_secs -= dt;
            if *remaining_secs <= 0.0 {
                *boost = BoostState::Ready;
                BoostTransition::Ready
            } else {
                BoostTransition::None
            }
        }
    }
}
