//! Player flight system: boost timers and kinematic integration.

use hecs::{Entity, World};

use skyraid_core::enums::BoostState;
use skyraid_core::events::GameEvent;
use skyraid_core::tuning::Tuning;
use skyraid_core::types::{Orientation, Position, Velocity};
use skyraid_physics::kinematics::{
    advance_boost, integrate, try_activate_boost, BoostTransition, FlightControls, FlightState,
};

/// Advance the boost lifecycle, then integrate the player's pose.
pub fn run(
    world: &mut World,
    player: Entity,
    controls: &FlightControls,
    dt: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let Ok((pos, vel, orientation, boost)) = world
        .query_one_mut::<(&mut Position, &mut Velocity, &mut Orientation, &mut BoostState)>(player)
    else {
        return;
    };

    match advance_boost(boost, dt, tuning) {
        BoostTransition::Depleted => {
            log::debug!("boost depleted");
            events.push(GameEvent::BoostDepleted);
        }
        BoostTransition::Ready => {
            log::debug!("boost ready");
            events.push(GameEvent::BoostReady);
        }
        BoostTransition::None => {}
    }

    let mut state = FlightState {
        position: pos.0,
        velocity: vel.0,
        orientation: *orientation,
    };
    integrate(&mut state, controls, boost.is_boosting(), dt, tuning);

    pos.0 = state.position;
    vel.0 = state.velocity;
    *orientation = state.orientation;
}

/// Try to start a boost on the player. Returns true if it took.
pub fn activate_boost(
    world: &mut World,
    player: Entity,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Ok(mut boost) = world.get::<&mut BoostState>(player) else {
        return false;
    };
    if try_activate_boost(&mut boost, tuning) {
        events.push(GameEvent::BoostActivated);
        true
    } else {
        log::debug!("boost refused, cooling down");
        false
    }
}
