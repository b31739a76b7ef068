//! Shield power-up: buff decay, pickup respawn countdown and collection.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::{ShieldBuff, ShieldPickup};
use skyraid_core::constants::{BOUNDARY_SIZE, SHIELD_SPAWN_HEIGHT, SHIELD_SPAWN_MARGIN};
use skyraid_core::events::GameEvent;
use skyraid_core::tuning::Tuning;
use skyraid_core::types::Position;
use skyraid_physics::steering::within;

/// Run the shield controller for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    shield: Entity,
    events: &mut Vec<GameEvent>,
    dt: f32,
    tuning: &Tuning,
) {
    decay_buff(world, player, dt, events);
    advance_respawn(world, rng, shield, dt, events);
    try_collect(world, player, shield, events, tuning);
}

fn decay_buff(world: &mut World, player: Entity, dt: f32, events: &mut Vec<GameEvent>) {
    let Ok(mut buff) = world.get::<&mut ShieldBuff>(player) else {
        return;
    };
    if !buff.active {
        return;
    }
    buff.remaining_secs -= dt;
    if buff.remaining_secs <= 0.0 {
        buff.active = false;
        buff.remaining_secs = 0.0;
        log::debug!("shield expired");
        events.push(GameEvent::ShieldExpired);
    }
}

fn advance_respawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    shield: Entity,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let Ok((pickup, pos)) = world.query_one_mut::<(&mut ShieldPickup, &mut Position)>(shield) else {
        return;
    };
    let Some(remaining) = pickup.respawn_in_secs.as_mut() else {
        return;
    };
    *remaining -= dt;
    if *remaining > 0.0 {
        return;
    }

    let half = BOUNDARY_SIZE / 2.0 - SHIELD_SPAWN_MARGIN;
    let x = rng.gen_range(-half..=half);
    let z = rng.gen_range(-half..=half);
    pos.0 = Vec3::new(x, SHIELD_SPAWN_HEIGHT, z);
    pickup.visible = true;
    pickup.respawn_in_secs = None;
    log::debug!("shield pickup spawned at ({x:.1}, {z:.1})");
    events.push(GameEvent::ShieldSpawned { position: pos.0 });
}

fn try_collect(
    world: &mut World,
    player: Entity,
    shield: Entity,
    events: &mut Vec<GameEvent>,
    tuning: &Tuning,
) {
    let Ok(player_pos) = world.get::<&Position>(player).map(|p| p.0) else {
        return;
    };
    let collected = match world.query_one_mut::<(&mut ShieldPickup, &Position)>(shield) {
        Ok((pickup, pos)) if pickup.visible && within(player_pos, pos.0, tuning.shield_pickup_range) => {
            pickup.visible = false;
            pickup.respawn_in_secs = Some(tuning.shield_respawn_secs);
            true
        }
        _ => false,
    };
    if !collected {
        return;
    }

    // A fresh pickup resets the timer; it never stacks.
    if let Ok(mut buff) = world.get::<&mut ShieldBuff>(player) {
        buff.active = true;
        buff.remaining_secs = tuning.shield_duration_secs;
    }
    log::debug!("shield collected");
    events.push(GameEvent::ShieldCollected);
}
