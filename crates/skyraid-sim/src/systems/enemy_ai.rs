//! Drone behavior: stochastic reinforcements, seek steering and contact damage.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::{Enemy, Facing, ShieldBuff};
use skyraid_core::tuning::Tuning;
use skyraid_core::types::Position;
use skyraid_physics::kinematics::frame_units;
use skyraid_physics::steering::{direction_to, seek, within};

use crate::stats::GameStats;
use crate::world_setup;

/// Run one tick of enemy behavior. Returns true if contact damage
/// drained the player's health to zero.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    next_seq: &mut u64,
    stats: &mut GameStats,
    dt: f32,
    tuning: &Tuning,
) -> bool {
    let Some((player_pos, shielded)) = player_state(world, player) else {
        return false;
    };

    // The roll is taken every tick, capped or not. Not scaled by dt.
    if rng.gen_bool(tuning.enemy_respawn_chance) && count(world) < tuning.max_enemies {
        world_setup::spawn_enemy(world, rng, player_pos, next_seq, tuning);
        log::debug!("reinforcement drone spawned");
    }

    let mut contacts = 0u32;
    for (_entity, (_enemy, pos, facing)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Facing)>()
    {
        pos.0 = seek(pos.0, player_pos, tuning.enemy_seek_speed, dt);
        let direction = direction_to(pos.0, player_pos);
        if direction != Vec3::ZERO {
            facing.0 = direction;
        }
        if within(player_pos, pos.0, tuning.enemy_contact_range) {
            contacts += 1;
        }
    }

    if contacts == 0 || shielded {
        return false;
    }
    let damage = contacts as f32 * tuning.enemy_contact_damage * frame_units(dt);
    stats.take_damage(damage)
}

/// Spawn the opening wave around the player.
pub fn spawn_initial(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    next_seq: &mut u64,
    tuning: &Tuning,
) {
    let around = player_state(world, player)
        .map(|(pos, _)| pos)
        .unwrap_or_default();
    for _ in 0..tuning.initial_enemies {
        world_setup::spawn_enemy(world, rng, around, next_seq, tuning);
    }
}

/// Live drone count.
pub fn count(world: &World) -> u32 {
    world.query::<&Enemy>().iter().count() as u32
}

fn player_state(world: &World, player: Entity) -> Option<(Vec3, bool)> {
    let pos = world.get::<&Position>(player).ok()?.0;
    let shielded = world
        .get::<&ShieldBuff>(player)
        .map(|buff| buff.active)
        .unwrap_or(false);
    Some((pos, shielded))
}
