//! Projectile system: firing, flight, range expiry and hit resolution.
//!
//! Each projectile is resolved against drones first (in spawn order), then
//! against the enemy base. A projectile is consumed by its first hit.

use glam::Vec3;
use hecs::{Entity, World};

use skyraid_core::components::{Enemy, EnemyBase, Projectile};
use skyraid_core::constants::BASE_FLASH_SECS;
use skyraid_core::events::GameEvent;
use skyraid_core::tuning::Tuning;
use skyraid_core::types::{Orientation, Position, Velocity};
use skyraid_physics::kinematics::frame_units;
use skyraid_physics::steering::within;

use crate::stats::GameStats;
use crate::systems::effects;
use crate::world_setup;

/// Fire one projectile from the player's nose. Returns the muzzle position.
pub fn fire(
    world: &mut World,
    player: Entity,
    next_seq: &mut u64,
    stats: &mut GameStats,
    tuning: &Tuning,
) -> Option<Vec3> {
    let (position, forward) = {
        let pos = world.get::<&Position>(player).ok()?;
        let orientation = world.get::<&Orientation>(player).ok()?;
        (pos.0, orientation.forward())
    };
    world_setup::spawn_projectile(
        world,
        position,
        forward * tuning.projectile_speed,
        next_seq,
    );
    stats.shots_fired += 1;
    Some(position)
}

/// Advance projectiles and resolve hits. Returns true if the base was
/// destroyed this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: Entity,
    base: Entity,
    stats: &mut GameStats,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f32,
    tuning: &Tuning,
) -> bool {
    let scale = frame_units(dt);
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.0 += vel.0 * scale;
    }

    let Ok(player_pos) = world.get::<&Position>(player).map(|p| p.0) else {
        return false;
    };
    let base_pos = world
        .get::<&Position>(base)
        .map(|p| p.0)
        .unwrap_or(Vec3::ZERO);

    let mut shots: Vec<(u64, Entity, Vec3)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, pos))| (projectile.seq, entity, pos.0))
        .collect();
    shots.sort_by_key(|(seq, _, _)| *seq);

    let mut drones: Vec<(u64, Entity, Vec3)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| (enemy.spawn_seq, entity, pos.0))
        .collect();
    drones.sort_by_key(|(seq, _, _)| *seq);

    despawn_buffer.clear();
    let mut destroyed = false;

    for (_seq, shot, shot_pos) in shots {
        if shot_pos.distance(player_pos) > tuning.projectile_max_range {
            despawn_buffer.push(shot);
            continue;
        }

        if let Some(index) = drones
            .iter()
            .position(|(_, _, drone_pos)| within(shot_pos, *drone_pos, tuning.projectile_hit_radius))
        {
            let (_, drone, drone_pos) = drones[index];
            despawn_buffer.push(shot);
            if damage_enemy(world, drone, tuning.projectile_damage, events) {
                drones.remove(index);
                despawn_buffer.push(drone);
                stats.score += tuning.kill_score;
                stats.enemies_destroyed += 1;
                log::debug!("drone destroyed, score {:.0}", stats.score);
                events.push(GameEvent::EnemyDestroyed {
                    position: drone_pos,
                    score: stats.score,
                });
            }
            continue;
        }

        if within(shot_pos, base_pos, tuning.base_hit_radius) {
            let Some(base_health) = damage_base(world, base, tuning.base_hit_damage) else {
                continue;
            };
            despawn_buffer.push(shot);
            stats.base_hits += 1;
            stats.mission_progress = (100 - base_health) as f32;
            effects::start_flash(world, base, BASE_FLASH_SECS);
            log::debug!("base hit, health {base_health}");
            events.push(GameEvent::BaseHit { base_health });
            if base_health <= 0 {
                destroyed = true;
                break;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    destroyed
}

/// Apply damage to a drone. Returns true if it died.
fn damage_enemy(world: &mut World, drone: Entity, damage: i32, events: &mut Vec<GameEvent>) -> bool {
    let Ok(mut enemy) = world.get::<&mut Enemy>(drone) else {
        return false;
    };
    enemy.health -= damage;
    if enemy.health <= 0 {
        true
    } else {
        events.push(GameEvent::EnemyDamaged {
            remaining_health: enemy.health,
        });
        false
    }
}

/// Apply damage to a still-standing base. Returns the new health.
fn damage_base(world: &mut World, base: Entity, damage: i32) -> Option<i32> {
    let mut enemy_base = world.get::<&mut EnemyBase>(base).ok()?;
    if enemy_base.health <= 0 {
        return None;
    }
    enemy_base.health = (enemy_base.health - damage).max(0);
    Some(enemy_base.health)
}
