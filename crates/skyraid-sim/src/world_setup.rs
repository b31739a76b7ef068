//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the city (buildings, platforms, boundary walls), the player craft,
//! the enemy base, the shield pickup, drones and projectiles with
//! appropriate component bundles.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::*;
use skyraid_core::constants::*;
use skyraid_core::enums::*;
use skyraid_core::tuning::Tuning;
use skyraid_core::types::{Orientation, Position, Velocity};
use skyraid_physics::steering::spawn_around;

/// Generate the static city. Returns the number of obstacles spawned.
/// Layout order runs buildings, then platforms, then boundary walls.
pub fn build_city(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning) -> u32 {
    let mut order = 0;
    spawn_buildings(world, rng, tuning.building_count, &mut order);
    spawn_platforms(world, rng, tuning.platform_count, &mut order);
    spawn_boundary_walls(world, &mut order);
    log::debug!("city built with {order} obstacles");
    order
}

fn spawn_obstacle(
    world: &mut World,
    kind: ObstacleKind,
    order: &mut u32,
    position: Vec3,
    size: Vec3,
    color: u32,
) -> Entity {
    let entity = world.spawn((
        Obstacle {
            kind,
            order: *order,
        },
        Position(position),
        CollisionBox { size },
        Tint::new(color),
    ));
    *order += 1;
    entity
}

/// Buildings scattered over the city, kept clear of the central base.
fn spawn_buildings(world: &mut World, rng: &mut ChaCha8Rng, count: u32, order: &mut u32) {
    let extent = BOUNDARY_SIZE / 2.0 - BUILDING_MARGIN;
    for _ in 0..count {
        let width = rng.gen_range(3.0..10.0);
        let height = rng.gen_range(15.0..50.0);
        let depth = rng.gen_range(3.0..10.0);

        let mut x: f32 = rng.gen_range(-extent..=extent);
        let mut z: f32 = rng.gen_range(-extent..=extent);
        let from_center = (x * x + z * z).sqrt();
        if from_center < BUILDING_CLEAR_RADIUS {
            // Straight down the middle still needs a bearing.
            let angle = if from_center > 0.0 { z.atan2(x) } else { 0.0 };
            x = angle.cos() * BUILDING_CLEAR_RADIUS;
            z = angle.sin() * BUILDING_CLEAR_RADIUS;
        }

        spawn_obstacle(
            world,
            ObstacleKind::Building,
            order,
            Vec3::new(x, -1.0, z),
            Vec3::new(width, height, depth),
            BUILDING_COLOR,
        );
    }
}

/// Floating landing platforms.
fn spawn_platforms(world: &mut World, rng: &mut ChaCha8Rng, count: u32, order: &mut u32) {
    let extent = BOUNDARY_SIZE / 2.0;
    let [w, h, d] = PLATFORM_SIZE;
    for _ in 0..count {
        let x = rng.gen_range(-extent..=extent);
        let y = rng.gen_range(10.0..50.0);
        let z = rng.gen_range(-extent..=extent);
        spawn_obstacle(
            world,
            ObstacleKind::Platform,
            order,
            Vec3::new(x, y, z),
            Vec3::new(w, h, d),
            PLATFORM_COLOR,
        );
    }
}

/// Four walls enclosing the play area.
fn spawn_boundary_walls(world: &mut World, order: &mut u32) {
    let offset = BOUNDARY_SIZE / 2.0 + WALL_THICKNESS / 2.0;
    let y = WALL_HEIGHT / 2.0 - 10.0;
    let long = BOUNDARY_SIZE + 2.0 * WALL_THICKNESS;

    let walls = [
        (Vec3::new(0.0, y, -offset), Vec3::new(long, WALL_HEIGHT, WALL_THICKNESS)),
        (Vec3::new(0.0, y, offset), Vec3::new(long, WALL_HEIGHT, WALL_THICKNESS)),
        (Vec3::new(offset, y, 0.0), Vec3::new(WALL_THICKNESS, WALL_HEIGHT, BOUNDARY_SIZE)),
        (Vec3::new(-offset, y, 0.0), Vec3::new(WALL_THICKNESS, WALL_HEIGHT, BOUNDARY_SIZE)),
    ];
    for (position, size) in walls {
        spawn_obstacle(world, ObstacleKind::BoundaryWall, order, position, size, WALL_COLOR);
    }
}

/// Spawn the player craft at the start position.
pub fn spawn_player(world: &mut World, tuning: &Tuning) -> Entity {
    let [x, y, z] = PLAYER_START;
    world.spawn((
        Player {
            radius: tuning.player_radius,
        },
        Position::new(x, y, z),
        Velocity::default(),
        Orientation::default(),
        BoostState::default(),
        ShieldBuff::default(),
        CollisionCooldown::default(),
    ))
}

/// Put the player back at the start with fresh flight state.
pub fn reset_player(world: &mut World, player: Entity) {
    let [x, y, z] = PLAYER_START;
    if let Ok((pos, vel, orientation, boost, buff, cooldown)) = world.query_one_mut::<(
        &mut Position,
        &mut Velocity,
        &mut Orientation,
        &mut BoostState,
        &mut ShieldBuff,
        &mut CollisionCooldown,
    )>(player)
    {
        *pos = Position::new(x, y, z);
        *vel = Velocity::default();
        *orientation = Orientation::default();
        *boost = BoostState::default();
        *buff = ShieldBuff::default();
        *cooldown = CollisionCooldown::default();
    }
}

/// Spawn the enemy base at the city centre.
pub fn spawn_enemy_base(world: &mut World) -> Entity {
    let [x, y, z] = BASE_POSITION;
    let [w, h, d] = BASE_SIZE;
    world.spawn((
        EnemyBase {
            health: BASE_MAX_HEALTH,
        },
        Position::new(x, y, z),
        CollisionBox::new(w, h, d),
        Tint::new(BASE_COLOR),
    ))
}

/// Restore base health and color.
pub fn reset_enemy_base(world: &mut World, base: Entity) {
    if let Ok((enemy_base, tint)) = world.query_one_mut::<(&mut EnemyBase, &mut Tint)>(base) {
        enemy_base.health = BASE_MAX_HEALTH;
        tint.current = tint.base;
    }
}

/// Spawn the (hidden) shield pickup.
pub fn spawn_shield_pickup(world: &mut World) -> Entity {
    world.spawn((
        ShieldPickup::default(),
        Position::new(0.0, SHIELD_SPAWN_HEIGHT, 0.0),
    ))
}

/// Hide the pickup and schedule its first appearance.
pub fn reset_shield_pickup(world: &mut World, shield: Entity, tuning: &Tuning) {
    if let Ok(mut pickup) = world.get::<&mut ShieldPickup>(shield) {
        pickup.visible = false;
        pickup.respawn_in_secs = Some(tuning.shield_first_spawn_secs);
    }
}

/// Spawn one drone on a ring around `around`.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    around: Vec3,
    next_seq: &mut u64,
    tuning: &Tuning,
) -> Entity {
    let position = spawn_around(
        rng,
        around,
        ENEMY_SPAWN_MIN_DISTANCE,
        ENEMY_SPAWN_MAX_DISTANCE,
        ENEMY_SPAWN_VERTICAL_JITTER,
    );
    spawn_enemy_at(world, position, next_seq, tuning)
}

/// Spawn one drone at an exact position.
pub fn spawn_enemy_at(
    world: &mut World,
    position: Vec3,
    next_seq: &mut u64,
    tuning: &Tuning,
) -> Entity {
    let seq = *next_seq;
    *next_seq += 1;
    world.spawn((
        Enemy {
            health: tuning.enemy_health,
            spawn_seq: seq,
        },
        Position(position),
        Facing(Vec3::NEG_Z),
    ))
}

/// Spawn a projectile travelling with `velocity`.
pub fn spawn_projectile(
    world: &mut World,
    position: Vec3,
    velocity: Vec3,
    next_seq: &mut u64,
) -> Entity {
    let seq = *next_seq;
    *next_seq += 1;
    world.spawn((Projectile { seq }, Position(position), Velocity(velocity)))
}

/// Remove every drone and projectile.
pub fn clear_combatants(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Enemy>().into_iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query_mut::<&Projectile>().into_iter().map(|(e, _)| e));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
