//! Player-vs-level collision: cooldown, first-match box resolution, hard floor.

use hecs::{Entity, World};

use skyraid_core::components::{CollisionBox, CollisionCooldown, Obstacle, Player};
use skyraid_core::constants::OBSTACLE_FLASH_SECS;
use skyraid_core::enums::ObstacleKind;
use skyraid_core::events::GameEvent;
use skyraid_core::tuning::Tuning;
use skyraid_core::types::{Position, Velocity};
use skyraid_physics::collision::{clamp_to_floor, resolve_first, Aabb};

use crate::systems::effects;

/// Resolve the player against the city for one tick.
pub fn run(
    world: &mut World,
    player: Entity,
    events: &mut Vec<GameEvent>,
    dt: f32,
    tuning: &Tuning,
) {
    let cooling_down = match world.get::<&mut CollisionCooldown>(player) {
        Ok(mut cooldown) => {
            if cooldown.remaining_secs > 0.0 {
                cooldown.remaining_secs -= dt;
            }
            cooldown.remaining_secs > 0.0
        }
        Err(_) => return,
    };

    let hit = if cooling_down {
        None
    } else {
        resolve_against_city(world, player)
    };

    if let Some((obstacle, kind)) = hit {
        if let Ok(mut cooldown) = world.get::<&mut CollisionCooldown>(player) {
            cooldown.remaining_secs = tuning.collision_cooldown_secs;
        }
        effects::start_flash(world, obstacle, OBSTACLE_FLASH_SECS);
        log::debug!("player hit {kind:?}");
        events.push(GameEvent::ObstacleHit { kind });
    }

    if let Ok((_player, pos, vel)) =
        world.query_one_mut::<(&Player, &mut Position, &mut Velocity)>(player)
    {
        clamp_to_floor(&mut pos.0, &mut vel.0, tuning.floor_height);
    }
}

/// Push the player out of the first overlapping obstacle in layout order.
fn resolve_against_city(world: &mut World, player: Entity) -> Option<(Entity, ObstacleKind)> {
    let mut obstacles: Vec<(u32, Entity, ObstacleKind, Aabb)> = world
        .query::<(&Obstacle, &Position, &CollisionBox)>()
        .iter()
        .map(|(entity, (obstacle, pos, bounds))| {
            (
                obstacle.order,
                entity,
                obstacle.kind,
                Aabb::new(pos.0, bounds.half_extents()),
            )
        })
        .collect();
    obstacles.sort_by_key(|(order, ..)| *order);

    let (player_marker, pos, vel) = world
        .query_one_mut::<(&Player, &mut Position, &mut Velocity)>(player)
        .ok()?;
    let index = resolve_first(
        &mut pos.0,
        &mut vel.0,
        player_marker.radius,
        obstacles.iter().map(|(_, _, _, aabb)| *aabb),
    )?;
    let (_, entity, kind, _) = obstacles[index];
    Some((entity, kind))
}
