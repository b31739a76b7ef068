//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use glam::Vec3;
use hecs::{Entity, World};

use skyraid_core::components::*;
use skyraid_core::constants::{CRITICAL_HEALTH, FAST_SPEED_PERCENT, LOW_SPEED_THRESHOLD, MAX_HEALTH, RADAR_RANGE};
use skyraid_core::enums::*;
use skyraid_core::events::GameEvent;
use skyraid_core::state::*;
use skyraid_core::tuning::Tuning;
use skyraid_core::types::{Orientation, Position, SimTime, Velocity};

use crate::stats::GameStats;

/// Entity handles the snapshot reads singletons from.
#[derive(Debug, Clone, Copy)]
pub struct Singletons {
    pub player: Entity,
    pub base: Entity,
    pub shield: Entity,
}

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    muted: bool,
    events: Vec<GameEvent>,
    stats: &GameStats,
    singletons: Singletons,
    tuning: &Tuning,
) -> GameStateSnapshot {
    let player = build_player(world, singletons.player);
    let enemies = build_enemies(world);
    let radar = build_radar(&enemies, player.position);
    let hud = build_hud(&player, enemies.len() as u32, stats, world, singletons, tuning);

    GameStateSnapshot {
        time: *time,
        phase,
        muted,
        projectiles: build_projectiles(world),
        shield: build_shield(world, singletons.shield),
        base: build_base(world, singletons.base),
        tinted_obstacles: build_tinted(world),
        player,
        enemies,
        hud,
        radar,
        events,
    }
}

/// Describe every static obstacle, in layout order.
pub fn build_layout(world: &World) -> Vec<ObstacleView> {
    let mut layout: Vec<ObstacleView> = world
        .query::<(&Obstacle, &Position, &CollisionBox, &Tint)>()
        .iter()
        .map(|(_, (obstacle, pos, bounds, tint))| ObstacleView {
            order: obstacle.order,
            kind: obstacle.kind,
            position: pos.0,
            size: bounds.size,
            color: tint.base,
        })
        .collect();
    layout.sort_by_key(|view| view.order);
    layout
}

fn build_player(world: &World, player: Entity) -> PlayerView {
    let mut query = match world
        .query_one::<(&Position, &Velocity, &Orientation, &BoostState, &ShieldBuff)>(player)
    {
        Ok(query) => query,
        Err(_) => return PlayerView::default(),
    };
    match query.get() {
        Some((pos, vel, orientation, boost, buff)) => PlayerView {
            position: pos.0,
            orientation: *orientation,
            velocity: vel.0,
            speed: vel.speed(),
            boost: *boost,
            shield_active: buff.active,
        },
        None => PlayerView::default(),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Facing)>()
        .iter()
        .map(|(_, (enemy, pos, facing))| EnemyView {
            id: enemy.spawn_seq,
            position: pos.0,
            facing: facing.0,
            health: enemy.health,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.seq,
            position: pos.0,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_shield(world: &World, shield: Entity) -> ShieldView {
    let position = world
        .get::<&Position>(shield)
        .map(|p| p.0)
        .unwrap_or_default();
    let visible = world
        .get::<&ShieldPickup>(shield)
        .map(|pickup| pickup.visible)
        .unwrap_or(false);
    ShieldView { position, visible }
}

fn build_base(world: &World, base: Entity) -> BaseView {
    let position = world
        .get::<&Position>(base)
        .map(|p| p.0)
        .unwrap_or_default();
    let health = world
        .get::<&EnemyBase>(base)
        .map(|b| b.health)
        .unwrap_or(0);
    let color = world
        .get::<&Tint>(base)
        .map(|t| t.current)
        .unwrap_or_default();
    BaseView {
        position,
        health,
        color,
    }
}

fn build_tinted(world: &World) -> Vec<TintView> {
    let mut tinted: Vec<TintView> = world
        .query::<(&Obstacle, &Tint)>()
        .iter()
        .filter(|(_, (_, tint))| tint.current != tint.base)
        .map(|(_, (obstacle, tint))| TintView {
            order: obstacle.order,
            color: tint.current,
        })
        .collect();
    tinted.sort_by_key(|t| t.order);
    tinted
}

/// Enemies within radar range of the player, offsets normalized to the range.
fn build_radar(enemies: &[EnemyView], player_pos: Vec3) -> Vec<RadarBlip> {
    let center = Position(player_pos);
    enemies
        .iter()
        .filter(|enemy| center.horizontal_distance_to(&Position(enemy.position)) <= RADAR_RANGE)
        .map(|enemy| RadarBlip {
            x: (enemy.position.x - player_pos.x) / RADAR_RANGE,
            z: (enemy.position.z - player_pos.z) / RADAR_RANGE,
        })
        .collect()
}

fn build_hud(
    player: &PlayerView,
    enemy_count: u32,
    stats: &GameStats,
    world: &World,
    singletons: Singletons,
    tuning: &Tuning,
) -> HudView {
    let speed_percent = (player.speed / tuning.max_speed * 100.0).min(100.0);
    let speed_band = if player.boost.is_boosting() {
        SpeedBand::Boosting
    } else if speed_percent > FAST_SPEED_PERCENT {
        SpeedBand::Fast
    } else {
        SpeedBand::Normal
    };

    let base_health = world
        .get::<&EnemyBase>(singletons.base)
        .map(|b| b.health)
        .unwrap_or(0);
    let shield_secs = world
        .get::<&ShieldBuff>(singletons.player)
        .ok()
        .filter(|buff| buff.active)
        .map(|buff| buff.remaining_secs.max(0.0).ceil() as u32)
        .unwrap_or(0);

    HudView {
        score: stats.score,
        health: stats.health,
        health_critical: stats.health <= CRITICAL_HEALTH,
        damage_overlay: ((MAX_HEALTH - stats.health) / 150.0).max(0.0),
        base_health: base_health as f32,
        mission_progress: stats.mission_progress,
        velocity: player.speed,
        speed_percent,
        speed_band,
        low_speed_warning: player.speed < LOW_SPEED_THRESHOLD,
        position: player.position,
        roll: player.orientation.roll,
        boost: player.boost,
        enemy_count,
        initial_enemy_count: tuning.initial_enemies,
        shield_secs,
        enemies_destroyed: stats.enemies_destroyed,
        shots_fired: stats.shots_fired,
    }
}
