//! Game state snapshot: the complete visible state handed to the presentation layer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Orientation, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub muted: bool,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub shield: ShieldView,
    pub base: BaseView,
    /// Obstacles currently shown in a non-base color.
    pub tinted_obstacles: Vec<TintView>,
    pub hud: HudView,
    pub radar: Vec<RadarBlip>,
    pub events: Vec<GameEvent>,
}

/// Player craft pose and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub orientation: Orientation,
    pub velocity: Vec3,
    pub speed: f32,
    pub boost: BoostState,
    pub shield_active: bool,
}

/// A drone for the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub position: Vec3,
    pub facing: Vec3,
    pub health: i32,
}

/// A projectile for the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Vec3,
}

/// Shield pickup visibility and placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShieldView {
    pub position: Vec3,
    pub visible: bool,
}

/// Enemy base status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseView {
    pub position: Vec3,
    pub health: i32,
    pub color: u32,
}

/// Current tint of a flashing obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TintView {
    /// Layout order of the obstacle (matches `ObstacleView::order`).
    pub order: u32,
    pub color: u32,
}

/// Static obstacle description for the scene builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub order: u32,
    pub kind: ObstacleKind,
    pub position: Vec3,
    pub size: Vec3,
    pub color: u32,
}

/// Numeric readouts for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: f32,
    /// Player health in percent.
    pub health: f32,
    pub health_critical: bool,
    /// Opacity of the red damage overlay (0.0 = none).
    pub damage_overlay: f32,
    /// Base health in percent.
    pub base_health: f32,
    /// 100 minus base health.
    pub mission_progress: f32,
    /// Velocity magnitude.
    pub velocity: f32,
    /// Speed relative to the unboosted cap, clamped to 100.
    pub speed_percent: f32,
    pub speed_band: SpeedBand,
    pub low_speed_warning: bool,
    pub position: Vec3,
    /// Roll angle for the attitude arrow (radians).
    pub roll: f32,
    pub boost: BoostState,
    pub enemy_count: u32,
    pub initial_enemy_count: u32,
    /// Whole seconds of shield left, rounded up (0 when inactive).
    pub shield_secs: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
}

/// Enemy position on the radar, relative to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarBlip {
    /// East/west offset normalized to radar range (-1..1).
    pub x: f32,
    /// North/south offset normalized to radar range (-1..1).
    pub z: f32,
}
