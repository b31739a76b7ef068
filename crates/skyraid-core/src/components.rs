//! ECS components for hecs entities.
//!
//! Components are plain data structs with few methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ObstacleKind;

/// Marks the player craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Collision sphere radius.
    pub radius: f32,
}

/// Timed shield buff carried by the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShieldBuff {
    pub active: bool,
    pub remaining_secs: f32,
}

/// Time left before the collision resolver runs again.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CollisionCooldown {
    pub remaining_secs: f32,
}

/// A seeking drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub health: i32,
    /// Monotonic spawn order; hit scans walk enemies in this order.
    pub spawn_seq: u64,
}

/// Unit vector an entity is facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing(pub Vec3);

/// Marks a player-fired shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Monotonic fire order.
    pub seq: u64,
}

/// A static piece of level geometry the player collides with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Layout order; the collision resolver scans in this order.
    pub order: u32,
}

/// Axis-aligned bounding box size (full extents), centred on `Position`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionBox {
    pub size: Vec3,
}

impl CollisionBox {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            size: Vec3::new(x, y, z),
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}

/// Display color (0xRRGGBB) with the color it reverts to after a flash.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tint {
    pub base: u32,
    pub current: u32,
}

impl Tint {
    pub fn new(base: u32) -> Self {
        Self {
            base,
            current: base,
        }
    }
}

/// Transient color flash; the tint reverts when the timer runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flash {
    pub remaining_secs: f32,
}

/// The enemy base, destroyed by repeated projectile impacts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBase {
    pub health: i32,
}

/// Reusable shield power-up.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShieldPickup {
    pub visible: bool,
    /// Countdown until the pickup reappears, if one is scheduled.
    pub respawn_in_secs: Option<f32>,
}
