//! Events emitted by the simulation for audio and UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ObstacleKind;

/// Gameplay events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player fired a projectile.
    ShotFired { position: Vec3 },
    /// Projectile hit an enemy without destroying it.
    EnemyDamaged { remaining_health: i32 },
    /// Enemy destroyed by a projectile.
    EnemyDestroyed { position: Vec3, score: f32 },
    /// Projectile hit the enemy base.
    BaseHit { base_health: i32 },
    /// Player bumped into level geometry.
    ObstacleHit { kind: ObstacleKind },
    BoostActivated,
    BoostDepleted,
    BoostReady,
    /// Shield pickup appeared.
    ShieldSpawned { position: Vec3 },
    ShieldCollected,
    ShieldExpired,
    /// Player health reached zero.
    MissionFailed { score: f32 },
    /// Enemy base destroyed.
    MissionAccomplished { score: f32 },
}
