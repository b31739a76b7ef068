//! Gameplay tuning: every knob the systems read, defaulting to `constants`.
//!
//! Loaded from JSON by the host; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunable gameplay parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // --- Flight ---
    pub rotation_speed: f32,
    pub move_speed: f32,
    pub damping: f32,
    pub max_speed: f32,
    pub boost_multiplier: f32,
    pub boost_duration_secs: f32,
    pub boost_cooldown_secs: f32,
    pub player_radius: f32,
    pub floor_height: f32,
    pub collision_cooldown_secs: f32,

    // --- Enemies ---
    pub initial_enemies: u32,
    pub max_enemies: u32,
    pub enemy_respawn_chance: f64,
    pub enemy_seek_speed: f32,
    pub enemy_contact_range: f32,
    pub enemy_contact_damage: f32,
    pub enemy_health: i32,

    // --- Projectiles ---
    pub projectile_speed: f32,
    pub projectile_max_range: f32,
    pub projectile_hit_radius: f32,
    pub projectile_damage: i32,
    pub kill_score: f32,
    pub passive_score_per_sec: f32,

    // --- Base ---
    pub base_hit_radius: f32,
    pub base_hit_damage: i32,

    // --- Shield ---
    pub shield_first_spawn_secs: f32,
    pub shield_respawn_secs: f32,
    pub shield_duration_secs: f32,
    pub shield_pickup_range: f32,

    // --- City ---
    pub building_count: u32,
    pub platform_count: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            move_speed: MOVE_SPEED,
            damping: DAMPING,
            max_speed: MAX_SPEED,
            boost_multiplier: BOOST_MULTIPLIER,
            boost_duration_secs: BOOST_DURATION_SECS,
            boost_cooldown_secs: BOOST_COOLDOWN_SECS,
            player_radius: PLAYER_RADIUS,
            floor_height: FLOOR_HEIGHT,
            collision_cooldown_secs: COLLISION_COOLDOWN_SECS,
            initial_enemies: INITIAL_ENEMY_COUNT,
            max_enemies: MAX_ENEMY_COUNT,
            enemy_respawn_chance: ENEMY_RESPAWN_CHANCE,
            enemy_seek_speed: ENEMY_SEEK_SPEED,
            enemy_contact_range: ENEMY_CONTACT_RANGE,
            enemy_contact_damage: ENEMY_CONTACT_DAMAGE,
            enemy_health: ENEMY_HEALTH,
            projectile_speed: PROJECTILE_SPEED,
            projectile_max_range: PROJECTILE_MAX_RANGE,
            projectile_hit_radius: PROJECTILE_HIT_RADIUS,
            projectile_damage: PROJECTILE_DAMAGE,
            kill_score: KILL_SCORE,
            passive_score_per_sec: PASSIVE_SCORE_PER_SEC,
            base_hit_radius: BASE_HIT_RADIUS,
            base_hit_damage: BASE_HIT_DAMAGE,
            shield_first_spawn_secs: SHIELD_FIRST_SPAWN_SECS,
            shield_respawn_secs: SHIELD_RESPAWN_SECS,
            shield_duration_secs: SHIELD_DURATION_SECS,
            shield_pickup_range: SHIELD_PICKUP_RANGE,
            building_count: BUILDING_COUNT,
            platform_count: PLATFORM_COUNT,
        }
    }
}

/// A tuning field holding a value the simulation cannot run with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("tuning field `{field}` = {value} (expected {expected})")]
pub struct InvalidTuning {
    pub field: &'static str,
    pub value: f64,
    pub expected: &'static str,
}

impl Tuning {
    /// Reject values that would make the simulation degenerate.
    pub fn validate(&self) -> Result<(), InvalidTuning> {
        let positive = [
            ("rotation_speed", self.rotation_speed),
            ("move_speed", self.move_speed),
            ("max_speed", self.max_speed),
            ("boost_multiplier", self.boost_multiplier),
            ("player_radius", self.player_radius),
            ("projectile_speed", self.projectile_speed),
            ("projectile_max_range", self.projectile_max_range),
            ("projectile_hit_radius", self.projectile_hit_radius),
            ("base_hit_radius", self.base_hit_radius),
            ("shield_duration_secs", self.shield_duration_secs),
            ("shield_pickup_range", self.shield_pickup_range),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(InvalidTuning {
                    field,
                    value: value as f64,
                    expected: "> 0",
                });
            }
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(InvalidTuning {
                field: "damping",
                value: self.damping as f64,
                expected: "0..=1",
            });
        }
        if !(0.0..=1.0).contains(&self.enemy_respawn_chance) {
            return Err(InvalidTuning {
                field: "enemy_respawn_chance",
                value: self.enemy_respawn_chance,
                expected: "0..=1",
            });
        }
        if self.enemy_health <= 0 {
            return Err(InvalidTuning {
                field: "enemy_health",
                value: self.enemy_health as f64,
                expected: "> 0",
            });
        }
        if self.initial_enemies > self.max_enemies {
            return Err(InvalidTuning {
                field: "initial_enemies",
                value: self.initial_enemies as f64,
                expected: "<= max_enemies",
            });
        }
        Ok(())
    }
}
