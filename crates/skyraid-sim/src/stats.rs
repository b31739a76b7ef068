//! Running score and vitals tracked by the engine.
//!
//! Stored in `SimulationEngine`, not as ECS components.

use skyraid_core::constants::MAX_HEALTH;

/// Score, player health and mission counters for the current game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    pub score: f32,
    /// Player health, 0..=100.
    pub health: f32,
    /// 100 minus base health.
    pub mission_progress: f32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
    pub base_hits: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            score: 0.0,
            health: MAX_HEALTH,
            mission_progress: 0.0,
            enemies_destroyed: 0,
            shots_fired: 0,
            base_hits: 0,
        }
    }
}

impl GameStats {
    /// Drain health, clamping at zero. Returns true once health is gone.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health = (self.health - amount).clamp(0.0, MAX_HEALTH);
        self.health <= 0.0
    }
}
