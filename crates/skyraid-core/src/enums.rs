//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Player health reached zero.
    GameOver,
    /// Enemy base destroyed.
    Victory,
}

impl GamePhase {
    /// Whether a start/restart command is accepted in this phase.
    pub fn can_start(self) -> bool {
        matches!(
            self,
            GamePhase::MainMenu | GamePhase::GameOver | GamePhase::Victory
        )
    }
}

/// Boost resource lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum BoostState {
    /// Boost can be activated.
    #[default]
    Ready,
    /// Speed multiplier applied; counts down to cooldown.
    Boosting { remaining_secs: f32 },
    /// Waiting before the boost can be used again.
    CoolingDown { remaining_secs: f32 },
}

impl BoostState {
    pub fn is_boosting(&self) -> bool {
        matches!(self, BoostState::Boosting { .. })
    }
}

/// Static obstacle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Building,
    Platform,
    BoundaryWall,
}

/// Speed indicator band for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedBand {
    #[default]
    Normal,
    Fast,
    Boosting,
}

/// Logical keys understood by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    Boost,
    Fire,
}

impl Key {
    /// Map a browser-style key name to a logical key.
    /// Letter keys are case-insensitive.
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name {
            "ArrowLeft" => Key::YawLeft,
            "ArrowRight" => Key::YawRight,
            "ArrowUp" => Key::PitchUp,
            "ArrowDown" => Key::PitchDown,
            "Shift" => Key::Boost,
            " " | "Spacebar" => Key::Fire,
            _ => match name.to_ascii_lowercase().as_str() {
                "w" => Key::Forward,
                "s" => Key::Back,
                "a" => Key::StrafeLeft,
                "d" => Key::StrafeRight,
                "q" => Key::Ascend,
                "e" => Key::Descend,
                "z" => Key::RollLeft,
                "c" => Key::RollRight,
                _ => return None,
            },
        };
        Some(key)
    }
}
