//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player and session actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// A key was pressed (browser-style key name, e.g. "w", "ArrowUp", "Shift").
    KeyDown { key: String },
    /// A key was released.
    KeyUp { key: String },
    /// Fire one projectile.
    Fire,
    /// Try to start a boost.
    ActivateBoost,

    // --- Session control ---
    /// Start a new game, or restart after game over / victory.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Flip between paused and active.
    TogglePause,
    /// Set the audio mute flag.
    SetMuted { muted: bool },
    /// Flip the audio mute flag.
    ToggleMute,
}
