//! Handles shared between session calls and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::state::GameStateSnapshot;

/// Overwritten by the loop with every tick's snapshot.
pub type SnapshotSlot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// What a session can tell the game loop.
#[derive(Debug)]
pub enum LoopMessage {
    Command(PlayerCommand),
    Shutdown,
}

/// A live game loop: where to send messages and the thread to join.
pub struct RunningLoop {
    pub inbox: mpsc::Sender<LoopMessage>,
    pub thread: JoinHandle<()>,
}

impl RunningLoop {
    /// Returns false once the loop has stopped listening.
    pub fn send(&self, message: LoopMessage) -> bool {
        self.inbox.send(message).is_ok()
    }
}

/// Session state. At most one loop runs at a time.
#[derive(Default)]
pub struct AppState {
    pub game_loop: Mutex<Option<RunningLoop>>,
    pub snapshot: SnapshotSlot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.game_loop
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}
