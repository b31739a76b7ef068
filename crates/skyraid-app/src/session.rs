//! Session surface: start the game loop, forward commands, poll snapshots, stop.

use std::sync::PoisonError;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::state::GameStateSnapshot;
use skyraid_core::tuning::InvalidTuning;
use skyraid_sim::engine::{SimConfig, SimulationEngine};

use crate::game_loop;
use crate::state::{AppState, LoopMessage};

/// Failures of the session surface.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session already running")]
    AlreadyRunning,
    #[error("session not started")]
    NotStarted,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("session state lock poisoned")]
    LockPoisoned,
    #[error("cannot start session: {0}")]
    InvalidTuning(#[from] InvalidTuning),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl<T> From<PoisonError<T>> for SessionError {
    fn from(_: PoisonError<T>) -> Self {
        SessionError::LockPoisoned
    }
}

/// Start the game loop. Fails if one is already running or the tuning is invalid.
pub fn start(state: &AppState, config: SimConfig) -> Result<(), SessionError> {
    let mut slot = state.game_loop.lock()?;
    if slot.is_some() {
        return Err(SessionError::AlreadyRunning);
    }

    let seed = config.seed;
    let engine = SimulationEngine::new(config)?;
    *slot = Some(game_loop::spawn_game_loop(engine, state.snapshot.clone())?);
    log::info!("session started (seed {seed})");
    Ok(())
}

/// Forward a player command to the running game loop.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), SessionError> {
    let slot = state.game_loop.lock()?;
    let running = slot.as_ref().ok_or(SessionError::NotStarted)?;
    if running.send(LoopMessage::Command(command)) {
        Ok(())
    } else {
        Err(SessionError::ChannelClosed)
    }
}

/// The most recent snapshot, if the loop has ticked at least once.
pub fn latest_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, SessionError> {
    Ok(state.snapshot.lock()?.clone())
}

/// Stop the game loop and wait for its thread to finish.
pub fn shutdown(state: &AppState) -> Result<(), SessionError> {
    let running = state.game_loop.lock()?.take().ok_or(SessionError::NotStarted)?;

    // The loop may already have exited on its own.
    running.send(LoopMessage::Shutdown);
    drop(running.inbox);
    if running.thread.join().is_err() {
        log::error!("game loop thread panicked");
    }
    Ok(())
}
