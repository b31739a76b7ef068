//! Game loop thread: ticks an engine at 60Hz and publishes its snapshots.
//!
//! The engine is built by the caller, so invalid tuning is reported before a
//! thread exists. Messages arrive over an `mpsc` channel and are drained at
//! the top of every frame.

use std::sync::mpsc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use skyraid_core::constants::FRAME_RATE_REFERENCE;
use skyraid_core::state::GameStateSnapshot;
use skyraid_sim::engine::SimulationEngine;

use crate::state::{LoopMessage, RunningLoop, SnapshotSlot};

/// Frame budget at the reference frame rate.
pub const FRAME_DURATION: Duration =
    Duration::from_nanos(1_000_000_000 / FRAME_RATE_REFERENCE as u64);

/// Move `engine` onto a new game loop thread.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    snapshot: SnapshotSlot,
) -> std::io::Result<RunningLoop> {
    let (inbox, messages) = mpsc::channel::<LoopMessage>();

    let thread = std::thread::Builder::new()
        .name("skyraid-game-loop".into())
        .spawn(move || run_game_loop(engine, messages, &snapshot))?;

    Ok(RunningLoop { inbox, thread })
}

/// Queue every pending command. Returns false when the loop should stop.
fn drain_messages(messages: &mpsc::Receiver<LoopMessage>, engine: &mut SimulationEngine) -> bool {
    loop {
        match messages.try_recv() {
            Ok(LoopMessage::Command(command)) => engine.queue_command(command),
            Ok(LoopMessage::Shutdown) => {
                log::info!("game loop shutting down");
                return false;
            }
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => {
                log::warn!("session dropped its sender, stopping game loop");
                return false;
            }
        }
    }
}

fn run_game_loop(
    mut engine: SimulationEngine,
    messages: mpsc::Receiver<LoopMessage>,
    snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    log::debug!("game loop started, city has {} obstacles", engine.layout().len());

    let mut last_frame = Instant::now();
    let mut deadline = last_frame;

    while drain_messages(&messages, &mut engine) {
        let now = Instant::now();
        let latest = engine.tick(now.duration_since(last_frame).as_secs_f32());
        last_frame = now;

        if let Ok(mut slot) = snapshot.lock() {
            *slot = Some(latest);
        }

        deadline += FRAME_DURATION;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        } else if now - deadline > FRAME_DURATION * 2 {
            // Fell behind; drop the backlog rather than spin to catch up.
            deadline = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use skyraid_core::commands::PlayerCommand;
    use skyraid_core::enums::GamePhase;
    use skyraid_sim::engine::SimConfig;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_drain_queues_commands_until_shutdown() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        tx.send(LoopMessage::Command(PlayerCommand::StartGame)).unwrap();
        tx.send(LoopMessage::Command(PlayerCommand::ToggleMute)).unwrap();

        assert!(drain_messages(&rx, &mut engine));
        let snap = engine.tick(0.0);
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(snap.muted);

        // Commands behind a shutdown are left unread.
        tx.send(LoopMessage::Shutdown).unwrap();
        tx.send(LoopMessage::Command(PlayerCommand::Pause)).unwrap();
        assert!(!drain_messages(&rx, &mut engine));
        assert_eq!(engine.tick(0.0).phase, GamePhase::Active);

        drop(tx);
        assert!(!drain_messages(&rx, &mut engine));
    }

    #[test]
    fn test_frame_duration_constant() {
        assert_eq!(FRAME_DURATION.as_nanos(), (1_000_000_000u64 / 60) as u128);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_stops() {
        let slot: SnapshotSlot = Arc::new(Mutex::new(None));
        let running = spawn_game_loop(engine(), slot.clone()).unwrap();
        assert!(running.send(LoopMessage::Command(PlayerCommand::StartGame)));

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut phase = None;
        while Instant::now() < deadline {
            phase = slot.lock().unwrap().as_ref().map(|s| s.phase);
            if phase == Some(GamePhase::Active) {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(phase, Some(GamePhase::Active));

        assert!(running.send(LoopMessage::Shutdown));
        running.thread.join().unwrap();
    }

    #[test]
    fn test_loop_stops_when_sender_dropped() {
        let running = spawn_game_loop(engine(), SnapshotSlot::default()).unwrap();
        drop(running.inbox);
        running.thread.join().unwrap();
    }
}
