//! skyraid: headless demo host for the SKYRAID simulation.
//!
//! Usage:
//!   skyraid [--tuning tuning.json] [--seed N] [--seconds S] [--verbose]
//!
//! Starts a session, flies a simple autopilot (thrust, periodic turns,
//! bursts of fire, one boost) and logs the HUD once per second.

use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use skyraid_app::logging;
use skyraid_app::session::{self, SessionError};
use skyraid_app::state::AppState;
use skyraid_core::commands::PlayerCommand;
use skyraid_core::enums::GamePhase;
use skyraid_core::state::GameStateSnapshot;
use skyraid_sim::config::{load_tuning, ConfigError};
use skyraid_sim::engine::SimConfig;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Headless SKYRAID demo: flies an autopilot and logs the HUD.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON tuning overrides (missing fields use defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Demo length in seconds
    #[arg(long, default_value_t = 10.0, value_parser = parse_seconds)]
    seconds: f32,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_seconds(raw: &str) -> Result<f32, String> {
    match raw.parse::<f32>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => Ok(secs),
        _ => Err(format!("invalid duration: {raw}")),
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(&args) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let tuning = match &args.tuning {
        Some(path) => load_tuning(path)?,
        None => Default::default(),
    };
    let config = SimConfig {
        seed: args.seed,
        tuning,
    };

    let state = AppState::new();
    session::start(&state, config)?;
    let outcome = fly_autopilot(&state, args.seconds);
    session::shutdown(&state)?;

    match outcome? {
        Some(snapshot) => log_summary(&snapshot),
        None => log::warn!("no snapshot was produced"),
    }
    Ok(())
}

/// Scripted inputs, keyed off elapsed wall time.
fn fly_autopilot(state: &AppState, seconds: f32) -> Result<Option<GameStateSnapshot>, SessionError> {
    let key_down = |key: &str| PlayerCommand::KeyDown { key: key.into() };
    let key_up = |key: &str| PlayerCommand::KeyUp { key: key.into() };

    session::send_command(state, PlayerCommand::StartGame)?;
    session::send_command(state, key_down("w"))?;

    let start = Instant::now();
    let mut step = 0u32;
    let mut boosted = false;
    while start.elapsed().as_secs_f32() < seconds {
        thread::sleep(Duration::from_millis(100));
        step += 1;

        // Fire every half second, turn for half a second out of every three.
        if step % 5 == 0 {
            session::send_command(state, PlayerCommand::Fire)?;
        }
        match step % 30 {
            10 => session::send_command(state, key_down("ArrowLeft"))?,
            15 => session::send_command(state, key_up("ArrowLeft"))?,
            _ => {}
        }
        if !boosted && step == 10 {
            session::send_command(state, key_down("Shift"))?;
            session::send_command(state, key_up("Shift"))?;
            boosted = true;
        }

        if step % 10 == 0 {
            if let Some(snapshot) = session::latest_snapshot(state)? {
                log_hud(&snapshot);
                if matches!(snapshot.phase, GamePhase::GameOver | GamePhase::Victory) {
                    break;
                }
            }
        }
    }

    session::latest_snapshot(state)
}

fn log_hud(snapshot: &GameStateSnapshot) {
    let hud = &snapshot.hud;
    log::info!(
        "t={:.1}s score={:.0} health={:.0} base={:.0} enemies={}/{} speed={:.0}% boost={:?}",
        snapshot.time.elapsed_secs,
        hud.score,
        hud.health,
        hud.base_health,
        hud.enemy_count,
        hud.initial_enemy_count,
        hud.speed_percent,
        hud.boost,
    );
}

fn log_summary(snapshot: &GameStateSnapshot) {
    let hud = &snapshot.hud;
    log::info!(
        "{:?}: score {:.0}, {} drones destroyed, {} shots, mission {:.0}%",
        snapshot.phase,
        hud.score,
        hud.enemies_destroyed,
        hud.shots_fired,
        hud.mission_progress,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["skyraid"]).unwrap();
        assert_eq!(args.seed, 42);
        assert_eq!(args.seconds, 10.0);
        assert!(args.tuning.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "skyraid", "--seed", "9", "-v", "--tuning", "t.json", "--seconds", "2.5",
        ])
        .unwrap();
        assert_eq!(args.seed, 9);
        assert!(args.verbose);
        assert_eq!(args.tuning, Some(PathBuf::from("t.json")));
        assert_eq!(args.seconds, 2.5);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Args::try_parse_from(["skyraid", "--seed"]).is_err());
        assert!(Args::try_parse_from(["skyraid", "--seed", "abc"]).is_err());
        assert!(Args::try_parse_from(["skyraid", "--seconds", "-1"]).is_err());
        assert!(Args::try_parse_from(["skyraid", "--fly"]).is_err());
    }
}
