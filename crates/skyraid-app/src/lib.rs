//! SKYRAID host application.
//!
//! Runs the simulation engine on its own thread and exposes a small
//! session surface (start, send command, poll snapshot, shutdown).

pub mod game_loop;
pub mod logging;
pub mod session;
pub mod state;

pub use skyraid_core as core;
