//! Simulation engine for SKYRAID.
//!
//! Owns the hecs ECS world, runs systems once per rendered frame,
//! and produces GameStateSnapshots for the presentation layer.

pub mod config;
pub mod engine;
pub mod input;
pub mod stats;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyraid_core as core;
