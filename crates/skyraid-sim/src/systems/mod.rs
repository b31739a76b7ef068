//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only)
//! plus whatever engine state they touch. They do not own state.

pub mod collision;
pub mod effects;
pub mod enemy_ai;
pub mod flight;
pub mod projectiles;
pub mod shield;
pub mod snapshot;
