//! Flight physics and steering for SKYRAID.
//!
//! Pure functions over plain data: the kinematic integrator, the boost
//! lifecycle, sphere-vs-box collision response and enemy seek steering.
//! No ECS dependency.

pub mod collision;
pub mod kinematics;
pub mod steering;

pub use skyraid_core as core;

#[cfg(test)]
mod tests;
