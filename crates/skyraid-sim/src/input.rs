//! Held-key set consumed by the flight system each tick.

use std::collections::HashSet;

use skyraid_core::enums::Key;
use skyraid_physics::kinematics::FlightControls;

/// Keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key held. Returns false if it already was (key repeat).
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Control axes for the integrator. Opposing keys cancel.
    pub fn controls(&self) -> FlightControls {
        FlightControls {
            yaw: self.axis(Key::YawLeft, Key::YawRight),
            pitch: self.axis(Key::PitchUp, Key::PitchDown),
            roll: self.axis(Key::RollLeft, Key::RollRight),
            surge: self.axis(Key::Forward, Key::Back),
            strafe: self.axis(Key::StrafeRight, Key::StrafeLeft),
            lift: self.axis(Key::Ascend, Key::Descend),
        }
    }

    fn axis(&self, positive: Key, negative: Key) -> f32 {
        let mut value = 0.0;
        if self.is_held(positive) {
            value += 1.0;
        }
        if self.is_held(negative) {
            value -= 1.0;
        }
        value
    }
}
