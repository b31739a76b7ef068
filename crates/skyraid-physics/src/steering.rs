//! Seek steering and spawn placement for drones.

use glam::Vec3;
use rand::Rng;

use crate::kinematics::frame_units;

/// Unit vector from `from` toward `target`, or zero if they coincide.
pub fn direction_to(from: Vec3, target: Vec3) -> Vec3 {
    (target - from).normalize_or_zero()
}

/// Move `from` straight toward `target` at `speed` per frame unit.
pub fn seek(from: Vec3, target: Vec3, speed: f32, dt: f32) -> Vec3 {
    from + direction_to(from, target) * (speed * frame_units(dt))
}

/// Whether two points are closer than `range`.
pub fn within(a: Vec3, b: Vec3, range: f32) -> bool {
    a.distance(b) < range
}

/// Ring placement around `center`: random bearing, horizontal distance in
/// `min_distance..max_distance`, vertical jitter of ±`vertical_jitter / 2`.
pub fn spawn_around<R: Rng + ?Sized>(
    rng: &mut R,
    center: Vec3,
    min_distance: f32,
    max_distance: f32,
    vertical_jitter: f32,
) -> Vec3 {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let distance = min_distance + rng.gen::<f32>() * (max_distance - min_distance);
    let dy = (rng.gen::<f32>() - 0.5) * vertical_jitter;

    Vec3::new(
        center.x + angle.cos() * distance,
        center.y + dy,
        center.z + angle.sin() * distance,
    )
}
