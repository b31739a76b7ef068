//! Sphere-vs-box collision response against static level geometry.
//!
//! The resolver is deliberately cheap: boxes are scanned in the order given
//! and only the first overlapping box is resolved, by pushing the sphere out
//! along the axis of least overlap.

use glam::Vec3;

/// Axis-aligned box given by its centre and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// World axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Minimum-translation push for one sphere/box overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub axis: Axis,
    /// Signed distance to move the sphere along `axis`.
    pub push: f32,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Per-axis gap between the box surface and `point` (negative inside).
    pub fn separation(&self, point: Vec3) -> Vec3 {
        (point - self.center).abs() - self.half_extents
    }
}

/// Test a sphere against a box. Returns the push that moves the sphere
/// onto the inflated box surface along the axis of smallest overlap.
pub fn sphere_box_contact(center: Vec3, radius: f32, aabb: &Aabb) -> Option<Contact> {
    let gap = aabb.separation(center);
    if !(gap.x < radius && gap.y < radius && gap.z < radius) {
        return None;
    }

    let delta = center - aabb.center;
    let overlap = Vec3::splat(radius) + aabb.half_extents - delta.abs();

    let (axis, amount, offset) = if overlap.x < overlap.y && overlap.x < overlap.z {
        (Axis::X, overlap.x, delta.x)
    } else if overlap.y < overlap.z {
        (Axis::Y, overlap.y, delta.y)
    } else {
        (Axis::Z, overlap.z, delta.z)
    };

    // Push away from the box centre; a sphere exactly on the centre plane
    // goes to the positive side.
    let push = if offset < 0.0 { -amount } else { amount };
    Some(Contact { axis, push })
}

/// Move the sphere by the contact push and kill velocity along that axis.
pub fn apply_contact(position: &mut Vec3, velocity: &mut Vec3, contact: &Contact) {
    match contact.axis {
        Axis::X => {
            position.x += contact.push;
            velocity.x = 0.0;
        }
        Axis::Y => {
            position.y += contact.push;
            velocity.y = 0.0;
        }
        Axis::Z => {
            position.z += contact.push;
            velocity.z = 0.0;
        }
    }
}

/// Resolve against the first overlapping box in iteration order.
/// Returns the index of the box that was resolved.
pub fn resolve_first<I>(
    position: &mut Vec3,
    velocity: &mut Vec3,
    radius: f32,
    boxes: I,
) -> Option<usize>
where
    I: IntoIterator<Item = Aabb>,
{
    for (index, aabb) in boxes.into_iter().enumerate() {
        if let Some(contact) = sphere_box_contact(*position, radius, &aabb) {
            apply_contact(position, velocity, &contact);
            return Some(index);
        }
    }
    None
}

/// Keep the sphere at or above `floor`. Returns true if it was clamped.
pub fn clamp_to_floor(position: &mut Vec3, velocity: &mut Vec3, floor: f32) -> bool {
    if position.y < floor {
        position.y = floor;
        velocity.y = 0.0;
        true
    } else {
        false
    }
}
