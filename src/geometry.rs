//! Distance and angle helpers
//!
//! Free pure functions shared by collision detection, resolution and boundary
//! reflection. The angle convention here is load-bearing: headings and
//! collision axes are expressed as `angle_of(x, y) = π − atan2(y, x)`, and a
//! body moving with heading `h` translates by `(+cos h, −sin h)` in screen
//! space (y grows downward). Every rotation in the sim assumes this pairing.

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Angle of the vector (x, y) under the sim's heading convention:
/// `π − atan2(y, x)`.
///
/// Not the plain `atan2` convention. For the degenerate (0, 0) input,
/// `atan2(0, 0)` is 0, so this deterministically returns π; the collision
/// resolver relies on that as its fallback axis for coincident centers.
#[inline]
pub fn angle_of(x: f32, y: f32) -> f32 {
    std::f32::consts::PI - y.atan2(x)
}
