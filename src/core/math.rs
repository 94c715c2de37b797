// Math utilities and helper functions

use glam::Vec2;

/// Tolerance used when deciding that a sine or cosine is effectively zero
pub const TRIG_EPSILON: f32 = 1e-4;

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep on [0, 1]: zero slope at both ends
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Rotate a vector counter-clockwise by `angle` radians
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
