//! Angle helpers shared by the movement pad, the orbit camera and the widget.
//!
//! Conventions:
//! - Pad space is 2D with +Y up. A drag angle of 0° points up and positive
//!   angles turn toward -X (counter-clockwise).
//! - World space is Y-up. A yaw of 0° faces +Z and positive yaw turns +Z
//!   toward +X.
//!
//! All angles are in degrees.

use raylib::prelude::{Vector2, Vector3};

/// Sign that treats zero as positive.
pub fn sign(v: f32) -> f32 {
    if v >= 0.0 { 1.0 } else { -1.0 }
}

/// Clamp to [0, 1].
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Clamp `v` between `a` and `b` in whichever order they come. Never panics.
pub fn clamp_between(v: f32, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    v.max(lo).min(hi)
}

/// Lerp with `t` clamped to [0, 1].
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

/// Snap `angle` to the nearest of `sep_count` evenly spaced directions.
///
/// Rounds half-up on the magnitude and keeps the sign, so `-22.5` snaps to
/// `-45` and `22.4` snaps to `0`. A `sep_count` of zero is treated as one.
pub fn correct_angle(angle: f32, sep_count: u32) -> f32 {
    let sep = 360.0 / sep_count.max(1) as f32;
    let half = sep / 2.0;
    ((angle.abs() + half) / sep).floor() * sep * sign(angle)
}

/// Signed pad angle of `v` measured from up. Dragging left is positive.
///
/// Returns 0 for the zero vector.
pub fn drag_angle(v: Vector2) -> f32 {
    let len = v.length();
    if len <= f32::EPSILON {
        return 0.0;
    }
    let cos = (v.y / len).clamp(-1.0, 1.0);
    cos.acos().to_degrees() * sign(-v.x)
}

/// Unit pad vector for a drag angle, the inverse of [`drag_angle`].
pub fn direction_from_angle(angle: f32) -> Vector2 {
    let r = angle.to_radians();
    Vector2::new(-r.sin(), r.cos())
}

/// Wrap into [0, 360).
pub fn wrap_degrees(angle: f32) -> f32 {
    let w = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 { 0.0 } else { w }
}

/// Shortest signed difference from `current` to `target`, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut d = (target - current).rem_euclid(360.0);
    if d > 180.0 {
        d -= 360.0;
    }
    d
}

/// Rotate a planar vector about +Y by `yaw` degrees.
pub fn yaw_rotate(yaw: f32, v: Vector3) -> Vector3 {
    let (s, c) = yaw.to_radians().sin_cos();
    Vector3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}

/// Yaw that faces along `v` on the XZ plane, in [0, 360).
pub fn heading_of(v: Vector3) -> f32 {
    wrap_degrees(v.x.atan2(v.z).to_degrees())
}

/// Unsigned angle between two 3D vectors. Zero-length input yields 0.
pub fn angle_between(a: Vector3, b: Vector3) -> f32 {
    let la = a.length();
    let lb = b.length();
    if la <= f32::EPSILON || lb <= f32::EPSILON {
        return 0.0;
    }
    let cos = ((a.x * b.x + a.y * b.y + a.z * b.z) / (la * lb)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
