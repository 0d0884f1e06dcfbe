//! Tween curve and playhead helpers.
//!
//! [`Tween`](crate::components::tween::Tween) delegates to these to shape its
//! progress and to move its playhead. The systems that own animated values
//! (orbit camera align, joystick widget sequences) step their tweens through
//! [`TweenSlot::step`](crate::components::tween::TweenSlot::step).

use crate::components::tween::Easing;

/// Which end of the curve is shaped.
#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

/// Polynomial ease of degree `power`.
fn shaped(shape: Shape, power: i32, t: f32) -> f32 {
    match shape {
        Shape::In => t.powi(power),
        Shape::Out => 1.0 - (1.0 - t).powi(power),
        Shape::InOut if t < 0.5 => 0.5 * (2.0 * t).powi(power),
        Shape::InOut => 1.0 - 0.5 * (2.0 - 2.0 * t).powi(power),
    }
}

/// Map linear progress to eased progress. `t` is clamped to [0, 1].
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => shaped(Shape::In, 2, t),
        Easing::QuadOut => shaped(Shape::Out, 2, t),
        Easing::QuadInOut => shaped(Shape::InOut, 2, t),
        Easing::CubicIn => shaped(Shape::In, 3, t),
        Easing::CubicOut => shaped(Shape::Out, 3, t),
        Easing::CubicInOut => shaped(Shape::InOut, 3, t),
    }
}

/// Move a play-once playhead by `dt` seconds and report whether it reached
/// the end. Non-positive durations end at once. Negative `dt` is ignored.
pub(crate) fn advance_playhead(time: &mut f32, duration: f32, dt: f32) -> bool {
    if duration <= 0.0 {
        *time = 0.0;
        return true;
    }
    *time = (*time + dt.max(0.0)).min(duration);
    *time >= duration
}
