//! Tweens: timed, eased interpolation with explicit cancellation.
//!
//! A [`Tween`] interpolates between two [`Lerp`] values over a duration using
//! an [`Easing`] curve. Controllers never own a bare tween; they own a
//! [`TweenSlot`], which is the cancellable handle for one logical animation
//! target. Starting a tween on a slot cancels whatever was in flight there.
//!
//! Tweens are stepped by the system that owns the animated value (see
//! [`crate::systems::orbitcamera`] and [`crate::systems::joystick`]), using the
//! curve helpers in [`crate::systems::tween`].

use log::trace;
use raylib::prelude::{Color, Vector2};

use crate::systems::tween::{advance_playhead, ease};

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

impl Easing {
    /// Parse a config name such as `cubic_out`.
    pub fn from_name(name: &str) -> Option<Easing> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "quad_in" => Some(Easing::QuadIn),
            "quad_out" => Some(Easing::QuadOut),
            "quad_in_out" => Some(Easing::QuadInOut),
            "cubic_in" => Some(Easing::CubicIn),
            "cubic_out" => Some(Easing::CubicOut),
            "cubic_in_out" => Some(Easing::CubicInOut),
            _ => None,
        }
    }

    /// Config name, inverse of [`Easing::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadInOut => "quad_in_out",
            Easing::CubicIn => "cubic_in",
            Easing::CubicOut => "cubic_out",
            Easing::CubicInOut => "cubic_in_out",
        }
    }
}

/// Values a tween can interpolate.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

impl Lerp for Vector2 {
    fn lerp(a: Vector2, b: Vector2, t: f32) -> Vector2 {
        Vector2 {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }
}

impl Lerp for Color {
    fn lerp(a: Color, b: Color, t: f32) -> Color {
        let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8;
        Color::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
    }
}

/// Result of advancing a tween by one frame.
#[derive(Clone, Copy, Debug)]
pub struct TweenStep<T> {
    /// Interpolated value after the step.
    pub value: T,
    /// The tween reached its end and stopped.
    pub finished: bool,
    /// The cue time was crossed during this step.
    pub cue_fired: bool,
}

/// Interpolates `from` to `to` once over `duration` seconds.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    pub from: T,
    /// Retargetable while playing.
    pub to: T,
    /// Seconds.
    pub duration: f32,
    pub easing: Easing,
    pub playing: bool,
    /// Elapsed seconds, clamped to the duration.
    pub time: f32,
    /// Optional one-shot cue, in seconds from the start.
    pub cue: Option<f32>,
    cue_fired: bool,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Tween {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
            cue: None,
            cue_fired: false,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    /// Fire a cue once playback passes `at` seconds. Negative values fire on
    /// the first step.
    pub fn with_cue(mut self, at: f32) -> Self {
        self.cue = Some(at.max(0.0));
        self
    }

    /// Normalized linear progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.time / self.duration).clamp(0.0, 1.0)
    }

    /// Current eased value.
    pub fn value(&self) -> T {
        T::lerp(self.from, self.to, ease(self.easing, self.progress()))
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> TweenStep<T> {
        if self.playing {
            self.playing = !advance_playhead(&mut self.time, self.duration, dt);
        }

        let mut cue_fired = false;
        if let Some(at) = self.cue {
            let reached = !self.playing || self.time >= at;
            if reached && !self.cue_fired {
                self.cue_fired = true;
                cue_fired = true;
            }
        }

        TweenStep {
            value: self.value(),
            finished: !self.playing,
            cue_fired,
        }
    }
}

/// Cancellable handle for the single tween driving one animation target.
#[derive(Clone, Debug)]
pub struct TweenSlot<T> {
    active: Option<Tween<T>>,
}

impl<T> Default for TweenSlot<T> {
    fn default() -> Self {
        TweenSlot { active: None }
    }
}

impl<T: Lerp> TweenSlot<T> {
    /// Start `tween`, cancelling the one in flight.
    pub fn start(&mut self, tween: Tween<T>) {
        if self.active.is_some() {
            trace!("tween replaced before completion");
        }
        self.active = Some(tween);
    }

    /// Drop the in-flight tween. Returns whether one was playing.
    pub fn cancel(&mut self) -> bool {
        let had = self.active.take().is_some();
        if had {
            trace!("tween cancelled");
        }
        had
    }

    pub fn is_playing(&self) -> bool {
        self.active.as_ref().is_some_and(|t| t.playing)
    }

    pub fn tween(&self) -> Option<&Tween<T>> {
        self.active.as_ref()
    }

    pub fn tween_mut(&mut self) -> Option<&mut Tween<T>> {
        self.active.as_mut()
    }

    /// Advance the in-flight tween. The slot empties once it finishes.
    pub fn step(&mut self, dt: f32) -> Option<TweenStep<T>> {
        let tween = self.active.as_mut()?;
        let step = tween.advance(dt);
        if step.finished {
            self.active = None;
        }
        Some(step)
    }
}
