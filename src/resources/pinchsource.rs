//! Multi-point input providers for pinch zoom.
//!
//! The pinch logic only sees a distance per frame through
//! [`MultiPointProvider`]. Two providers exist:
//! - [`MouseSimulatedPinch`] for desktop: hold the pinch key and drag with
//!   the mouse; the distance is measured from a fixed centre point.
//! - [`TouchPinch`] for devices: the distance between the first two touches
//!   still down. Lifted touches never take part.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::resources::input::{PointerInput, TouchPhase};
use crate::resources::rigconfig::PinchProviderKind;

/// One frame of pinch input.
#[derive(Debug, Clone, Copy)]
pub struct PinchSample {
    /// Distance between the two points, in pixels.
    pub distance: f32,
    /// The point pair was just acquired; the distance is a new baseline.
    pub fresh: bool,
}

/// Source of a two-point distance.
pub trait MultiPointProvider {
    /// Sample this frame, or `None` when no pinch is possible.
    fn sample(&mut self, input: &PointerInput) -> Option<PinchSample>;

    fn name(&self) -> &'static str;
}

/// Desktop stand-in: mouse against a fixed centre.
#[derive(Debug, Clone, Copy)]
pub struct MouseSimulatedPinch {
    pub centre: Vector2,
}

impl Default for MouseSimulatedPinch {
    fn default() -> Self {
        Self {
            centre: Vector2::zero(),
        }
    }
}

impl MultiPointProvider for MouseSimulatedPinch {
    fn sample(&mut self, input: &PointerInput) -> Option<PinchSample> {
        if !input.pinch_key || !input.mouse_down {
            return None;
        }
        let d = Vector2::new(
            input.mouse_position.x - self.centre.x,
            input.mouse_position.y - self.centre.y,
        );
        Some(PinchSample {
            distance: d.length(),
            fresh: input.mouse_pressed,
        })
    }

    fn name(&self) -> &'static str {
        "mouse"
    }
}

/// Two real touch points.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchPinch;

impl MultiPointProvider for TouchPinch {
    fn sample(&mut self, input: &PointerInput) -> Option<PinchSample> {
        let mut live = input.touches.iter().filter(|t| t.phase != TouchPhase::Ended);
        let (a, b) = match (live.next(), live.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => return None,
        };
        // A lift can re-pair the remaining touches.
        let lifted = input.touches.iter().any(|t| t.phase == TouchPhase::Ended);
        let d = Vector2::new(b.position.x - a.position.x, b.position.y - a.position.y);
        Some(PinchSample {
            distance: d.length(),
            fresh: lifted || a.phase == TouchPhase::Began || b.phase == TouchPhase::Began,
        })
    }

    fn name(&self) -> &'static str {
        "touch"
    }
}

/// The active provider.
#[derive(Resource)]
pub struct PinchSource(pub Box<dyn MultiPointProvider + Send + Sync>);

impl PinchSource {
    pub fn from_kind(kind: PinchProviderKind) -> Self {
        match kind {
            PinchProviderKind::Mouse => PinchSource(Box::new(MouseSimulatedPinch::default())),
            PinchProviderKind::Touch => PinchSource(Box::new(TouchPinch)),
        }
    }

    pub fn sample(&mut self, input: &PointerInput) -> Option<PinchSample> {
        self.0.sample(input)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}
