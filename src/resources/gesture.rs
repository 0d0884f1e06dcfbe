//! Gesture arbitration state.
//!
//! [`GestureState`] records which pointer owns which pad and whether a pinch
//! is running. The rules it backs:
//! - only one pad gesture at a time; the pad under the pointer-down owns it;
//! - a pinch is suppressed while either pad is dragging;
//! - drag callbacks are ignored while a pinch is active.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::resources::dragregions::PadKind;
use crate::resources::pinchsource::PinchSample;

/// What the user is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    None,
    Move,
    CameraOrbit,
    Pinch,
}

/// A pointer that went down on a pad. Lives from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy)]
pub struct PointerGesture {
    pub id: u32,
    pub pad: PadKind,
    /// Where the pointer went down.
    pub start: Vector2,
    /// Last position seen.
    pub current: Vector2,
    /// Crossed the drag threshold and the begin callback went through.
    pub dragging: bool,
}

impl PointerGesture {
    pub fn new(id: u32, pad: PadKind, start: Vector2) -> Self {
        Self {
            id,
            pad,
            start,
            current: start,
            dragging: false,
        }
    }

    /// Distance travelled from the press point.
    pub fn travel(&self, p: Vector2) -> f32 {
        Vector2::new(p.x - self.start.x, p.y - self.start.y).length()
    }
}

/// Previous pinch distance, or inactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchTracker {
    previous: Option<f32>,
}

impl PinchTracker {
    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }

    pub fn reset(&mut self) {
        if self.previous.take().is_some() {
            debug!("pinch released");
        }
    }

    /// Feed this frame's sample and return the change in distance, in pixels.
    ///
    /// No sample deactivates the tracker. The first sample after inactivity,
    /// or any sample flagged fresh, only records the baseline.
    pub fn update(&mut self, sample: Option<PinchSample>) -> f32 {
        let Some(sample) = sample else {
            self.reset();
            return 0.0;
        };
        let delta = match self.previous {
            Some(prev) if !sample.fresh => sample.distance - prev,
            _ => {
                debug!("pinch baseline {:.1}", sample.distance);
                0.0
            }
        };
        self.previous = Some(sample.distance);
        delta
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GestureState {
    /// The pointer that owns a pad, if any.
    pub active: Option<PointerGesture>,
    pub pinch: PinchTracker,
}

impl GestureState {
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// A pad drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|g| g.dragging)
    }

    pub fn kind(&self) -> GestureKind {
        match self.active {
            Some(g) if g.dragging => match g.pad {
                PadKind::Move => GestureKind::Move,
                PadKind::Camera => GestureKind::CameraOrbit,
            },
            _ if self.is_pinching() => GestureKind::Pinch,
            _ => GestureKind::None,
        }
    }
}
