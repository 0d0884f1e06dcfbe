//! Per-frame pointer input resource.
//!
//! The platform layer (raylib in the demo binary) fills [`PointerInput`] once
//! per frame before the rig schedule runs. Everything downstream works in
//! canvas-local coordinates: origin at the screen centre, +Y up.
//!
//! Two views of the same hardware are kept:
//! - a queue of [`PointerEvent`]s (down/move/up per pointer id), consumed by
//!   the gesture router;
//! - a snapshot of the raw touch points with their phases, plus mouse and
//!   pinch-key state, read by the pinch providers.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use smallvec::SmallVec;

/// Touch points tracked per frame.
pub const MAX_TOUCH_POINTS: usize = 10;

/// Events held inline before the queue spills to the heap.
pub const INLINE_EVENTS: usize = 8;

/// Pending pointer transitions for one frame.
pub type PointerEvents = SmallVec<[PointerEvent; INLINE_EVENTS]>;

/// Pointer id reported for the mouse.
pub const MOUSE_POINTER_ID: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// One pointer transition in canvas-local space.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub id: u32,
    pub phase: PointerPhase,
    pub position: Vector2,
}

impl PointerEvent {
    pub fn new(id: u32, phase: PointerPhase, position: Vector2) -> Self {
        Self { id, phase, position }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// First frame the point is down.
    Began,
    Moved,
    Stationary,
    /// Last frame the point is reported.
    Ended,
}

#[derive(Debug, Clone, Copy)]
pub struct TouchPoint {
    pub id: u32,
    pub position: Vector2,
    pub phase: TouchPhase,
}

/// Pointer state for the current frame.
#[derive(Resource, Debug, Clone)]
pub struct PointerInput {
    /// Pending transitions, oldest first.
    pub events: PointerEvents,
    /// Active touch points in platform order.
    pub touches: ArrayVec<TouchPoint, MAX_TOUCH_POINTS>,
    pub mouse_position: Vector2,
    /// Primary mouse button is held.
    pub mouse_down: bool,
    /// Primary mouse button went down this frame.
    pub mouse_pressed: bool,
    /// The pinch-simulation key is held.
    pub pinch_key: bool,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self {
            events: SmallVec::new(),
            touches: ArrayVec::new(),
            mouse_position: Vector2::zero(),
            mouse_down: false,
            mouse_pressed: false,
            pinch_key: false,
        }
    }
}

impl PointerInput {
    pub fn push(&mut self, id: u32, phase: PointerPhase, position: Vector2) {
        self.events.push(PointerEvent::new(id, phase, position));
    }

    /// Record a touch point. Points past [`MAX_TOUCH_POINTS`] are dropped and
    /// `false` is returned.
    pub fn push_touch(&mut self, point: TouchPoint) -> bool {
        self.touches.try_push(point).is_ok()
    }

    /// Take the queued events, leaving the queue empty.
    pub fn take_events(&mut self) -> PointerEvents {
        std::mem::take(&mut self.events)
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}

/// Convert a window position (origin top-left, +Y down) to canvas-local
/// space.
pub fn screen_to_local(screen: Vector2, width: f32, height: f32) -> Vector2 {
    Vector2::new(screen.x - width * 0.5, height * 0.5 - screen.y)
}

/// Inverse of [`screen_to_local`].
pub fn local_to_screen(local: Vector2, width: f32, height: f32) -> Vector2 {
    Vector2::new(local.x + width * 0.5, height * 0.5 - local.y)
}
