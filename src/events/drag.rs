//! Pad drag events and the per-pad observers.
//!
//! [`route_pointer_input`](crate::systems::router::route_pointer_input) turns
//! raw pointer transitions into [`DragEvent`]s and triggers them. Each pad
//! has one observer acting as its delegate, and each observer dispatches to
//! the four callbacks of its pad:
//!
//! | phase          | movement pad                      | camera pad              |
//! |----------------|-----------------------------------|-------------------------|
//! | `PointerDown`  | zero-length drag at the press     | (nothing)               |
//! | `BeginDrag`    | start drag, show widget           | start orbit drag        |
//! | `Drag`         | follow pointer, mirror on widget  | rotate by pointer delta |
//! | `EndDrag`      | clear drag, hide widget           | snap and align yaw      |
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::joystick::JoystickWidget;
use crate::components::movecontroller::MoveController;
use crate::components::orbitcamera::OrbitCamera;
use crate::resources::dragregions::PadKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    PointerDown,
    BeginDrag,
    Drag,
    EndDrag,
}

/// A gesture step on one pad.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragEvent {
    pub pad: PadKind,
    pub phase: DragPhase,
    /// Pointer position, canvas-local.
    pub position: Vector2,
    /// Movement since the previous event of this gesture.
    pub delta: Vector2,
}

impl DragEvent {
    pub fn new(pad: PadKind, phase: DragPhase, position: Vector2) -> Self {
        Self {
            pad,
            phase,
            position,
            delta: Vector2::zero(),
        }
    }

    pub fn with_delta(mut self, delta: Vector2) -> Self {
        self.delta = delta;
        self
    }
}

mod move_pad {
    use super::*;

    pub fn on_pointer_down(mover: &mut MoveController, position: Vector2) {
        mover.gesture_begin(position);
    }

    pub fn on_begin_drag(mover: &mut MoveController, widget: Option<&mut JoystickWidget>, position: Vector2) {
        mover.gesture_drag_start(position);
        if let Some(w) = widget {
            let (duration, easing) = (w.duration, w.easing);
            w.show(position, mover.drag.base, duration, easing);
        }
    }

    pub fn on_drag(mover: &mut MoveController, widget: Option<&mut JoystickWidget>, position: Vector2) {
        let drag = mover.gesture_update(position);
        if let Some(w) = widget {
            w.update_drag(drag, mover.drag.base);
        }
    }

    pub fn on_end_drag(mover: &mut MoveController, widget: Option<&mut JoystickWidget>) {
        mover.gesture_end();
        if let Some(w) = widget {
            let (duration, easing) = (w.duration, w.easing);
            w.hide(duration, easing);
        }
    }
}

mod camera_pad {
    use super::*;

    pub fn on_begin_drag(camera: &mut OrbitCamera) {
        camera.begin_drag();
    }

    pub fn on_drag(camera: &mut OrbitCamera, delta: Vector2) {
        camera.rotate_by_drag(delta);
    }

    pub fn on_end_drag(camera: &mut OrbitCamera) {
        camera.end_drag();
    }
}

/// Delegate for the movement pad.
pub fn move_pad_observer(
    trigger: On<DragEvent>,
    mut movers: Query<&mut MoveController>,
    mut widgets: Query<&mut JoystickWidget>,
) {
    let event = trigger.event();
    if event.pad != PadKind::Move {
        return;
    }
    if matches!(event.phase, DragPhase::BeginDrag | DragPhase::EndDrag) {
        debug!("Move pad {:?} at {:?}", event.phase, event.position);
    }
    for mut mover in movers.iter_mut() {
        let mut widget = mover.widget.and_then(|e| widgets.get_mut(e).ok());
        let widget = widget.as_deref_mut();
        match event.phase {
            DragPhase::PointerDown => move_pad::on_pointer_down(&mut mover, event.position),
            DragPhase::BeginDrag => move_pad::on_begin_drag(&mut mover, widget, event.position),
            DragPhase::Drag => move_pad::on_drag(&mut mover, widget, event.position),
            DragPhase::EndDrag => move_pad::on_end_drag(&mut mover, widget),
        }
    }
}

/// Delegate for the camera pad.
pub fn camera_pad_observer(trigger: On<DragEvent>, mut cameras: Query<&mut OrbitCamera>) {
    let event = trigger.event();
    if event.pad != PadKind::Camera {
        return;
    }
    if matches!(event.phase, DragPhase::BeginDrag | DragPhase::EndDrag) {
        debug!("Camera pad {:?} at {:?}", event.phase, event.position);
    }
    for mut camera in cameras.iter_mut() {
        match event.phase {
            DragPhase::PointerDown => {}
            DragPhase::BeginDrag => camera_pad::on_begin_drag(&mut camera),
            DragPhase::Drag => camera_pad::on_drag(&mut camera, event.delta),
            DragPhase::EndDrag => camera_pad::on_end_drag(&mut camera),
        }
    }
}
