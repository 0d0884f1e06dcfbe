//! Rig systems.
//!
//! Submodules overview
//! - [`input`] – read hardware pointers and update [`crate::resources::input::PointerInput`]
//! - [`router`] – classify pointer events into pad drag events
//! - [`movement`] – drive the character from the movement pad
//! - [`pinch`] – pinch zoom on the orbit camera
//! - [`orbitcamera`] – auto-align and auto-track of the orbit camera
//! - [`joystick`] – advance the joystick widget animations
//! - [`render`] – draw the demo scene and widget using Raylib
//! - [`time`] – update simulation time and delta
//! - [`tween`] – easing curves and playhead helpers for tweens

use bevy_ecs::prelude::*;

pub mod input;
pub mod joystick;
pub mod movement;
pub mod orbitcamera;
pub mod pinch;
pub mod render;
pub mod router;
pub mod time;
pub mod tween;

use crate::systems::joystick::joystick_widget_system;
use crate::systems::movement::movement_controller_system;
use crate::systems::orbitcamera::orbit_camera_system;
use crate::systems::pinch::pinch_zoom_system;
use crate::systems::router::route_pointer_input;

/// Build the per-frame rig schedule.
///
/// The order is fixed: gestures are routed first (their observers run at the
/// sync point right after), then movement reads the camera yaw, then pinch
/// zoom, then the camera's own align/track, and the widget animates last.
pub fn rig_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            route_pointer_input,
            movement_controller_system,
            pinch_zoom_system,
            orbit_camera_system,
            joystick_widget_system,
        )
            .chain(),
    );
    schedule
}
