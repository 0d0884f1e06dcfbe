//! Movement controller system.
//!
//! Reads the orbit camera's yaw once and hands it to every
//! [`MoveController`] tick, then applies the resulting position delta and
//! facing, and updates the widget's secondary needle.
use bevy_ecs::prelude::*;

use crate::components::facing::Facing;
use crate::components::joystick::JoystickWidget;
use crate::components::movecontroller::MoveController;
use crate::components::orbitcamera::OrbitCamera;
use crate::components::worldposition::WorldPosition;
use crate::resources::worldtime::WorldTime;

pub fn movement_controller_system(
    time: Res<WorldTime>,
    cameras: Query<&OrbitCamera>,
    mut movers: Query<(&mut MoveController, &mut WorldPosition, &mut Facing)>,
    mut widgets: Query<&mut JoystickWidget>,
) {
    let camera_yaw = cameras.iter().next().map_or(0.0, |c| c.yaw);
    for (mut mover, mut position, mut facing) in movers.iter_mut() {
        let Some(step) = mover.tick(time.delta, camera_yaw, facing.yaw) else {
            continue;
        };
        position.translate(step.delta);
        facing.yaw = step.facing_yaw;
        if let Some(mut widget) = mover.widget.and_then(|e| widgets.get_mut(e).ok()) {
            widget.set_secondary_indicator_angle(step.axis_offset);
        }
    }
}
