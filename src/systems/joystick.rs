//! Advance joystick widget animations.
use bevy_ecs::prelude::*;

use crate::components::joystick::JoystickWidget;
use crate::resources::worldtime::WorldTime;

pub fn joystick_widget_system(time: Res<WorldTime>, mut widgets: Query<&mut JoystickWidget>) {
    for mut widget in widgets.iter_mut() {
        // Idle widgets stay unchanged for change detection.
        if widget.is_animating() {
            widget.step(time.delta);
        }
    }
}
