//! Rig setup.
//!
//! [`spawn_rig`] inserts the rig resources into a world, spawns the
//! character, the orbit camera rig and the joystick widget, and registers
//! the pad observers. Used by the demo binary and the integration tests.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::facing::Facing;
use crate::components::joystick::JoystickWidget;
use crate::components::movecontroller::MoveController;
use crate::components::orbitcamera::OrbitCamera;
use crate::components::worldposition::WorldPosition;
use crate::events::drag::{camera_pad_observer, move_pad_observer};
use crate::resources::dragregions::DragRegions;
use crate::resources::gesture::GestureState;
use crate::resources::input::PointerInput;
use crate::resources::pinchsource::PinchSource;
use crate::resources::rigconfig::RigConfig;
use crate::resources::worldtime::WorldTime;

/// Entities created by [`spawn_rig`].
#[derive(Debug, Clone, Copy)]
pub struct RigEntities {
    pub character: Entity,
    pub camera: Entity,
    pub widget: Entity,
}

pub fn spawn_rig(world: &mut World, config: &RigConfig) -> RigEntities {
    world.insert_resource(config.clone());
    world.insert_resource(PointerInput::default());
    world.insert_resource(GestureState::default());
    world.insert_resource(DragRegions::split_screen(
        config.window_width as f32,
        config.window_height as f32,
    ));
    world.insert_resource(PinchSource::from_kind(config.pinch_provider));
    if !world.contains_resource::<WorldTime>() {
        world.insert_resource(WorldTime::default());
    }

    let widget = world.spawn(JoystickWidget::from_config(config)).id();
    let character = world
        .spawn((
            MoveController::from_config(config).with_widget(widget),
            WorldPosition::default(),
            Facing::default(),
        ))
        .id();

    let mut orbit = OrbitCamera::from_config(config);
    orbit.set_track_target(Some(character));
    let camera = world.spawn((orbit, WorldPosition::default())).id();

    world.spawn(Observer::new(move_pad_observer));
    world.spawn(Observer::new(camera_pad_observer));
    // Observers must exist before the first routed event.
    world.flush();

    info!(
        "Rig spawned: character {:?}, camera {:?}, widget {:?}, pinch via {}",
        character,
        camera,
        widget,
        world.resource::<PinchSource>().name()
    );

    RigEntities {
        character,
        camera,
        widget,
    }
}
