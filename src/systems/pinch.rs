//! Pinch zoom system.
//!
//! Samples the active [`PinchSource`], converts the distance change into a
//! zoom delta and applies it to the orbit camera. Suppressed while a pad
//! drag is in progress.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::orbitcamera::OrbitCamera;
use crate::resources::gesture::GestureState;
use crate::resources::input::PointerInput;
use crate::resources::pinchsource::PinchSource;
use crate::resources::rigconfig::RigConfig;

pub fn pinch_zoom_system(
    mut gesture: ResMut<GestureState>,
    mut source: ResMut<PinchSource>,
    input: Res<PointerInput>,
    config: Res<RigConfig>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    if gesture.is_dragging() {
        gesture.pinch.reset();
        return;
    }
    let pixels = gesture.pinch.update(source.sample(&input));
    if pixels == 0.0 {
        return;
    }
    let delta = pixels / config.pixels_per_camera_distance;
    trace!("Pinch via {}: {:+.1} px, zoom {:+.3}", source.name(), pixels, delta);
    for mut camera in cameras.iter_mut() {
        camera.zoom(delta);
    }
}
