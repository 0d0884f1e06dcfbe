//! Orbit camera system.
//!
//! Per rig, in priority order:
//! 1. a running auto-align owns the yaw this frame;
//! 2. a camera-pad drag owns the rotation (applied by the observer);
//! 3. otherwise auto-track moves the pivot toward the follow target.
use bevy_ecs::prelude::*;

use crate::components::orbitcamera::OrbitCamera;
use crate::components::worldposition::WorldPosition;
use crate::resources::worldtime::WorldTime;

pub fn orbit_camera_system(
    time: Res<WorldTime>,
    mut rigs: Query<(&mut OrbitCamera, &mut WorldPosition)>,
    targets: Query<&WorldPosition, Without<OrbitCamera>>,
) {
    let dt = time.delta;
    for (mut camera, mut pivot) in rigs.iter_mut() {
        if camera.step_align(dt) || camera.dragging {
            continue;
        }
        let Some(target) = camera.track_target else {
            continue;
        };
        // Despawned targets are ignored like missing ones.
        let Ok(target) = targets.get(target) else {
            continue;
        };
        if let Some(step) = camera.track_step(pivot.pos, target.pos, dt) {
            pivot.translate(step);
        }
    }
}
