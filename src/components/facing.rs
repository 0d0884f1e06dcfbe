use bevy_ecs::prelude::Component;

/// Body yaw in degrees, kept in [0, 360).
///
/// Turned gradually by the movement controller; never snapped.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Facing {
    pub yaw: f32,
}
