//! World-space position component.
//!
//! Stands in for the scene-graph transform: controllers write position deltas
//! here and the renderer reads the result once per frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// World-space position (pivot) of an entity. Y is up.
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vector3,
}

impl Default for WorldPosition {
    fn default() -> Self {
        Self {
            pos: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3::new(x, y, z),
        }
    }

    /// Move by `delta`.
    pub fn translate(&mut self, delta: Vector3) {
        self.pos.x += delta.x;
        self.pos.y += delta.y;
        self.pos.z += delta.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_accumulates() {
        let mut p = WorldPosition::new(1.0, 2.0, 3.0);
        p.translate(Vector3::new(0.5, 0.0, -1.0));
        p.translate(Vector3::new(0.5, 1.0, 0.0));
        assert_eq!((p.pos.x, p.pos.y, p.pos.z), (2.0, 3.0, 2.0));
    }
}
