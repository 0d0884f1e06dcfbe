//! Screen regions that own drag gestures.
//!
//! The pad that receives a pointer-down owns the whole gesture, even if the
//! pointer later wanders into the other region.
use bevy_ecs::prelude::*;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadKind {
    /// Drives the character.
    Move,
    /// Orbits the camera.
    Camera,
}

/// Pad rectangles in canvas-local space. `x`/`y` are the minimum corner.
#[derive(Resource, Debug, Clone)]
pub struct DragRegions {
    pub move_pad: Rectangle,
    pub camera_pad: Rectangle,
}

fn contains(rect: &Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x < rect.x + rect.width && p.y >= rect.y && p.y < rect.y + rect.height
}

impl DragRegions {
    /// Movement pad on the left half of a `width` x `height` canvas, camera
    /// pad on the right half.
    pub fn split_screen(width: f32, height: f32) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self {
            move_pad: Rectangle {
                x: -half_w,
                y: -half_h,
                width: half_w,
                height,
            },
            camera_pad: Rectangle {
                x: 0.0,
                y: -half_h,
                width: half_w,
                height,
            },
        }
    }

    /// Pad under `p`, movement pad first.
    pub fn hit(&self, p: Vector2) -> Option<PadKind> {
        if contains(&self.move_pad, p) {
            Some(PadKind::Move)
        } else if contains(&self.camera_pad, p) {
            Some(PadKind::Camera)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_screen_hit() {
        let r = DragRegions::split_screen(1280.0, 720.0);
        assert_eq!(r.hit(Vector2::new(-300.0, 0.0)), Some(PadKind::Move));
        assert_eq!(r.hit(Vector2::new(300.0, 100.0)), Some(PadKind::Camera));
        assert_eq!(r.hit(Vector2::new(0.0, 0.0)), Some(PadKind::Camera));
        assert_eq!(r.hit(Vector2::new(700.0, 0.0)), None);
        assert_eq!(r.hit(Vector2::new(-300.0, 400.0)), None);
    }
}
