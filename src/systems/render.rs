//! Demo rendering.
//!
//! Draws the scene through the orbit camera (ground grid, character body and
//! a nose showing its facing), then the joystick widget and a small HUD in
//! screen space.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::angles::{direction_from_angle, yaw_rotate};
use crate::components::facing::Facing;
use crate::components::joystick::JoystickWidget;
use crate::components::movecontroller::MoveController;
use crate::components::orbitcamera::OrbitCamera;
use crate::components::worldposition::WorldPosition;
use crate::resources::gesture::GestureState;
use crate::resources::input::{PointerInput, local_to_screen};

/// Base disc radius at scale 1, in pixels.
const BASE_RADIUS: f32 = 60.0;
const FIELD_OF_VIEW: f32 = 45.0;

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    cameras: Query<(&OrbitCamera, &WorldPosition)>,
    bodies: Query<(&WorldPosition, &Facing), With<MoveController>>,
    widgets: Query<&JoystickWidget>,
    gesture: Res<GestureState>,
    input: Res<PointerInput>,
) {
    let w = rl.get_screen_width();
    let h = rl.get_screen_height();
    let (wf, hf) = (w as f32, h as f32);
    let rig = cameras.iter().next();

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::DARKGRAY);

    if let Some((camera, pivot)) = rig {
        let view = Camera3D::perspective(
            camera.eye_position(pivot.pos),
            pivot.pos,
            Vector3::new(0.0, 1.0, 0.0),
            FIELD_OF_VIEW,
        );
        let mut d3 = d.begin_mode3D(view);
        d3.draw_grid(40, 1.0);
        for (position, facing) in bodies.iter() {
            let p = position.pos;
            d3.draw_cube(Vector3::new(p.x, p.y + 0.5, p.z), 1.0, 1.0, 1.0, Color::ORANGE);
            let nose = yaw_rotate(facing.yaw, Vector3::new(0.0, 0.0, 0.6));
            d3.draw_cube(
                Vector3::new(p.x + nose.x, p.y + 0.7, p.z + nose.z),
                0.3,
                0.3,
                0.3,
                Color::MAROON,
            );
        }
    }

    d.draw_line(w / 2, 0, w / 2, h, Color::GRAY);

    for widget in widgets.iter() {
        if !widget.is_visible() {
            continue;
        }
        let root = local_to_screen(widget.root, wf, hf);
        let scale = widget.root_scale;
        d.draw_circle_v(root, BASE_RADIUS * widget.base_scale * scale, widget.base_color);
        if widget.ring_visible {
            d.draw_circle_lines(
                root.x as i32,
                root.y as i32,
                widget.ring_radius * scale,
                widget.ring_color,
            );
        }
        if widget.handles_visible {
            // Pad space is y-up, the screen is y-down.
            let inner = direction_from_angle(widget.handle_angle);
            let outer = direction_from_angle(widget.secondary_angle);
            let reach = widget.ring_radius * scale;
            d.draw_line_ex(
                root,
                Vector2::new(root.x + inner.x * reach * 0.5, root.y - inner.y * reach * 0.5),
                6.0,
                Color::WHITE,
            );
            d.draw_line_ex(
                Vector2::new(root.x + outer.x * reach * 0.8, root.y - outer.y * reach * 0.8),
                Vector2::new(root.x + outer.x * reach, root.y - outer.y * reach),
                4.0,
                widget.ring_color,
            );
        }
    }

    d.draw_text(
        "left: move | right: orbit | hold P + drag: zoom",
        10,
        10,
        20,
        Color::RAYWHITE,
    );
    if let Some((camera, _)) = rig {
        let status = format!(
            "{:?}  touches {}  pitch {:.1}  yaw {:.1}  distance {:.1}",
            gesture.kind(),
            input.touch_count(),
            camera.pitch,
            camera.yaw,
            camera.distance
        );
        d.draw_text(&status, 10, 36, 20, Color::LIGHTGRAY);
    }
}
