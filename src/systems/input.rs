//! Input systems.
//!
//! [`poll_pointer_input`] reads the mouse, touches and the pinch key from
//! Raylib each frame and writes them into
//! [`PointerInput`](crate::resources::input::PointerInput) in canvas-local
//! coordinates.
//!
//! Touches take precedence: while any touch is down, mouse events are not
//! queued, so platforms that mirror the first touch to the mouse do not
//! produce duplicate gestures.
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton, Vector2};
use rustc_hash::FxHashMap;

use crate::resources::input::{
    MOUSE_POINTER_ID, PointerInput, PointerPhase, TouchPhase, TouchPoint, screen_to_local,
};

/// Key held to turn mouse drags into a simulated pinch.
pub const PINCH_KEY: KeyboardKey = KeyboardKey::KEY_P;

/// Touch points seen last frame, for phase tracking.
#[derive(Default)]
pub struct TouchHistory {
    points: FxHashMap<u32, Vector2>,
    mouse_last: Option<Vector2>,
}

pub fn poll_pointer_input(
    mut input: ResMut<PointerInput>,
    rl: NonSend<raylib::RaylibHandle>,
    mut history: Local<TouchHistory>,
) {
    let w = rl.get_screen_width() as f32;
    let h = rl.get_screen_height() as f32;

    input.events.clear();
    input.touches.clear();

    // Touches
    let count = rl.get_touch_point_count();
    let mut current: Vec<(u32, Vector2)> = Vec::with_capacity(count as usize);
    for i in 0..count {
        let id = rl.get_touch_point_id(i).max(0) as u32;
        let pos = screen_to_local(rl.get_touch_position(i), w, h);
        current.push((id, pos));
    }
    for &(id, pos) in &current {
        let phase = match history.points.get(&id) {
            None => {
                input.push(id, PointerPhase::Down, pos);
                TouchPhase::Began
            }
            Some(&last) if last.x != pos.x || last.y != pos.y => {
                input.push(id, PointerPhase::Move, pos);
                TouchPhase::Moved
            }
            Some(_) => TouchPhase::Stationary,
        };
        input.push_touch(TouchPoint { id, position: pos, phase });
    }
    for (&id, &pos) in &history.points {
        if !current.iter().any(|(cid, _)| *cid == id) {
            input.push(id, PointerPhase::Up, pos);
            input.push_touch(TouchPoint {
                id,
                position: pos,
                phase: TouchPhase::Ended,
            });
        }
    }
    let touching = !current.is_empty() || !history.points.is_empty();
    history.points = current.into_iter().collect();

    // Mouse
    let mouse = screen_to_local(rl.get_mouse_position(), w, h);
    input.mouse_position = mouse;
    input.mouse_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    input.mouse_down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    let released = rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT);
    input.pinch_key = rl.is_key_down(PINCH_KEY);

    if !touching {
        if input.mouse_pressed {
            input.push(MOUSE_POINTER_ID, PointerPhase::Down, mouse);
        } else if input.mouse_down
            && history
                .mouse_last
                .is_some_and(|last| last.x != mouse.x || last.y != mouse.y)
        {
            input.push(MOUSE_POINTER_ID, PointerPhase::Move, mouse);
        }
        if released {
            input.push(MOUSE_POINTER_ID, PointerPhase::Up, mouse);
        }
    }
    history.mouse_last = Some(mouse);
}
