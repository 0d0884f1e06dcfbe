//! Movement pad controller.
//!
//! [`MoveController`] turns a drag on the movement pad into planar motion:
//! - speed ramps linearly with drag length up to `drag_max_distance`;
//! - long drags snap to the nearest compass direction;
//! - the pad's "up" always means "away from the camera", using the camera's
//!   own snapped yaw so motion stays on the grid;
//! - the body turns toward the travel heading at a bounded rate.
//!
//! The per-frame work happens in [`MoveController::tick`], which the
//! [`movement_controller_system`](crate::systems::movement::movement_controller_system)
//! calls with the camera yaw passed in explicitly.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::{Vector2, Vector3};

use crate::angles::{
    clamp01, correct_angle, delta_angle, direction_from_angle, drag_angle, heading_of,
    lerp_clamped, sign, wrap_degrees, yaw_rotate,
};
use crate::resources::rigconfig::RigConfig;

/// Anchor and live point of a pad drag, in pad-local pixels.
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    pub base: Vector2,
    pub current: Vector2,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            base: Vector2::zero(),
            current: Vector2::zero(),
        }
    }
}

impl DragState {
    /// Current point minus anchor.
    pub fn vector(&self) -> Vector2 {
        Vector2 {
            x: self.current.x - self.base.x,
            y: self.current.y - self.base.y,
        }
    }

    /// No drag input: anchor and live point coincide.
    pub fn is_idle(&self) -> bool {
        self.base.x == self.current.x && self.base.y == self.current.y
    }

    /// Collapse anchor and live point onto `point`.
    pub fn reset_to(&mut self, point: Vector2) {
        self.base = point;
        self.current = point;
    }

    /// Move the live point and drag the anchor along so it never trails by
    /// more than `max_distance`. Returns the drag vector measured before the
    /// anchor moved.
    pub fn follow(&mut self, point: Vector2, max_distance: f32) -> Vector2 {
        self.current = point;
        let v = self.vector();
        let dist = v.length();
        if dist > max_distance && dist > f32::EPSILON {
            let excess = v.scale_by((dist - max_distance) / dist);
            self.base.x += excess.x;
            self.base.y += excess.y;
        }
        v
    }
}

/// What one movement tick produced.
#[derive(Clone, Copy, Debug)]
pub struct MoveStep {
    /// World position delta for this frame.
    pub delta: Vector3,
    /// Facing yaw after the bounded turn.
    pub facing_yaw: f32,
    /// Camera yaw snapped to the compass grid.
    pub snapped_camera_yaw: f32,
    /// Signed offset between snapped camera yaw and facing, for the widget's
    /// secondary needle.
    pub axis_offset: f32,
}

/// Movement pad state and tuning, attached to the character entity.
#[derive(Component, Clone, Debug)]
pub struct MoveController {
    pub drag: DragState,
    /// A drag gesture currently owns the movement pad.
    pub dragging: bool,
    /// Top speed in world units per second.
    pub max_speed: f32,
    /// Top turn rate in degrees per second.
    pub max_angular_velocity: f32,
    /// Drag length that reaches top speed.
    pub drag_max_distance: f32,
    /// Drag length from which direction snapping applies.
    pub snap_distance: f32,
    pub snap_count: u32,
    /// Last signed camera/body yaw offset.
    pub axis_offset: f32,
    /// Joystick widget mirroring this pad, if any.
    pub widget: Option<Entity>,
}

impl MoveController {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            drag: DragState::default(),
            dragging: false,
            max_speed: config.move_speed,
            max_angular_velocity: config.angular_velocity,
            drag_max_distance: config.drag_max_distance,
            snap_distance: config.snap_distance(),
            snap_count: config.direction_snap_count,
            axis_offset: 0.0,
            widget: None,
        }
    }

    pub fn with_widget(mut self, widget: Entity) -> Self {
        self.widget = Some(widget);
        self
    }

    /// Pointer went down on the pad: zero-length drag, no motion yet.
    pub fn gesture_begin(&mut self, point: Vector2) {
        self.drag.reset_to(point);
    }

    /// Pointer moved past the drag threshold.
    pub fn gesture_drag_start(&mut self, point: Vector2) {
        self.drag.current = point;
        self.dragging = true;
    }

    /// Pointer moved while dragging. Returns the drag vector for the widget.
    pub fn gesture_update(&mut self, point: Vector2) -> Vector2 {
        self.drag.follow(point, self.drag_max_distance)
    }

    /// Pointer released.
    pub fn gesture_end(&mut self) {
        self.drag.reset_to(Vector2::zero());
        self.dragging = false;
    }

    /// Planar direction (unit) and speed for the current drag, before camera
    /// alignment. `None` when there is no drag input.
    pub fn drive(&self) -> Option<(Vector2, f32)> {
        if self.drag.is_idle() {
            return None;
        }
        let mut v = self.drag.vector();
        let dist = v.length();
        if dist <= f32::EPSILON {
            return None;
        }
        if dist >= self.snap_distance {
            v = direction_from_angle(correct_angle(drag_angle(v), self.snap_count));
        }
        let speed = lerp_clamped(0.0, self.max_speed, clamp01(dist / self.drag_max_distance));
        Some((v.normalized(), speed))
    }

    /// Advance one frame.
    ///
    /// `camera_yaw` is the orbit camera's current yaw and `facing_yaw` the
    /// body's current yaw. Returns `None` when the pad is idle.
    pub fn tick(&mut self, dt: f32, camera_yaw: f32, facing_yaw: f32) -> Option<MoveStep> {
        let (dir, speed) = self.drive()?;

        let snapped_camera_yaw = correct_angle(camera_yaw, self.snap_count);
        let world_dir = yaw_rotate(snapped_camera_yaw, Vector3::new(dir.x, 0.0, dir.y));
        let delta = world_dir.scale_by(speed * dt);

        let heading = heading_of(world_dir);
        let diff = delta_angle(facing_yaw, heading);
        let rate = lerp_clamped(0.0, self.max_angular_velocity, diff.abs() / 90.0);
        let turn = (rate * dt).min(diff.abs()) * sign(diff);
        let facing_yaw = wrap_degrees(facing_yaw + turn);

        self.axis_offset = snapped_camera_yaw - facing_yaw;

        Some(MoveStep {
            delta,
            facing_yaw,
            snapped_camera_yaw,
            axis_offset: self.axis_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn pad() -> MoveController {
        MoveController::from_config(&RigConfig::new())
    }

    fn dragged(x: f32, y: f32) -> MoveController {
        let mut m = pad();
        m.gesture_begin(Vector2::zero());
        m.gesture_drag_start(Vector2::new(x, y));
        m
    }

    // ==================== DRAG STATE ====================

    #[test]
    fn begin_sets_zero_length_drag() {
        let mut m = pad();
        m.gesture_begin(Vector2::new(40.0, -12.0));
        assert!(m.drag.is_idle());
        assert!(m.tick(0.016, 0.0, 0.0).is_none());
    }

    #[test]
    fn update_drags_anchor_behind_long_drags() {
        let mut m = pad();
        m.gesture_begin(Vector2::zero());
        m.gesture_drag_start(Vector2::zero());
        let v = m.gesture_update(Vector2::new(0.0, 300.0));
        assert!(approx_eq(v.y, 300.0));
        assert!(approx_eq(m.drag.base.y, 120.0));
        assert!(approx_eq(m.drag.vector().length(), 180.0));

        // Reversal is effective immediately instead of after 300 px.
        m.gesture_update(Vector2::new(0.0, 100.0));
        assert!(m.drag.vector().y < 0.0);
    }

    #[test]
    fn end_resets_drag() {
        let mut m = dragged(10.0, 10.0);
        m.gesture_end();
        assert!(m.drag.is_idle());
        assert!(!m.dragging);
        assert!(m.tick(0.016, 0.0, 0.0).is_none());
    }

    // ==================== DRIVE ====================

    #[test]
    fn long_drag_snaps_up_at_full_speed() {
        let m = dragged(0.0, 200.0);
        let (dir, speed) = m.drive().unwrap();
        assert!(approx_eq(dir.x, 0.0));
        assert!(approx_eq(dir.y, 1.0));
        assert!(approx_eq(speed, 3.0));
    }

    #[test]
    fn diagonal_drag_keeps_diagonal_at_scaled_speed() {
        let m = dragged(127.0, 127.0);
        let (dir, speed) = m.drive().unwrap();
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(dir.x, h));
        assert!(approx_eq(dir.y, h));
        let mag = (127.0f32 * 127.0 * 2.0).sqrt();
        assert!(approx_eq(speed, 3.0 * mag / 180.0));
    }

    #[test]
    fn long_off_axis_drag_snaps_to_compass() {
        let m = dragged(60.0, 170.0);
        let (dir, _) = m.drive().unwrap();
        assert!(approx_eq(dir.x, 0.0));
        assert!(approx_eq(dir.y, 1.0));
    }

    #[test]
    fn short_drag_is_not_snapped() {
        let m = dragged(30.0, 50.0);
        let (dir, speed) = m.drive().unwrap();
        let len = (30.0f32 * 30.0 + 50.0 * 50.0).sqrt();
        assert!(approx_eq(dir.x, 30.0 / len));
        assert!(approx_eq(speed, 3.0 * len / 180.0));
    }

    // ==================== TICK ====================

    #[test]
    fn up_moves_away_from_snapped_camera_yaw() {
        let mut m = dragged(0.0, 200.0);
        let step = m.tick(1.0, 37.0, 45.0).unwrap();
        assert!(approx_eq(step.snapped_camera_yaw, 45.0));
        let h = std::f32::consts::FRAC_1_SQRT_2 * 3.0;
        assert!(approx_eq(step.delta.x, h));
        assert!(approx_eq(step.delta.z, h));
        assert!(approx_eq(step.delta.y, 0.0));
        assert!(approx_eq(step.axis_offset, 0.0));
    }

    #[test]
    fn delta_scales_with_frame_time() {
        let mut m = dragged(0.0, 200.0);
        let a = m.tick(0.01, 0.0, 0.0).unwrap().delta.z;
        let b = m.tick(0.02, 0.0, 0.0).unwrap().delta.z;
        assert!(approx_eq(b, 2.0 * a));
    }

    #[test]
    fn turn_never_overshoots_heading() {
        // Drag right: heading 90 with camera yaw 0.
        let mut m = dragged(200.0, 0.0);
        let step = m.tick(10.0, 0.0, 80.0).unwrap();
        assert!(approx_eq(step.facing_yaw, 90.0));
    }

    #[test]
    fn turn_is_capped_by_angular_velocity() {
        let mut m = dragged(0.0, -200.0);
        let dt = 0.016;
        let step = m.tick(dt, 0.0, 0.0).unwrap();
        let turned = delta_angle(0.0, step.facing_yaw).abs();
        assert!(turned <= 360.0 * dt + EPSILON);
        assert!(turned > 0.0);
    }

    #[test]
    fn turn_rate_ramps_with_remaining_angle() {
        let mut m = dragged(200.0, 0.0);
        let dt = 0.001;
        let small = delta_angle(60.0, m.tick(dt, 0.0, 60.0).unwrap().facing_yaw);
        let large = delta_angle(0.0, m.tick(dt, 0.0, 0.0).unwrap().facing_yaw);
        // 30 degrees off turns at a third of the 90-degree rate.
        assert!(approx_eq(small * 3.0, large));
    }

    #[test]
    fn axis_offset_tracks_camera_minus_facing() {
        let mut m = dragged(0.0, 200.0);
        let step = m.tick(0.0, 90.0, 30.0).unwrap();
        assert!(approx_eq(step.axis_offset, 60.0));
        assert!(approx_eq(m.axis_offset, 60.0));
    }
}
