//! Orbit camera rig controller.
//!
//! The rig entity's [`WorldPosition`](super::worldposition::WorldPosition) is
//! the orbit pivot. [`OrbitCamera`] holds the rig's local euler angles and the
//! boom distance, and has three drivers:
//! - manual rotation from the camera pad, which cancels any auto-align;
//! - auto-align, a tween that eases yaw onto the compass grid after release;
//! - auto-track, which slides the pivot toward the follow target when it
//!   leaves the field-of-view cone. Runs only while the other two are idle.
//!
//! Zoom moves the boom along the rig's local forward axis, clamped to the
//! distance range.

use bevy_ecs::prelude::{Component, Entity};
use log::debug;
use raylib::prelude::{Vector2, Vector3};

use crate::angles::{angle_between, clamp_between, correct_angle, lerp_clamped, wrap_degrees};
use crate::components::tween::{Easing, Tween, TweenSlot};
use crate::resources::rigconfig::RigConfig;

#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    /// Local X euler angle in degrees, kept in [min_angle_x, max_angle_x].
    pub pitch: f32,
    /// Local Y euler angle in degrees.
    pub yaw: f32,
    /// Boom length from pivot to eye.
    pub distance: f32,
    pub min_angle_x: f32,
    pub max_angle_x: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Top auto-track speed in world units per second.
    pub track_speed: f32,
    /// Half-angle of the cone the target must stay inside.
    pub track_max_angle_of_view: f32,
    /// Degrees outside the cone at which auto-track reaches top speed.
    pub track_max_speed_angle: f32,
    /// Followed entity. Not owned; a despawned target is ignored.
    pub track_target: Option<Entity>,
    /// A camera-pad drag is in progress.
    pub dragging: bool,
    /// Drag pixels per degree of rotation.
    pub pixels_per_degree: f32,
    pub snap_count: u32,
    pub align_duration: f32,
    pub align_easing: Easing,
    /// In-flight auto-align of the yaw.
    pub align: TweenSlot<f32>,
}

impl OrbitCamera {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            pitch: clamp_between(config.initial_pitch, config.min_angle_x, config.max_angle_x),
            yaw: 0.0,
            distance: clamp_between(config.initial_distance, config.min_distance, config.max_distance),
            min_angle_x: config.min_angle_x,
            max_angle_x: config.max_angle_x,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            track_speed: config.track_speed,
            track_max_angle_of_view: config.track_max_angle_of_view,
            track_max_speed_angle: config.track_max_speed_angle,
            track_target: None,
            dragging: false,
            pixels_per_degree: config.pixels_per_camera_roll,
            snap_count: config.direction_snap_count,
            align_duration: config.align_duration,
            align_easing: config.align_easing,
            align: TweenSlot::default(),
        }
    }

    pub fn set_track_target(&mut self, target: Option<Entity>) {
        self.track_target = target;
    }

    /// Add `delta` (x = pitch, y = yaw) to the angles. Pitch saturates at the
    /// configured limits; yaw wraps. Cancels any auto-align.
    pub fn rotate(&mut self, delta: Vector2) {
        self.align.cancel();
        self.pitch = clamp_between(self.pitch + delta.x, self.min_angle_x, self.max_angle_x);
        self.yaw = wrap_degrees(self.yaw + delta.y);
    }

    /// Rotate from a camera-pad pointer delta in pixels. Vertical motion tilts,
    /// horizontal motion turns.
    pub fn rotate_by_drag(&mut self, pointer_delta: Vector2) {
        let ppd = self.pixels_per_degree.max(f32::EPSILON);
        self.rotate(Vector2::new(-pointer_delta.y / ppd, pointer_delta.x / ppd));
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Finish a camera-pad drag: snap the yaw to the compass grid and ease
    /// there. Returns the target yaw.
    pub fn end_drag(&mut self) -> f32 {
        self.dragging = false;
        let target = correct_angle(self.yaw, self.snap_count);
        self.align_yaw(target, self.align_duration, self.align_easing);
        target
    }

    /// Ease the yaw to `target_yaw`. Pitch is untouched. Replaces any align
    /// already in flight.
    pub fn align_yaw(&mut self, target_yaw: f32, duration: f32, easing: Easing) {
        debug!("camera align {:.1} -> {:.1} over {:.2}s", self.yaw, target_yaw, duration);
        self.align
            .start(Tween::new(self.yaw, target_yaw, duration).with_easing(easing));
    }

    /// Advance the auto-align. Returns whether it was running this frame.
    pub fn step_align(&mut self, dt: f32) -> bool {
        match self.align.step(dt) {
            Some(step) => {
                self.yaw = if step.finished { wrap_degrees(step.value) } else { step.value };
                true
            }
            None => false,
        }
    }

    /// Manual or animated rotation is in progress.
    pub fn is_rotating(&self) -> bool {
        self.dragging || self.align.is_playing()
    }

    /// Move the boom forward by `delta`: positive values bring the eye closer.
    /// The result saturates at the distance limits.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = clamp_between(self.distance - delta, self.min_distance, self.max_distance);
    }

    /// Unit view direction from the current angles.
    pub fn forward(&self) -> Vector3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vector3::new(cp * sy, -sp, cp * cy)
    }

    /// Eye position for a rig pivoting at `pivot`.
    pub fn eye_position(&self, pivot: Vector3) -> Vector3 {
        let f = self.forward();
        Vector3::new(
            pivot.x - f.x * self.distance,
            pivot.y - f.y * self.distance,
            pivot.z - f.z * self.distance,
        )
    }

    /// Pivot displacement that nudges `target` back toward the view cone.
    ///
    /// The cone hangs straight down from a point `distance` above the pivot.
    /// Speed ramps with how far outside the cone the target is, and the step
    /// never exceeds the distance that puts the target exactly on the cone.
    /// Returns `None` when the target is already framed.
    pub fn track_step(&self, pivot: Vector3, target: Vector3, dt: f32) -> Option<Vector3> {
        let apex = Vector3::new(pivot.x, pivot.y + self.distance, pivot.z);
        let to_target = Vector3::new(target.x - apex.x, target.y - apex.y, target.z - apex.z);
        let angle = angle_between(Vector3::new(0.0, -1.0, 0.0), to_target);
        if angle <= self.track_max_angle_of_view {
            return None;
        }

        let horizontal = Vector3::new(target.x - pivot.x, 0.0, target.z - pivot.z);
        let h_len = horizontal.length();
        if h_len <= f32::EPSILON {
            return None;
        }

        let drop = apex.y - target.y;
        let needed = if drop > 0.0 {
            (h_len - drop * self.track_max_angle_of_view.to_radians().tan()).max(0.0)
        } else {
            h_len
        };

        let diff = angle - self.track_max_angle_of_view;
        let speed = lerp_clamped(0.0, self.track_speed, diff / self.track_max_speed_angle);
        let step = (speed * dt.max(0.0)).min(needed);
        if step <= 0.0 {
            return None;
        }
        Some(horizontal.scale_by(step / h_len))
    }
}
