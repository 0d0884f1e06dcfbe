//! Rig configuration resource.
//!
//! Tuning values for the movement pad, orbit camera, auto-track, pinch zoom
//! and the joystick widget, loaded from an INI file. Missing keys keep their
//! defaults. Invalid combinations are repaired by [`RigConfig::sanitized`]
//! instead of failing, since the control loop has no place to abort.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! move_speed = 3
//! angular_velocity = 360
//! drag_max_distance = 180
//! snap_hysteresis = 10
//! direction_snap_count = 8
//!
//! [camera]
//! min_angle_x = 0
//! max_angle_x = 55
//! min_distance = 7
//! max_distance = 30
//! initial_pitch = 45
//! initial_distance = 12
//! pixels_per_camera_roll = 10
//! pixels_per_camera_distance = 20
//! align_duration = 0.5
//! align_easing = cubic_out
//!
//! [track]
//! track_speed = 4
//! track_max_angle_of_view = 5
//! track_max_speed_angle = 6
//!
//! [input]
//! drag_threshold = 10
//! pinch_provider = mouse
//!
//! [widget]
//! duration = 0.3
//! easing = cubic_out
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::angles::clamp_between;
use crate::components::tween::Easing;

const DEFAULT_CONFIG_PATH: &str = "./touchrig.ini";

/// Which multi-point source feeds pinch zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchProviderKind {
    /// Hold the pinch key and drag the mouse away from the screen centre.
    Mouse,
    /// Two real touch points.
    Touch,
}

impl PinchProviderKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mouse" => Some(PinchProviderKind::Mouse),
            "touch" => Some(PinchProviderKind::Touch),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PinchProviderKind::Mouse => "mouse",
            PinchProviderKind::Touch => "touch",
        }
    }
}

/// Rig configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct RigConfig {
    // [movement]
    /// Top planar speed in world units per second.
    pub move_speed: f32,
    /// Top facing turn rate in degrees per second.
    pub angular_velocity: f32,
    /// Drag length (pixels) that reaches top speed.
    pub drag_max_distance: f32,
    /// Distance below `drag_max_distance` where snapping and the widget's
    /// closed look kick in.
    pub snap_hysteresis: f32,
    /// Number of compass directions used for snapping.
    pub direction_snap_count: u32,

    // [camera]
    pub min_angle_x: f32,
    pub max_angle_x: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub initial_pitch: f32,
    pub initial_distance: f32,
    /// Drag pixels per degree of camera rotation.
    pub pixels_per_camera_roll: f32,
    /// Pinch pixels per unit of camera distance.
    pub pixels_per_camera_distance: f32,
    pub align_duration: f32,
    pub align_easing: Easing,

    // [track]
    pub track_speed: f32,
    pub track_max_angle_of_view: f32,
    pub track_max_speed_angle: f32,

    // [input]
    /// Pixels a press must travel before it becomes a drag.
    pub drag_threshold: f32,
    pub pinch_provider: PinchProviderKind,

    // [widget]
    pub widget_duration: f32,
    pub widget_easing: Easing,

    // [window]
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,

    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RigConfig {
    /// Create a new configuration with the stock tuning.
    pub fn new() -> Self {
        Self {
            move_speed: 3.0,
            angular_velocity: 360.0,
            drag_max_distance: 180.0,
            snap_hysteresis: 10.0,
            direction_snap_count: 8,
            min_angle_x: 0.0,
            max_angle_x: 55.0,
            min_distance: 7.0,
            max_distance: 30.0,
            initial_pitch: 45.0,
            initial_distance: 12.0,
            pixels_per_camera_roll: 10.0,
            pixels_per_camera_distance: 20.0,
            align_duration: 0.5,
            align_easing: Easing::CubicOut,
            track_speed: 4.0,
            track_max_angle_of_view: 5.0,
            track_max_speed_angle: 6.0,
            drag_threshold: 10.0,
            pinch_provider: PinchProviderKind::Mouse,
            widget_duration: 0.3,
            widget_easing: Easing::CubicOut,
            window_width: 1280,
            window_height: 720,
            target_fps: 60,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Drag length at which snapping engages and the widget closes.
    pub fn snap_distance(&self) -> f32 {
        self.drag_max_distance - self.snap_hysteresis
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. The result is sanitized.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str, slot: &mut f32| {
            if let Some(v) = config.getfloat(section, key).ok().flatten() {
                *slot = v as f32;
            }
        };

        float("movement", "move_speed", &mut self.move_speed);
        float("movement", "angular_velocity", &mut self.angular_velocity);
        float("movement", "drag_max_distance", &mut self.drag_max_distance);
        float("movement", "snap_hysteresis", &mut self.snap_hysteresis);
        if let Some(n) = config.getuint("movement", "direction_snap_count").ok().flatten() {
            self.direction_snap_count = n.min(u32::MAX as u64) as u32;
        }

        float("camera", "min_angle_x", &mut self.min_angle_x);
        float("camera", "max_angle_x", &mut self.max_angle_x);
        float("camera", "min_distance", &mut self.min_distance);
        float("camera", "max_distance", &mut self.max_distance);
        float("camera", "initial_pitch", &mut self.initial_pitch);
        float("camera", "initial_distance", &mut self.initial_distance);
        float("camera", "pixels_per_camera_roll", &mut self.pixels_per_camera_roll);
        float("camera", "pixels_per_camera_distance", &mut self.pixels_per_camera_distance);
        float("camera", "align_duration", &mut self.align_duration);
        if let Some(name) = config.get("camera", "align_easing") {
            match Easing::from_name(&name) {
                Some(e) => self.align_easing = e,
                None => warn!("Unknown camera.align_easing '{}', keeping {}", name, self.align_easing.name()),
            }
        }

        float("track", "track_speed", &mut self.track_speed);
        float("track", "track_max_angle_of_view", &mut self.track_max_angle_of_view);
        float("track", "track_max_speed_angle", &mut self.track_max_speed_angle);

        float("input", "drag_threshold", &mut self.drag_threshold);
        if let Some(name) = config.get("input", "pinch_provider") {
            match PinchProviderKind::from_name(&name) {
                Some(p) => self.pinch_provider = p,
                None => warn!("Unknown input.pinch_provider '{}', keeping {}", name, self.pinch_provider.name()),
            }
        }

        float("widget", "duration", &mut self.widget_duration);
        if let Some(name) = config.get("widget", "easing") {
            match Easing::from_name(&name) {
                Some(e) => self.widget_easing = e,
                None => warn!("Unknown widget.easing '{}', keeping {}", name, self.widget_easing.name()),
            }
        }

        if let Some(w) = config.getuint("window", "width").ok().flatten() {
            self.window_width = w as u32;
        }
        if let Some(h) = config.getuint("window", "height").ok().flatten() {
            self.window_height = h as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        *self = std::mem::take(self).sanitized();

        info!(
            "Loaded config: speed={}, drag_max={}, pitch=[{}, {}], distance=[{}, {}], pinch={}",
            self.move_speed,
            self.drag_max_distance,
            self.min_angle_x,
            self.max_angle_x,
            self.min_distance,
            self.max_distance,
            self.pinch_provider.name()
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut put = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        put("movement", "move_speed", self.move_speed.to_string());
        put("movement", "angular_velocity", self.angular_velocity.to_string());
        put("movement", "drag_max_distance", self.drag_max_distance.to_string());
        put("movement", "snap_hysteresis", self.snap_hysteresis.to_string());
        put("movement", "direction_snap_count", self.direction_snap_count.to_string());

        put("camera", "min_angle_x", self.min_angle_x.to_string());
        put("camera", "max_angle_x", self.max_angle_x.to_string());
        put("camera", "min_distance", self.min_distance.to_string());
        put("camera", "max_distance", self.max_distance.to_string());
        put("camera", "initial_pitch", self.initial_pitch.to_string());
        put("camera", "initial_distance", self.initial_distance.to_string());
        put("camera", "pixels_per_camera_roll", self.pixels_per_camera_roll.to_string());
        put("camera", "pixels_per_camera_distance", self.pixels_per_camera_distance.to_string());
        put("camera", "align_duration", self.align_duration.to_string());
        put("camera", "align_easing", self.align_easing.name().to_string());

        put("track", "track_speed", self.track_speed.to_string());
        put("track", "track_max_angle_of_view", self.track_max_angle_of_view.to_string());
        put("track", "track_max_speed_angle", self.track_max_speed_angle.to_string());

        put("input", "drag_threshold", self.drag_threshold.to_string());
        put("input", "pinch_provider", self.pinch_provider.name().to_string());

        put("widget", "duration", self.widget_duration.to_string());
        put("widget", "easing", self.widget_easing.name().to_string());

        put("window", "width", self.window_width.to_string());
        put("window", "height", self.window_height.to_string());
        put("window", "target_fps", self.target_fps.to_string());

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Repair values that would make the controllers misbehave.
    ///
    /// Inverted ranges are swapped, divisors are kept positive and speeds are
    /// kept non-negative. Each repair is logged.
    pub fn sanitized(mut self) -> Self {
        const MIN_DIVISOR: f32 = 1e-3;

        if self.min_angle_x > self.max_angle_x {
            warn!("min_angle_x {} > max_angle_x {}, swapping", self.min_angle_x, self.max_angle_x);
            std::mem::swap(&mut self.min_angle_x, &mut self.max_angle_x);
        }
        if self.min_distance > self.max_distance {
            warn!("min_distance {} > max_distance {}, swapping", self.min_distance, self.max_distance);
            std::mem::swap(&mut self.min_distance, &mut self.max_distance);
        }
        if self.min_distance < 0.0 {
            warn!("min_distance {} is negative, using 0", self.min_distance);
            self.min_distance = 0.0;
            self.max_distance = self.max_distance.max(0.0);
        }

        let positive = |name: &str, v: &mut f32| {
            if !(*v >= MIN_DIVISOR) {
                warn!("{} must be positive (got {}), using {}", name, v, MIN_DIVISOR);
                *v = MIN_DIVISOR;
            }
        };
        positive("drag_max_distance", &mut self.drag_max_distance);
        positive("pixels_per_camera_roll", &mut self.pixels_per_camera_roll);
        positive("pixels_per_camera_distance", &mut self.pixels_per_camera_distance);
        positive("track_max_speed_angle", &mut self.track_max_speed_angle);

        let non_negative = |name: &str, v: &mut f32| {
            if !(*v >= 0.0) {
                warn!("{} must not be negative (got {}), using 0", name, v);
                *v = 0.0;
            }
        };
        non_negative("move_speed", &mut self.move_speed);
        non_negative("angular_velocity", &mut self.angular_velocity);
        non_negative("snap_hysteresis", &mut self.snap_hysteresis);
        non_negative("track_speed", &mut self.track_speed);
        non_negative("track_max_angle_of_view", &mut self.track_max_angle_of_view);
        non_negative("drag_threshold", &mut self.drag_threshold);
        non_negative("align_duration", &mut self.align_duration);
        non_negative("widget_duration", &mut self.widget_duration);

        if self.direction_snap_count == 0 {
            warn!("direction_snap_count must be at least 1, using 1");
            self.direction_snap_count = 1;
        }

        self.initial_pitch = clamp_between(self.initial_pitch, self.min_angle_x, self.max_angle_x);
        self.initial_distance = clamp_between(self.initial_distance, self.min_distance, self.max_distance);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_tuning() {
        let c = RigConfig::new();
        assert_eq!(c.drag_max_distance, 180.0);
        assert_eq!(c.snap_distance(), 170.0);
        assert_eq!(c.direction_snap_count, 8);
        assert_eq!(c.pixels_per_camera_distance, 20.0);
        assert_eq!(c.align_easing, Easing::CubicOut);
        assert_eq!(c.pinch_provider, PinchProviderKind::Mouse);
    }

    #[test]
    fn test_sanitized_swaps_inverted_ranges() {
        let mut c = RigConfig::new();
        c.min_distance = 30.0;
        c.max_distance = 7.0;
        c.min_angle_x = 80.0;
        c.max_angle_x = 10.0;
        let c = c.sanitized();
        assert_eq!((c.min_distance, c.max_distance), (7.0, 30.0));
        assert_eq!((c.min_angle_x, c.max_angle_x), (10.0, 80.0));
    }

    #[test]
    fn test_sanitized_repairs_divisors_and_counts() {
        let mut c = RigConfig::new();
        c.pixels_per_camera_roll = 0.0;
        c.pixels_per_camera_distance = -5.0;
        c.drag_max_distance = f32::NAN;
        c.direction_snap_count = 0;
        c.move_speed = -1.0;
        let c = c.sanitized();
        assert!(c.pixels_per_camera_roll > 0.0);
        assert!(c.pixels_per_camera_distance > 0.0);
        assert!(c.drag_max_distance > 0.0);
        assert_eq!(c.direction_snap_count, 1);
        assert_eq!(c.move_speed, 0.0);
    }

    #[test]
    fn test_sanitized_clamps_initial_pose_into_limits() {
        let mut c = RigConfig::new();
        c.initial_pitch = 90.0;
        c.initial_distance = 1.0;
        let c = c.sanitized();
        assert_eq!(c.initial_pitch, 55.0);
        assert_eq!(c.initial_distance, 7.0);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut c = RigConfig::with_path("./definitely/not/here/touchrig.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.move_speed, 3.0);
    }

    #[test]
    fn test_pinch_provider_names() {
        assert_eq!(PinchProviderKind::from_name("Touch"), Some(PinchProviderKind::Touch));
        assert_eq!(PinchProviderKind::from_name("pen"), None);
    }
}
