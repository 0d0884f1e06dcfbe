//! Frame timing resource.
//!
//! Every controller is framerate independent: it reads the scaled frame delta
//! from [`WorldTime`] instead of assuming a fixed step.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    /// Multiplier applied to raw frame deltas.
    pub time_scale: f32,
    /// Frames stepped so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
