//! ECS resources made available to systems.
//!
//! Overview
//! - `dragregions` – screen rectangles owning the movement and camera pads
//! - `gesture` – gesture ownership and pinch tracking
//! - `input` – per-frame pointer events and touch points
//! - `pinchsource` – pluggable two-point providers for pinch zoom
//! - `rigconfig` – tuning loaded from an INI file
//! - `worldtime` – simulation time and delta
pub mod dragregions;
pub mod gesture;
pub mod input;
pub mod pinchsource;
pub mod rigconfig;
pub mod worldtime;
