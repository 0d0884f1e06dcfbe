//! ECS components for rig entities.
//!
//! Submodules overview:
//! - [`facing`] – body yaw turned by the movement controller
//! - [`joystick`] – virtual joystick widget state and animations
//! - [`movecontroller`] – movement pad drag state and per-frame motion
//! - [`orbitcamera`] – orbit camera angles, zoom, auto-align and auto-track
//! - [`tween`] – cancellable eased interpolation
//! - [`worldposition`] – world-space position for an entity

pub mod facing;
pub mod joystick;
pub mod movecontroller;
pub mod orbitcamera;
pub mod tween;
pub mod worldposition;
