//! Touch rig library.
//!
//! Input-to-motion layer for a third-person character and orbit camera:
//! movement pad with compass snapping, camera orbit with auto-align and
//! auto-track, pinch zoom, and a virtual joystick widget. Exposes the ECS
//! components, resources, systems and events for the demo binary and the
//! integration tests.

pub mod angles;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
