//! Rig tick integration tests: gestures routed through the full schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use touchrig::components::facing::Facing;
use touchrig::components::joystick::JoystickWidget;
use touchrig::components::movecontroller::MoveController;
use touchrig::components::orbitcamera::OrbitCamera;
use touchrig::components::tween::Easing;
use touchrig::components::worldposition::WorldPosition;
use touchrig::game::{RigEntities, spawn_rig};
use touchrig::resources::gesture::{GestureKind, GestureState};
use touchrig::resources::input::{PointerInput, PointerPhase, TouchPhase, TouchPoint};
use touchrig::resources::rigconfig::{PinchProviderKind, RigConfig};
use touchrig::resources::worldtime::WorldTime;
use touchrig::systems::rig_schedule;
use touchrig::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;
const DT: f32 = 0.1;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct Rig {
    world: World,
    schedule: Schedule,
    e: RigEntities,
}

impl Rig {
    fn new() -> Self {
        Self::with_config(&RigConfig::new())
    }

    fn with_config(config: &RigConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let e = spawn_rig(&mut world, config);
        Rig {
            world,
            schedule: rig_schedule(),
            e,
        }
    }

    fn push(&mut self, id: u32, phase: PointerPhase, x: f32, y: f32) {
        self.world
            .resource_mut::<PointerInput>()
            .push(id, phase, Vector2::new(x, y));
    }

    fn frame(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    fn frames(&mut self, n: usize, dt: f32) {
        for _ in 0..n {
            self.frame(dt);
        }
    }

    fn mouse_pinch(&mut self, x: f32, pressed: bool) {
        let mut input = self.world.resource_mut::<PointerInput>();
        input.pinch_key = true;
        input.mouse_down = true;
        input.mouse_pressed = pressed;
        input.mouse_position = Vector2::new(x, 0.0);
    }

    /// Replace this frame's touch snapshot with points along the x axis.
    fn touches(&mut self, points: &[(u32, f32, TouchPhase)]) {
        let mut input = self.world.resource_mut::<PointerInput>();
        input.touches.clear();
        for &(id, x, phase) in points {
            input.push_touch(TouchPoint {
                id,
                position: Vector2::new(x, 0.0),
                phase,
            });
        }
    }

    fn character_pos(&self) -> WorldPosition {
        *self.world.get::<WorldPosition>(self.e.character).unwrap()
    }

    fn camera(&self) -> &OrbitCamera {
        self.world.get::<OrbitCamera>(self.e.camera).unwrap()
    }

    fn camera_mut(&mut self) -> Mut<'_, OrbitCamera> {
        self.world.get_mut::<OrbitCamera>(self.e.camera).unwrap()
    }

    fn pivot(&self) -> WorldPosition {
        *self.world.get::<WorldPosition>(self.e.camera).unwrap()
    }

    fn widget(&self) -> &JoystickWidget {
        self.world.get::<JoystickWidget>(self.e.widget).unwrap()
    }

    /// Press on the movement pad and drag straight up past the limit.
    fn drag_move_pad_up(&mut self) {
        self.push(1, PointerPhase::Down, -300.0, 0.0);
        self.frame(DT);
        self.push(1, PointerPhase::Move, -300.0, 5.0);
        self.frame(DT);
        self.push(1, PointerPhase::Move, -300.0, 200.0);
        self.frame(DT);
    }
}

// ==================== MOVEMENT PAD ====================

#[test]
fn move_drag_up_walks_away_from_camera() {
    let mut rig = Rig::new();
    rig.drag_move_pad_up();

    let p = rig.character_pos();
    assert!(approx_eq(p.pos.x, 0.0));
    assert!(approx_eq(p.pos.z, 3.0 * DT));
    assert!(approx_eq(rig.world.get::<Facing>(rig.e.character).unwrap().yaw, 0.0));

    let mover = rig.world.get::<MoveController>(rig.e.character).unwrap();
    assert!(mover.dragging);
    // Anchor was pulled along to stay within the drag limit.
    assert!(approx_eq(mover.drag.base.y, 20.0));
    assert_eq!(
        rig.world.resource::<GestureState>().kind(),
        GestureKind::Move
    );
}

#[test]
fn press_below_threshold_does_not_move() {
    let mut rig = Rig::new();
    rig.push(1, PointerPhase::Down, -300.0, 0.0);
    rig.push(1, PointerPhase::Move, -300.0, 9.0);
    rig.frames(3, DT);
    let p = rig.character_pos();
    assert!(approx_eq(p.pos.z, 0.0));
    assert!(!rig.widget().is_visible());
}

#[test]
fn release_stops_character_and_hides_widget() {
    let mut rig = Rig::new();
    rig.drag_move_pad_up();
    assert!(rig.widget().ring_visible);
    assert!(rig.widget().closed);

    rig.push(1, PointerPhase::Up, -300.0, 200.0);
    rig.frame(DT);
    let stopped = rig.character_pos();
    rig.frames(10, DT);
    assert!(approx_eq(rig.character_pos().pos.z, stopped.pos.z));
    assert!(!rig.widget().is_visible());
    assert_eq!(rig.world.resource::<GestureState>().kind(), GestureKind::None);
}

#[test]
fn movement_follows_snapped_camera_yaw() {
    let mut rig = Rig::new();
    rig.camera_mut().yaw = 80.0;
    rig.drag_move_pad_up();

    // 80 snaps to 90: pad up walks along +X.
    let p = rig.character_pos();
    assert!(approx_eq(p.pos.x, 3.0 * DT));
    assert!(approx_eq(p.pos.z, 0.0));

    // Facing ramps toward 90 at the full 360 deg/s rate.
    let facing = rig.world.get::<Facing>(rig.e.character).unwrap().yaw;
    assert!(approx_eq(facing, 36.0));
    assert!(approx_eq(rig.widget().secondary_angle, 54.0));
}

// ==================== CAMERA PAD ====================

#[test]
fn camera_drag_rotates_then_aligns_on_release() {
    let mut rig = Rig::new();
    let pitch = rig.camera().pitch;
    rig.push(2, PointerPhase::Down, 300.0, 0.0);
    rig.push(2, PointerPhase::Move, 310.0, 0.0);
    rig.frame(DT);
    assert!(rig.camera().dragging);
    assert!(approx_eq(rig.camera().yaw, 0.0));

    // Ownership stays with the camera pad beyond its rectangle.
    rig.push(2, PointerPhase::Move, 680.0, 0.0);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().yaw, 37.0));
    assert!(approx_eq(rig.camera().pitch, pitch));

    rig.push(2, PointerPhase::Up, 680.0, 0.0);
    rig.frame(DT);
    assert!(!rig.camera().dragging);
    assert!(rig.camera().yaw > 37.0 && rig.camera().yaw < 45.0);
    rig.frames(6, DT);
    assert!(approx_eq(rig.camera().yaw, 45.0));
    assert!(!rig.camera().is_rotating());
}

#[test]
fn camera_vertical_drag_saturates_pitch() {
    let mut rig = Rig::new();
    rig.push(2, PointerPhase::Down, 300.0, 0.0);
    rig.push(2, PointerPhase::Move, 300.0, -20.0);
    rig.push(2, PointerPhase::Move, 300.0, -2000.0);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().pitch, 55.0));
    rig.push(2, PointerPhase::Move, 300.0, 2000.0);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().pitch, 0.0));
}

#[test]
fn second_pointer_cannot_claim_other_pad() {
    let mut rig = Rig::new();
    rig.drag_move_pad_up();
    rig.push(7, PointerPhase::Down, 300.0, 0.0);
    rig.push(7, PointerPhase::Move, 500.0, 0.0);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().yaw, 0.0));
    assert!(!rig.camera().dragging);
}

// ==================== PINCH ====================

#[test]
fn pinch_zooms_by_distance_change() {
    let mut rig = Rig::new();
    assert!(approx_eq(rig.camera().distance, 12.0));
    rig.mouse_pinch(100.0, true);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().distance, 12.0));
    rig.mouse_pinch(120.0, false);
    rig.frame(DT);
    // (120 - 100) / 20 = 1 unit closer.
    assert!(approx_eq(rig.camera().distance, 11.0));
    rig.mouse_pinch(-2000.0, false);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().distance, 7.0));
}

#[test]
fn touch_pinch_zooms_then_lift_ends_without_jump() {
    let mut config = RigConfig::new();
    config.pinch_provider = PinchProviderKind::Touch;
    let mut rig = Rig::with_config(&config);

    rig.touches(&[(0, 0.0, TouchPhase::Began), (1, 100.0, TouchPhase::Began)]);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().distance, 12.0));
    rig.touches(&[(0, 0.0, TouchPhase::Stationary), (1, 120.0, TouchPhase::Moved)]);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().distance, 11.0));

    // One finger slides in as the other lifts: no zoom from the stale point.
    rig.touches(&[(0, 60.0, TouchPhase::Moved), (1, 120.0, TouchPhase::Ended)]);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().distance, 11.0));
    assert!(!rig.world.resource::<GestureState>().is_pinching());
}

#[test]
fn pinch_is_suppressed_while_dragging() {
    let mut rig = Rig::new();
    rig.drag_move_pad_up();
    rig.mouse_pinch(100.0, true);
    rig.frame(DT);
    rig.mouse_pinch(300.0, false);
    rig.frame(DT);
    assert!(approx_eq(rig.camera().distance, 12.0));
    assert!(!rig.world.resource::<GestureState>().is_pinching());
}

#[test]
fn drags_are_ignored_while_pinching() {
    let mut rig = Rig::new();
    rig.mouse_pinch(100.0, true);
    rig.frame(DT);
    rig.push(1, PointerPhase::Down, -300.0, 0.0);
    rig.push(1, PointerPhase::Move, -300.0, 200.0);
    rig.mouse_pinch(100.0, false);
    rig.frames(2, DT);

    assert_eq!(rig.world.resource::<GestureState>().kind(), GestureKind::Pinch);
    assert!(!rig.world.get::<MoveController>(rig.e.character).unwrap().dragging);
    assert!(approx_eq(rig.character_pos().pos.z, 0.0));
    assert!(!rig.widget().is_visible());
}

// ==================== AUTO-TRACK ====================

#[test]
fn auto_track_reframes_without_overshoot() {
    let mut rig = Rig::new();
    rig.world
        .get_mut::<WorldPosition>(rig.e.character)
        .unwrap()
        .pos
        .x = 5.0;
    let needed = 5.0 - 12.0 * 5.0f32.to_radians().tan();

    rig.frame(DT);
    assert!(approx_eq(rig.pivot().pos.x, 4.0 * DT));
    for _ in 0..100 {
        rig.frame(DT);
        assert!(rig.pivot().pos.x <= needed + EPSILON);
    }
    assert!((rig.pivot().pos.x - needed).abs() < 1e-2);
    assert!(approx_eq(rig.pivot().pos.y, 0.0));
}

#[test]
fn auto_track_waits_for_align() {
    let mut rig = Rig::new();
    rig.world
        .get_mut::<WorldPosition>(rig.e.character)
        .unwrap()
        .pos
        .x = 5.0;
    rig.camera_mut().align_yaw(90.0, 1.0, Easing::Linear);
    rig.frame(DT);
    assert!(approx_eq(rig.pivot().pos.x, 0.0));
    rig.frames(15, DT);
    assert!(rig.pivot().pos.x > 0.0);
}

#[test]
fn auto_track_ignores_despawned_target() {
    let mut rig = Rig::new();
    rig.world
        .get_mut::<WorldPosition>(rig.e.character)
        .unwrap()
        .pos
        .x = 5.0;
    assert!(rig.world.despawn(rig.e.character));
    rig.frames(3, DT);
    assert!(approx_eq(rig.pivot().pos.x, 0.0));
}
