//! Config file integration tests: INI round trip, partial files, repairs.

use std::path::PathBuf;

use bevy_ecs::prelude::*;

use touchrig::components::joystick::JoystickWidget;
use touchrig::components::movecontroller::MoveController;
use touchrig::components::orbitcamera::OrbitCamera;
use touchrig::components::tween::Easing;
use touchrig::game::spawn_rig;
use touchrig::resources::pinchsource::PinchSource;
use touchrig::resources::rigconfig::{PinchProviderKind, RigConfig};

fn temp_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("touchrig_config_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn save_then_load_round_trips() {
    let path = temp_config("round_trip.ini");
    let mut saved = RigConfig::with_path(&path);
    saved.move_speed = 4.5;
    saved.direction_snap_count = 4;
    saved.max_angle_x = 70.0;
    saved.align_easing = Easing::QuadInOut;
    saved.pinch_provider = PinchProviderKind::Touch;
    saved.widget_duration = 0.25;
    saved.window_width = 800;
    saved.save_to_file().unwrap();
    assert!(path.exists(), "Config file should be created");

    let mut loaded = RigConfig::with_path(&path);
    loaded.load_from_file().unwrap();
    assert_eq!(loaded.move_speed, 4.5);
    assert_eq!(loaded.direction_snap_count, 4);
    assert_eq!(loaded.max_angle_x, 70.0);
    assert_eq!(loaded.align_easing, Easing::QuadInOut);
    assert_eq!(loaded.pinch_provider, PinchProviderKind::Touch);
    assert_eq!(loaded.widget_duration, 0.25);
    assert_eq!(loaded.window_width, 800);
    assert_eq!(loaded.drag_max_distance, 180.0);

    std::fs::remove_file(&path).ok();
}

#[test]
fn partial_file_keeps_defaults() {
    let path = temp_config("partial.ini");
    std::fs::write(&path, "[camera]\nmax_distance = 40\nalign_easing = linear\n").unwrap();

    let mut c = RigConfig::with_path(&path);
    c.load_from_file().unwrap();
    assert_eq!(c.max_distance, 40.0);
    assert_eq!(c.align_easing, Easing::Linear);
    assert_eq!(c.min_distance, 7.0);
    assert_eq!(c.move_speed, 3.0);
    assert_eq!(c.widget_easing, Easing::CubicOut);

    std::fs::remove_file(&path).ok();
}

#[test]
fn invalid_values_are_repaired_on_load() {
    let path = temp_config("repair.ini");
    std::fs::write(
        &path,
        "[camera]\nmin_distance = 30\nmax_distance = 7\ninitial_distance = 100\n\
         pixels_per_camera_roll = 0\n\n[movement]\ndirection_snap_count = 0\n\
         move_speed = -2\n\n[widget]\neasing = bounce\n",
    )
    .unwrap();

    let mut c = RigConfig::with_path(&path);
    c.load_from_file().unwrap();
    assert_eq!((c.min_distance, c.max_distance), (7.0, 30.0));
    assert_eq!(c.initial_distance, 30.0);
    assert!(c.pixels_per_camera_roll > 0.0);
    assert_eq!(c.direction_snap_count, 1);
    assert_eq!(c.move_speed, 0.0);
    assert_eq!(c.widget_easing, Easing::CubicOut);

    std::fs::remove_file(&path).ok();
}

#[test]
fn loaded_config_drives_spawned_rig() {
    let path = temp_config("spawn.ini");
    std::fs::write(
        &path,
        "[movement]\ndrag_max_distance = 100\nsnap_hysteresis = 15\n\n\
         [camera]\ninitial_distance = 20\n\n[input]\npinch_provider = touch\n",
    )
    .unwrap();

    let mut c = RigConfig::with_path(&path);
    c.load_from_file().unwrap();

    let mut world = World::new();
    let rig = spawn_rig(&mut world, &c);

    let mover = world.get::<MoveController>(rig.character).unwrap();
    assert_eq!(mover.drag_max_distance, 100.0);
    assert_eq!(mover.snap_distance, 85.0);
    assert_eq!(mover.widget, Some(rig.widget));

    let widget = world.get::<JoystickWidget>(rig.widget).unwrap();
    assert_eq!(widget.snap_distance, 85.0);

    let camera = world.get::<OrbitCamera>(rig.camera).unwrap();
    assert_eq!(camera.distance, 20.0);
    assert_eq!(camera.track_target, Some(rig.character));

    assert_eq!(world.resource::<PinchSource>().name(), "touch");
    assert_eq!(world.resource::<RigConfig>().drag_max_distance, 100.0);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let mut c = RigConfig::with_path(temp_config("does_not_exist.ini"));
    assert!(c.load_from_file().is_err());
    assert_eq!(c.move_speed, 3.0);
    assert_eq!(c.snap_distance(), 170.0);
}
