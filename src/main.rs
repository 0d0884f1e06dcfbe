//! Touch rig demo entry point.
//!
//! A third-person character and orbit camera driven by pointer input, using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! The left half of the window is the movement pad, the right half the
//! camera pad. Hold `P` and drag to simulate a pinch with the mouse, or run
//! with `--touch` to pinch with two real touches.
//!
//! # Main Loop
//!
//! 1. Load the INI config (defaults on error) and open the window
//! 2. Spawn the rig and register the pad observers
//! 3. Each frame: update time, poll pointers, run the rig schedule, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./touchrig.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use touchrig::game::spawn_rig;
use touchrig::resources::rigconfig::{PinchProviderKind, RigConfig};
use touchrig::resources::worldtime::WorldTime;
use touchrig::systems::input::poll_pointer_input;
use touchrig::systems::render::render_system;
use touchrig::systems::rig_schedule;
use touchrig::systems::time::update_world_time;

/// Touch rig demo
#[derive(Parser)]
#[command(version, about = "Drag-to-move, drag-to-orbit and pinch-to-zoom character rig demo")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = "./touchrig.ini")]
    config: PathBuf,

    /// Write the default configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<Option<PathBuf>>,

    /// Pinch with two real touches instead of the P key and mouse.
    #[arg(long)]
    touch: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write the default config and quit (no window needed)
    if let Some(maybe_path) = cli.write_default_config {
        let path = maybe_path.unwrap_or_else(|| cli.config.clone());
        let config = RigConfig::with_path(&path);
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", path.display());
        return;
    }

    let mut config = RigConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if cli.touch {
        config.pinch_provider = PinchProviderKind::Touch;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Touch Rig")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    spawn_rig(&mut world, &config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut input = Schedule::default();
    input.add_systems(poll_pointer_input);
    let mut rig = rig_schedule();
    let mut render = Schedule::default();
    render.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        input.run(&mut world);
        rig.run(&mut world);
        render.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
