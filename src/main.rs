//! Camera bounds runner.
//!
//! Loads the configuration and map definitions, runs a Lua script against a
//! fresh world and prints the resulting camera state as JSON.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and every map under the maps path
//! 2. Create the ECS world, register observers, create the Lua runtime
//! 3. Run the script; its top-level commands are queued
//! 4. For each frame: refresh the script's camera view, call `on_update(frame)`,
//!    apply queued commands in order
//! 5. Print the final camera state and bounds registry
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --script assets/scripts/main.lua --frames 3
//! ```

use boundcamera::game;
use boundcamera::resources::camerabounds::CameraBounds;
use boundcamera::resources::gameconfig::GameConfig;
use boundcamera::resources::lua_runtime::LuaRuntime;
use boundcamera::resources::mapstore::MapStore;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Per-map camera bounds runner
#[derive(Parser)]
#[command(version, about = "Runs a Lua script against per-map camera bounds and prints the result.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Lua script to run.
    #[arg(long, value_name = "PATH", default_value = "./assets/scripts/main.lua")]
    script: PathBuf,

    /// Number of frames to run after the script has loaded.
    #[arg(long, default_value_t = 1)]
    frames: u32,
}

#[derive(Serialize)]
struct FinalState<'a> {
    camera: boundcamera::resources::camerasnapshot::CameraSnapshot,
    camera_bounds: &'a CameraBounds,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let mut map_store = MapStore::new();
    if let Err(e) = map_store.load_dir(&config.maps_path) {
        log::error!("{}", e);
    }

    let mut world = game::init_world(config, map_store);

    let lua_runtime = match LuaRuntime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create Lua runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = lua_runtime.run_script(&cli.script.to_string_lossy()) {
        log::error!("Failed to run {}: {}", cli.script.display(), e);
        std::process::exit(1);
    }
    world.insert_non_send_resource(lua_runtime);

    let mut update = game::build_update_schedule();
    if let Err(e) = update.initialize(&mut world) {
        eprintln!("Error: failed to initialize schedule: {e}");
        std::process::exit(1);
    }

    // Frame 0 also applies the commands queued while the script loaded.
    for _ in 0..cli.frames.max(1) {
        update.run(&mut world);
        world.clear_trackers();
    }

    let state = FinalState {
        camera: game::snapshot(&world),
        camera_bounds: world.resource::<CameraBounds>(),
    };
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
