//! Command processing between Lua and the ECS world.
//!
//! Scripts queue [`MapCmd`]s; the systems here turn them into events in the
//! order they were issued, so a script that sets next-map bounds and then
//! transfers sees its bounds applied on arrival.
//!
//! # Functions
//!
//! - [`process_map_command`] – Trigger the event for a single MapCmd
//! - [`lua_map_commands_system`] – Drain and process the Lua command queue
//! - [`update_lua_camera_cache`] – Refresh the snapshot read by `engine.get_camera()`
//! - [`lua_on_update_system`] – Call the script's `on_update(frame)` if defined

use bevy_ecs::prelude::*;
use log::error;
use std::path::PathBuf;

use crate::events::camerabounds::{SetCameraBoundsEvent, SetCameraBoundsNextMapEvent};
use crate::events::mapsetup::MapSetupEvent;
use crate::events::savegame::{LoadGameEvent, SaveGameEvent};
use crate::events::scroll::{ScrollMapEvent, SetDisplayPosEvent};
use crate::resources::camerabounds::CameraBounds;
use crate::resources::camerasnapshot::CameraSnapshot;
use crate::resources::gamemap::GameMap;
use crate::resources::lua_runtime::{LuaRuntime, MapCmd};
use crate::resources::nextmapbounds::NextMapBounds;

/// Process a single map command by triggering its event.
pub fn process_map_command(commands: &mut Commands, cmd: MapCmd) {
    match cmd {
        MapCmd::SetCameraBounds { bounds } => {
            commands.trigger(SetCameraBoundsEvent { bounds });
        }
        MapCmd::SetCameraBoundsNextMap { bounds } => {
            commands.trigger(SetCameraBoundsNextMapEvent { bounds });
        }
        MapCmd::Transfer { map_id, x, y } => {
            commands.trigger(MapSetupEvent { map_id, x, y });
        }
        MapCmd::Scroll {
            direction,
            distance,
        } => {
            commands.trigger(ScrollMapEvent {
                direction,
                distance,
            });
        }
        MapCmd::SetDisplayPos { x, y } => {
            commands.trigger(SetDisplayPosEvent { x, y });
        }
        MapCmd::SaveGame { path } => {
            commands.trigger(SaveGameEvent {
                path: path.map(PathBuf::from),
            });
        }
        MapCmd::LoadGame { path } => {
            commands.trigger(LoadGameEvent {
                path: path.map(PathBuf::from),
            });
        }
    }
}

/// Drains commands queued by Lua and processes them in order.
pub fn lua_map_commands_system(mut commands: Commands, lua_runtime: NonSend<LuaRuntime>) {
    for cmd in lua_runtime.drain_map_commands() {
        process_map_command(&mut commands, cmd);
    }
}

pub fn update_lua_camera_cache(
    lua_runtime: NonSend<LuaRuntime>,
    game_map: Res<GameMap>,
    camera_bounds: Res<CameraBounds>,
    next_map_bounds: Res<NextMapBounds>,
) {
    lua_runtime.update_camera_cache(CameraSnapshot::capture(
        &game_map,
        &camera_bounds,
        &next_map_bounds,
    ));
}

/// Calls `on_update(frame)` in the loaded script once per run.
///
/// The frame counter starts at 0 and lives in the system's local state.
pub fn lua_on_update_system(lua_runtime: NonSend<LuaRuntime>, mut frame: Local<u64>) {
    if lua_runtime.has_function("on_update")
        && let Err(e) = lua_runtime.call_function::<_, ()>("on_update", *frame)
    {
        error!("Error in on_update (frame {}): {}", *frame, e);
    }
    *frame += 1;
}
