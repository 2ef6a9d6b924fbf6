//! Lua runtime core implementation.
//!
//! This module contains the `LuaRuntime` struct which manages the Lua interpreter
//! and provides the `engine` table API to Lua scripts.

use super::commands::*;
use crate::resources::boundsrect::PartialBounds;
use crate::resources::camerasnapshot::CameraSnapshot;
use crate::systems::scroll::ScrollDirection;
use mlua::prelude::*;
use std::cell::RefCell;

use log::{error, info, warn};

/// Shared state accessible from Lua function closures.
/// This is stored in Lua's app_data and allows Lua functions to queue commands.
pub(super) struct LuaAppData {
    map_commands: RefCell<Vec<MapCmd>>,
    /// Cached camera state (read-only for Lua).
    /// Updated before calling Lua callbacks via `update_camera_cache()`.
    camera_snapshot: RefCell<CameraSnapshot>,
}

/// Resource holding the Lua interpreter state.
///
/// This is a `NonSend` resource because the Lua state is not thread-safe.
/// It should be initialized once at startup and reused throughout the game.
pub struct LuaRuntime {
    lua: Lua,
}

/// Registers a Lua function that pushes a command to a queue in `LuaAppData`.
macro_rules! register_cmd {
    ($engine:expr, $lua:expr, $name:expr, $queue:ident,
     |$args:pat_param| $arg_ty:ty, $cmd:expr) => {
        $engine.set(
            $name,
            $lua.create_function(|lua, $args: $arg_ty| {
                lua.app_data_ref::<LuaAppData>()
                    .ok_or_else(|| LuaError::runtime("LuaAppData not found"))?
                    .$queue
                    .borrow_mut()
                    .push($cmd);
                Ok(())
            })?,
        )?;
    };
}

/// Bounds arguments as received from Lua: `minX, maxX, minY, maxY`.
/// Numbers are coerced to strings; `nil` stays `None`.
type BoundsArgs = (Option<String>, Option<String>, Option<String>, Option<String>);

fn bounds_from_args((min_x, max_x, min_y, max_y): BoundsArgs) -> PartialBounds {
    PartialBounds::from_args(
        min_x.as_deref(),
        max_x.as_deref(),
        min_y.as_deref(),
        max_y.as_deref(),
    )
}

impl LuaRuntime {
    /// Creates a new Lua runtime and registers the engine API.
    ///
    /// # Errors
    ///
    /// Returns an error if Lua initialization or API registration fails.
    pub fn new() -> LuaResult<Self> {
        let lua = Lua::new();

        // Set up the package path so `require` can find scripts in assets/scripts/
        lua.load(r#"package.path = "./assets/scripts/?.lua;./assets/scripts/?/init.lua;" .. package.path"#)
            .exec()?;

        lua.set_app_data(LuaAppData {
            map_commands: RefCell::new(Vec::new()),
            camera_snapshot: RefCell::new(CameraSnapshot::default()),
        });

        let runtime = Self { lua };
        runtime.register_base_api()?;
        runtime.register_camera_bounds_api()?;
        runtime.register_map_api()?;
        runtime.register_save_api()?;

        Ok(runtime)
    }

    /// Registers the base `engine` table with logging functions.
    fn register_base_api(&self) -> LuaResult<()> {
        let engine = self.lua.create_table()?;

        // engine.log(message) - General purpose logging
        engine.set(
            "log",
            self.lua.create_function(|_, msg: String| {
                info!(target: "lua", "{}", msg);
                Ok(())
            })?,
        )?;

        // engine.log_info(message) - Info level logging
        engine.set(
            "log_info",
            self.lua.create_function(|_, msg: String| {
                info!(target: "lua", "{}", msg);
                Ok(())
            })?,
        )?;

        // engine.log_warn(message) - Warning level logging
        engine.set(
            "log_warn",
            self.lua.create_function(|_, msg: String| {
                warn!(target: "lua", "{}", msg);
                Ok(())
            })?,
        )?;

        // engine.log_error(message) - Error level logging
        engine.set(
            "log_error",
            self.lua.create_function(|_, msg: String| {
                error!(target: "lua", "{}", msg);
                Ok(())
            })?,
        )?;

        self.lua.globals().set("engine", engine)?;

        Ok(())
    }

    fn register_camera_bounds_api(&self) -> LuaResult<()> {
        let engine: LuaTable = self.lua.globals().get("engine")?;
        register_cmd!(engine, self.lua, "set_camera_bounds", map_commands,
            |args| BoundsArgs, MapCmd::SetCameraBounds { bounds: bounds_from_args(args) });
        register_cmd!(engine, self.lua, "set_camera_bounds_next_map", map_commands,
            |args| BoundsArgs, MapCmd::SetCameraBoundsNextMap { bounds: bounds_from_args(args) });

        // engine.get_camera() - Snapshot of the camera as of the last cache update
        engine.set(
            "get_camera",
            self.lua.create_function(|lua, ()| {
                let snapshot = lua
                    .app_data_ref::<LuaAppData>()
                    .ok_or_else(|| LuaError::runtime("LuaAppData not found"))?
                    .camera_snapshot
                    .borrow()
                    .clone();
                lua.to_value(&snapshot)
            })?,
        )?;
        Ok(())
    }

    fn register_map_api(&self) -> LuaResult<()> {
        let engine: LuaTable = self.lua.globals().get("engine")?;
        register_cmd!(engine, self.lua, "transfer", map_commands,
            |(map_id, x, y)| (u32, Option<f32>, Option<f32>),
            MapCmd::Transfer { map_id, x: x.unwrap_or(0.0), y: y.unwrap_or(0.0) });
        register_cmd!(engine, self.lua, "set_display_pos", map_commands,
            |(x, y)| (f32, f32), MapCmd::SetDisplayPos { x, y });

        // engine.scroll(direction, distance) - direction is "up"/"down"/"left"/"right" or 8/2/4/6
        engine.set(
            "scroll",
            self.lua
                .create_function(|lua, (direction, distance): (String, f32)| {
                    let direction = ScrollDirection::parse(&direction).ok_or_else(|| {
                        LuaError::runtime(format!("Unknown scroll direction '{}'", direction))
                    })?;
                    lua.app_data_ref::<LuaAppData>()
                        .ok_or_else(|| LuaError::runtime("LuaAppData not found"))?
                        .map_commands
                        .borrow_mut()
                        .push(MapCmd::Scroll {
                            direction,
                            distance,
                        });
                    Ok(())
                })?,
        )?;
        Ok(())
    }

    fn register_save_api(&self) -> LuaResult<()> {
        let engine: LuaTable = self.lua.globals().get("engine")?;
        register_cmd!(engine, self.lua, "save_game", map_commands,
            |path| Option<String>, MapCmd::SaveGame { path });
        register_cmd!(engine, self.lua, "load_game", map_commands,
            |path| Option<String>, MapCmd::LoadGame { path });
        Ok(())
    }

    /// Drains all queued map commands, in the order they were issued.
    pub fn drain_map_commands(&self) -> Vec<MapCmd> {
        self.lua
            .app_data_ref::<LuaAppData>()
            .map(|data| data.map_commands.borrow_mut().drain(..).collect())
            .unwrap_or_default()
    }

    /// Updates the cached camera snapshot returned by `engine.get_camera()`.
    ///
    /// Call this before invoking Lua callbacks so they have fresh data.
    pub fn update_camera_cache(&self, snapshot: CameraSnapshot) {
        if let Some(data) = self.lua.app_data_ref::<LuaAppData>() {
            *data.camera_snapshot.borrow_mut() = snapshot;
        }
    }

    /// Loads and executes a Lua script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the script fails.
    pub fn run_script(&self, path: &str) -> LuaResult<()> {
        let script = std::fs::read_to_string(path)
            .map_err(|e| LuaError::ExternalError(std::sync::Arc::new(e)))?;
        self.lua.load(&script).set_name(path).exec()
    }

    /// Executes a chunk of Lua source.
    pub fn run_source(&self, name: &str, source: &str) -> LuaResult<()> {
        self.lua.load(source).set_name(name).exec()
    }

    /// Calls a global Lua function by name with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the function doesn't exist or execution fails.
    pub fn call_function<A, R>(&self, name: &str, args: A) -> LuaResult<R>
    where
        A: IntoLuaMulti,
        R: FromLuaMulti,
    {
        let func: LuaFunction = self.lua.globals().get(name)?;
        func.call(args)
    }

    /// Checks if a global function exists.
    pub fn has_function(&self, name: &str) -> bool {
        self.lua.globals().get::<LuaFunction>(name).is_ok()
    }

    /// Returns a reference to the underlying Lua state.
    pub fn lua(&self) -> &Lua {
        &self.lua
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_commands_are_queued_in_order() {
        let rt = LuaRuntime::new().unwrap();
        rt.run_source(
            "test",
            r#"
            engine.set_camera_bounds_next_map(5, 10, 2, 8)
            engine.set_camera_bounds("", "14", nil, 3.7)
            "#,
        )
        .unwrap();
        let cmds = rt.drain_map_commands();
        assert_eq!(
            cmds,
            vec![
                MapCmd::SetCameraBoundsNextMap {
                    bounds: PartialBounds::new(Some(5), Some(10), Some(2), Some(8)),
                },
                MapCmd::SetCameraBounds {
                    bounds: PartialBounds::new(None, Some(14), None, Some(3)),
                },
            ]
        );
        assert!(rt.drain_map_commands().is_empty());
    }

    #[test]
    fn test_missing_bounds_args_are_unset() {
        let rt = LuaRuntime::new().unwrap();
        rt.run_source("test", "engine.set_camera_bounds_next_map(1)").unwrap();
        assert_eq!(
            rt.drain_map_commands(),
            vec![MapCmd::SetCameraBoundsNextMap {
                bounds: PartialBounds::new(Some(1), None, None, None),
            }]
        );
    }

    #[test]
    fn test_map_commands() {
        let rt = LuaRuntime::new().unwrap();
        rt.run_source(
            "test",
            r#"
            engine.transfer(3, 7, 5)
            engine.transfer(4)
            engine.scroll("up", 1.5)
            engine.scroll(6, 2)
            engine.set_display_pos(0, 0)
            engine.save_game("slot.json")
            engine.load_game()
            "#,
        )
        .unwrap();
        assert_eq!(
            rt.drain_map_commands(),
            vec![
                MapCmd::Transfer { map_id: 3, x: 7.0, y: 5.0 },
                MapCmd::Transfer { map_id: 4, x: 0.0, y: 0.0 },
                MapCmd::Scroll { direction: ScrollDirection::Up, distance: 1.5 },
                MapCmd::Scroll { direction: ScrollDirection::Right, distance: 2.0 },
                MapCmd::SetDisplayPos { x: 0.0, y: 0.0 },
                MapCmd::SaveGame { path: Some("slot.json".to_string()) },
                MapCmd::LoadGame { path: None },
            ]
        );
    }

    #[test]
    fn test_unknown_scroll_direction_errors() {
        let rt = LuaRuntime::new().unwrap();
        assert!(rt.run_source("test", r#"engine.scroll("sideways", 1)"#).is_err());
        assert!(rt.drain_map_commands().is_empty());
    }

    #[test]
    fn test_get_camera_reads_cache() {
        let rt = LuaRuntime::new().unwrap();
        rt.update_camera_cache(CameraSnapshot {
            map_id: 2,
            display_x: 3.5,
            ..CameraSnapshot::default()
        });
        rt.run_source(
            "test",
            r#"
            local cam = engine.get_camera()
            camera_map = cam.map_id
            camera_x = cam.display_x
            "#,
        )
        .unwrap();
        let map_id: u32 = rt.lua().globals().get("camera_map").unwrap();
        let display_x: f32 = rt.lua().globals().get("camera_x").unwrap();
        assert_eq!(map_id, 2);
        assert_eq!(display_x, 3.5);
    }

    #[test]
    fn test_call_function() {
        let rt = LuaRuntime::new().unwrap();
        rt.run_source("test", "function double(x) return x * 2 end").unwrap();
        assert!(rt.has_function("double"));
        assert!(!rt.has_function("triple"));
        let result: i32 = rt.call_function("double", 21).unwrap();
        assert_eq!(result, 42);
    }
}
