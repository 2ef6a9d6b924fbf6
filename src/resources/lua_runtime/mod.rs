//! Lua scripting runtime.
//!
//! Exposes the camera bounds commands and map/camera controls through the
//! global `engine` table in Lua scripts.
//!
//! - [`commands`] - Command enum for Lua-Rust communication
//! - [`runtime`] - Core Lua runtime implementation and `engine` table API
//!
//! # Example
//!
//! ```lua
//! engine.log("Entering the harbor")
//! -- minX, maxX, minY, maxY; nil or "" leaves a field unspecified
//! engine.set_camera_bounds_next_map(5, 10, 2, 8)
//! engine.transfer(3, 7, 5)
//! engine.set_camera_bounds(nil, 14, "", "")
//! engine.scroll("right", 2.5)
//! engine.save_game()
//! ```

mod commands;
mod runtime;

pub use commands::*;
pub use runtime::LuaRuntime;
