//! Command enum for Lua-Rust communication.
//!
//! Lua scripts queue [`MapCmd`] values; they are applied by
//! [`crate::systems::lua_commands`] after the Lua callback returns, in the
//! order they were issued.

use crate::resources::boundsrect::PartialBounds;
use crate::systems::scroll::ScrollDirection;

/// Commands that Lua can queue against the map and camera.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCmd {
    /// Update the supplied fields of the current map's camera bounds
    SetCameraBounds { bounds: PartialBounds },
    /// Set camera bounds for the next map to load
    SetCameraBoundsNextMap { bounds: PartialBounds },
    /// Load a map and center the camera on a tile
    Transfer { map_id: u32, x: f32, y: f32 },
    /// Scroll the camera
    Scroll {
        direction: ScrollDirection,
        distance: f32,
    },
    /// Place the camera's top-left corner
    SetDisplayPos { x: f32, y: f32 },
    /// Write a save file (configured path when `None`)
    SaveGame { path: Option<String> },
    /// Read a save file (configured path when `None`)
    LoadGame { path: Option<String> },
}
