//! Screen size resource.
//!
//! Stores the game screen dimensions in pixels and the map tile size, which
//! together give the number of tiles visible on each axis.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
    /// Tile edge in pixels.
    pub tile_size: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        ScreenSize {
            w: 816,
            h: 624,
            tile_size: 48,
        }
    }
}

impl ScreenSize {
    /// Visible tiles horizontally. May be fractional.
    pub fn tiles_x(&self) -> f32 {
        self.w as f32 / self.tile_size.max(1) as f32
    }

    /// Visible tiles vertically. May be fractional.
    pub fn tiles_y(&self) -> f32 {
        self.h as f32 / self.tile_size.max(1) as f32
    }
}
