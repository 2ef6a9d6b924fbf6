//! Current map and camera position.
//!
//! [`GameMap`] tracks which map is loaded, its size and wrap settings, and
//! where the camera is: the display offset (top-left visible tile) and the
//! parallax offset that drives the background layer. Offsets are in tile
//! units and may be fractional.
//!
//! Camera placement is done through [`crate::systems::scroll::MapScroll`]
//! implementations, not by writing the offsets directly.

use crate::resources::mapstore::{MapData, ScrollType};
use crate::resources::screensize::ScreenSize;
use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// The loaded map and its camera offsets.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct GameMap {
    /// Loaded map id, `0` when no map is loaded.
    pub map_id: u32,
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    pub scroll_type: ScrollType,
    pub parallax_loop_x: bool,
    pub parallax_loop_y: bool,
    pub display_x: f32,
    pub display_y: f32,
    pub parallax_x: f32,
    pub parallax_y: f32,
    /// Tiles visible horizontally.
    pub screen_tile_x: f32,
    /// Tiles visible vertically.
    pub screen_tile_y: f32,
}

impl GameMap {
    /// Empty map sized for `screen`.
    pub fn new(screen: &ScreenSize) -> Self {
        GameMap {
            map_id: 0,
            width: 0,
            height: 0,
            scroll_type: ScrollType::None,
            parallax_loop_x: false,
            parallax_loop_y: false,
            display_x: 0.0,
            display_y: 0.0,
            parallax_x: 0.0,
            parallax_y: 0.0,
            screen_tile_x: screen.tiles_x(),
            screen_tile_y: screen.tiles_y(),
        }
    }

    /// Switch to `data`, resetting display and parallax offsets to zero.
    pub fn setup(&mut self, data: &MapData) {
        self.map_id = data.id;
        self.width = data.width;
        self.height = data.height;
        self.scroll_type = data.scroll_type;
        self.parallax_loop_x = data.parallax_loop_x;
        self.parallax_loop_y = data.parallax_loop_y;
        self.display_x = 0.0;
        self.display_y = 0.0;
        self.parallax_x = 0.0;
        self.parallax_y = 0.0;
    }

    /// Back to "no map": id 0, zero size, offsets at zero.
    pub fn unload(&mut self) {
        self.map_id = 0;
        self.width = 0;
        self.height = 0;
        self.scroll_type = ScrollType::None;
        self.parallax_loop_x = false;
        self.parallax_loop_y = false;
        self.display_x = 0.0;
        self.display_y = 0.0;
        self.parallax_x = 0.0;
        self.parallax_y = 0.0;
    }

    pub fn is_loop_horizontal(&self) -> bool {
        self.scroll_type.loops_horizontally()
    }

    pub fn is_loop_vertical(&self) -> bool {
        self.scroll_type.loops_vertically()
    }

    /// Horizontal scroll room over the full map; negative when the map is
    /// narrower than the screen.
    pub fn end_x(&self) -> f32 {
        self.width as f32 - self.screen_tile_x
    }

    /// Vertical scroll room over the full map; negative when the map is
    /// shorter than the screen.
    pub fn end_y(&self) -> f32 {
        self.height as f32 - self.screen_tile_y
    }

    /// Camera X offset that centers tile column `x` on screen.
    pub fn center_x(&self) -> f32 {
        (self.screen_tile_x - 1.0) / 2.0
    }

    /// Camera Y offset that centers tile row `y` on screen.
    pub fn center_y(&self) -> f32 {
        (self.screen_tile_y - 1.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenSize {
        ScreenSize {
            w: 816,
            h: 624,
            tile_size: 48,
        }
    }

    #[test]
    fn test_new_is_empty() {
        let map = GameMap::new(&screen());
        assert_eq!(map.map_id, 0);
        assert_eq!(map.screen_tile_x, 17.0);
        assert_eq!(map.screen_tile_y, 13.0);
    }

    #[test]
    fn test_setup_resets_offsets() {
        let mut map = GameMap::new(&screen());
        map.display_x = 4.0;
        map.parallax_y = 9.0;
        let data = MapData::new(5, 40, 30)
            .with_scroll_type(ScrollType::LoopVertical)
            .with_parallax_loop(false, true);
        map.setup(&data);
        assert_eq!(map.map_id, 5);
        assert_eq!(map.display_x, 0.0);
        assert_eq!(map.parallax_y, 0.0);
        assert!(map.is_loop_vertical());
        assert!(!map.is_loop_horizontal());
        assert!(map.parallax_loop_y);
    }

    #[test]
    fn test_end_and_center() {
        let mut map = GameMap::new(&screen());
        map.setup(&MapData::new(1, 10, 30));
        assert_eq!(map.end_x(), -7.0);
        assert_eq!(map.end_y(), 17.0);
        assert_eq!(map.center_x(), 8.0);
        assert_eq!(map.center_y(), 6.0);
    }

    #[test]
    fn test_unload() {
        let mut map = GameMap::new(&screen());
        map.setup(&MapData::new(3, 40, 30).with_scroll_type(ScrollType::LoopBoth));
        map.display_x = 6.0;
        map.parallax_y = 2.0;
        map.unload();
        assert_eq!(map.map_id, 0);
        assert_eq!(map.width, 0);
        assert_eq!(map.scroll_type, ScrollType::None);
        assert_eq!(map.display_x, 0.0);
        assert_eq!(map.parallax_y, 0.0);
        assert_eq!(map.screen_tile_x, 17.0);
    }
}
