//! Camera placement and scrolling.
//!
//! [`MapScroll`] is the set of operations that move the camera over a
//! [`GameMap`]. Two implementations are provided:
//!
//! - [`HostScroll`] – unbounded behavior: non-looping axes are held to the
//!   map edges, looping axes wrap.
//! - [`BoundedScroll`] – non-looping axes are held to a [`BoundsRect`];
//!   looping axes are handed to [`HostScroll`] unchanged.
//!
//! [`scroll_for`] picks the right one for the current map.
//!
//! On non-looping axes the parallax offset follows the display offset: it
//! mirrors it on absolute placement and moves by the applied delta on scrolls.

use crate::resources::boundsrect::BoundsRect;
use crate::resources::camerabounds::CameraBounds;
use crate::resources::gamemap::GameMap;
use log::warn;

/// Direction of a relative scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    /// Parse `"up"`, `"down"`, `"left"`, `"right"` (any case) or the numpad
    /// codes `"8"`, `"2"`, `"4"`, `"6"`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "up" | "8" => Some(ScrollDirection::Up),
            "down" | "2" => Some(ScrollDirection::Down),
            "left" | "4" => Some(ScrollDirection::Left),
            "right" | "6" => Some(ScrollDirection::Right),
            _ => None,
        }
    }
}

/// Camera placement operations on a map.
pub trait MapScroll {
    /// Place the camera's top-left corner at `(x, y)`.
    fn set_display_pos(&self, map: &mut GameMap, x: f32, y: f32);
    fn scroll_down(&self, map: &mut GameMap, distance: f32);
    fn scroll_left(&self, map: &mut GameMap, distance: f32);
    fn scroll_right(&self, map: &mut GameMap, distance: f32);
    fn scroll_up(&self, map: &mut GameMap, distance: f32);

    fn scroll(&self, map: &mut GameMap, direction: ScrollDirection, distance: f32) {
        match direction {
            ScrollDirection::Up => self.scroll_up(map, distance),
            ScrollDirection::Down => self.scroll_down(map, distance),
            ScrollDirection::Left => self.scroll_left(map, distance),
            ScrollDirection::Right => self.scroll_right(map, distance),
        }
    }

    /// Place the camera so tile `(x, y)` sits at the screen center.
    fn center_on(&self, map: &mut GameMap, x: f32, y: f32) {
        let display_x = x - map.center_x();
        let display_y = y - map.center_y();
        self.set_display_pos(map, display_x, display_y);
    }
}

/// Clamp where `max` wins over `min` when the window is inverted.
///
/// Bound windows narrower than the screen produce `min > max`; the camera
/// then sits at `max`.
pub fn clamp_window(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Wrap `value` into `[0, extent)`.
fn wrap(value: f32, extent: u32) -> f32 {
    if extent == 0 {
        return 0.0;
    }
    value.rem_euclid(extent as f32)
}

/// Unbounded camera behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostScroll;

impl HostScroll {
    fn place_x(map: &mut GameMap, x: f32) {
        if map.is_loop_horizontal() {
            map.display_x = wrap(x, map.width);
            map.parallax_x = x;
        } else {
            let end_x = map.end_x();
            map.display_x = if end_x < 0.0 {
                end_x / 2.0
            } else {
                clamp_window(x, 0.0, end_x)
            };
            map.parallax_x = map.display_x;
        }
    }

    fn place_y(map: &mut GameMap, y: f32) {
        if map.is_loop_vertical() {
            map.display_y = wrap(y, map.height);
            map.parallax_y = y;
        } else {
            let end_y = map.end_y();
            map.display_y = if end_y < 0.0 {
                end_y / 2.0
            } else {
                clamp_window(y, 0.0, end_y)
            };
            map.parallax_y = map.display_y;
        }
    }
}

impl MapScroll for HostScroll {
    fn set_display_pos(&self, map: &mut GameMap, x: f32, y: f32) {
        Self::place_x(map, x);
        Self::place_y(map, y);
    }

    fn scroll_down(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_vertical() {
            map.display_y = wrap(map.display_y + distance, map.height);
            if map.parallax_loop_y {
                map.parallax_y += distance;
            }
        } else if map.height as f32 >= map.screen_tile_y {
            let last_y = map.display_y;
            map.display_y = (map.display_y + distance).min(map.end_y());
            map.parallax_y += map.display_y - last_y;
        }
    }

    fn scroll_left(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_horizontal() {
            map.display_x = wrap(map.display_x - distance, map.width);
            if map.parallax_loop_x {
                map.parallax_x -= distance;
            }
        } else if map.width as f32 >= map.screen_tile_x {
            let last_x = map.display_x;
            map.display_x = (map.display_x - distance).max(0.0);
            map.parallax_x += map.display_x - last_x;
        }
    }

    fn scroll_right(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_horizontal() {
            map.display_x = wrap(map.display_x + distance, map.width);
            if map.parallax_loop_x {
                map.parallax_x += distance;
            }
        } else if map.width as f32 >= map.screen_tile_x {
            let last_x = map.display_x;
            map.display_x = (map.display_x + distance).min(map.end_x());
            map.parallax_x += map.display_x - last_x;
        }
    }

    fn scroll_up(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_vertical() {
            map.display_y = wrap(map.display_y - distance, map.height);
            if map.parallax_loop_y {
                map.parallax_y -= distance;
            }
        } else if map.height as f32 >= map.screen_tile_y {
            let last_y = map.display_y;
            map.display_y = (map.display_y - distance).max(0.0);
            map.parallax_y += map.display_y - last_y;
        }
    }
}

/// Camera behavior held to a bounds rectangle on non-looping axes.
#[derive(Debug, Clone, Copy)]
pub struct BoundedScroll {
    pub bounds: BoundsRect,
}

impl BoundedScroll {
    pub fn new(bounds: BoundsRect) -> Self {
        BoundedScroll { bounds }
    }

    /// Lowest allowed display X.
    pub fn min_display_x(&self) -> f32 {
        self.bounds.min_x as f32
    }

    /// Highest allowed display X: the last bound column at the right screen edge.
    pub fn max_display_x(&self, map: &GameMap) -> f32 {
        self.bounds.max_x as f32 + 1.0 - map.screen_tile_x
    }

    /// Lowest allowed display Y.
    pub fn min_display_y(&self) -> f32 {
        self.bounds.min_y as f32
    }

    /// Highest allowed display Y: the last bound row at the bottom screen edge.
    pub fn max_display_y(&self, map: &GameMap) -> f32 {
        self.bounds.max_y as f32 + 1.0 - map.screen_tile_y
    }
}

impl MapScroll for BoundedScroll {
    fn set_display_pos(&self, map: &mut GameMap, x: f32, y: f32) {
        if map.is_loop_horizontal() {
            HostScroll::place_x(map, x);
        } else {
            let end_x = map.end_x();
            map.display_x = if end_x < 0.0 {
                end_x / 2.0
            } else {
                clamp_window(x, self.min_display_x(), self.max_display_x(map))
            };
            map.parallax_x = map.display_x;
        }
        if map.is_loop_vertical() {
            HostScroll::place_y(map, y);
        } else {
            let end_y = map.end_y();
            map.display_y = if end_y < 0.0 {
                end_y / 2.0
            } else {
                clamp_window(y, self.min_display_y(), self.max_display_y(map))
            };
            map.parallax_y = map.display_y;
        }
    }

    fn scroll_down(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_vertical() {
            HostScroll.scroll_down(map, distance);
        } else if map.height as f32 >= map.screen_tile_y {
            let last_y = map.display_y;
            map.display_y = (map.display_y + distance).min(self.max_display_y(map));
            map.parallax_y += map.display_y - last_y;
        }
    }

    fn scroll_left(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_horizontal() {
            HostScroll.scroll_left(map, distance);
        } else if map.width as f32 >= map.screen_tile_x {
            let last_x = map.display_x;
            map.display_x = (map.display_x - distance).max(self.min_display_x());
            map.parallax_x += map.display_x - last_x;
        }
    }

    fn scroll_right(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_horizontal() {
            HostScroll.scroll_right(map, distance);
        } else if map.width as f32 >= map.screen_tile_x {
            let last_x = map.display_x;
            map.display_x = (map.display_x + distance).min(self.max_display_x(map));
            map.parallax_x += map.display_x - last_x;
        }
    }

    fn scroll_up(&self, map: &mut GameMap, distance: f32) {
        if map.is_loop_vertical() {
            HostScroll.scroll_up(map, distance);
        } else if map.height as f32 >= map.screen_tile_y {
            let last_y = map.display_y;
            map.display_y = (map.display_y - distance).max(self.min_display_y());
            map.parallax_y += map.display_y - last_y;
        }
    }
}

/// Camera behavior for the current map.
///
/// Uses the map's registry entry when there is one and falls back to the
/// unbounded behavior otherwise (e.g. after loading a save that predates
/// camera bounds).
pub fn scroll_for(map: &GameMap, camera_bounds: &CameraBounds) -> Box<dyn MapScroll> {
    match camera_bounds.get(map.map_id) {
        Some(bounds) => Box::new(BoundedScroll::new(bounds)),
        None => {
            if map.map_id != 0 {
                warn!("No camera bounds for map {}, using map edges", map.map_id);
            }
            Box::new(HostScroll)
        }
    }
}
