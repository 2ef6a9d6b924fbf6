//! Read-only view of the camera state.
//!
//! Handed to scripts through `engine.get_camera()` and printed by the runner
//! once all frames have run.

use crate::resources::boundsrect::BoundsRect;
use crate::resources::camerabounds::CameraBounds;
use crate::resources::gamemap::GameMap;
use crate::resources::nextmapbounds::NextMapBounds;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CameraSnapshot {
    pub map_id: u32,
    pub width: u32,
    pub height: u32,
    pub display_x: f32,
    pub display_y: f32,
    pub parallax_x: f32,
    pub parallax_y: f32,
    /// Bounds of the current map, absent when it has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundsRect>,
    /// Whether next-map bounds are waiting for a map load.
    pub next_map_pending: bool,
}

impl CameraSnapshot {
    pub fn capture(
        game_map: &GameMap,
        camera_bounds: &CameraBounds,
        next_map_bounds: &NextMapBounds,
    ) -> Self {
        CameraSnapshot {
            map_id: game_map.map_id,
            width: game_map.width,
            height: game_map.height,
            display_x: game_map.display_x,
            display_y: game_map.display_y,
            parallax_x: game_map.parallax_x,
            parallax_y: game_map.parallax_y,
            bounds: camera_bounds.get(game_map.map_id),
            next_map_pending: next_map_bounds.is_pending(),
        }
    }
}
