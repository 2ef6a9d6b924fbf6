//! Camera bounds authoring events and observers.
//!
//! - [`SetCameraBoundsEvent`] updates the supplied fields of the current
//!   map's bounds right away.
//! - [`SetCameraBoundsNextMapEvent`] stores bounds for whichever map loads
//!   next, replacing any earlier unconsumed request.
use crate::resources::boundsrect::PartialBounds;
use crate::resources::camerabounds::CameraBounds;
use crate::resources::gamemap::GameMap;
use crate::resources::nextmapbounds::NextMapBounds;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

/// Change the camera bounds of the current map. Unset fields keep their
/// current value.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetCameraBoundsEvent {
    pub bounds: PartialBounds,
}

/// Set the camera bounds of the next map to load. Unset fields take that
/// map's full extent.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetCameraBoundsNextMapEvent {
    pub bounds: PartialBounds,
}

/// Observer that updates the current map's bounds in place.
///
/// Each updated field is clamped on its own. The current map must already
/// have bounds (created when it loaded); otherwise the request is dropped.
pub fn observe_set_camera_bounds(
    trigger: On<SetCameraBoundsEvent>,
    game_map: Res<GameMap>,
    mut camera_bounds: ResMut<CameraBounds>,
) {
    let bounds = trigger.event().bounds;
    if camera_bounds.update(game_map.map_id, &bounds, game_map.width, game_map.height) {
        info!(
            "Camera bounds for map {} now {:?}",
            game_map.map_id,
            camera_bounds.get(game_map.map_id)
        );
    } else {
        warn!(
            "SetCameraBounds ignored: map {} has no camera bounds yet",
            game_map.map_id
        );
    }
}

/// Observer that stores the pending next-map bounds.
pub fn observe_set_camera_bounds_next_map(
    trigger: On<SetCameraBoundsNextMapEvent>,
    mut next_map_bounds: ResMut<NextMapBounds>,
) {
    let bounds = trigger.event().bounds;
    if next_map_bounds.is_pending() {
        info!("Replacing unconsumed next-map camera bounds");
    }
    next_map_bounds.set(bounds);
    info!("Next map camera bounds set to {:?}", bounds);
}
