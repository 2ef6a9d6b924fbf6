//! Map setup (transfer) event and observer.
//!
//! Emitting a [`MapSetupEvent`] loads a map from the [`MapStore`] into
//! [`GameMap`], resolves its camera bounds and centers the camera on the
//! arrival tile. Bounds resolution always runs before the camera is placed,
//! so the first placement on a new map is already bounded.
use crate::resources::camerabounds::CameraBounds;
use crate::resources::gamemap::GameMap;
use crate::resources::mapstore::MapStore;
use crate::resources::nextmapbounds::NextMapBounds;
use crate::systems::mapbounds::resolve_map_bounds;
use crate::systems::scroll::scroll_for;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Request to load `map_id` with the camera centered on tile `(x, y)`.
#[derive(Event, Debug, Clone, Copy)]
pub struct MapSetupEvent {
    pub map_id: u32,
    pub x: f32,
    pub y: f32,
}

/// Observer that performs a map transfer.
///
/// Unknown map ids are logged and ignored; in that case the current map and
/// any pending next-map bounds stay as they are.
pub fn observe_map_setup_event(
    trigger: On<MapSetupEvent>,
    map_store: Res<MapStore>,
    mut game_map: ResMut<GameMap>,
    mut camera_bounds: ResMut<CameraBounds>,
    mut next_map_bounds: ResMut<NextMapBounds>,
) {
    let event = trigger.event();
    let Some(data) = map_store.get(event.map_id) else {
        warn!("Transfer to unknown map {} ignored", event.map_id);
        return;
    };

    game_map.setup(data);
    let resolution = resolve_map_bounds(
        &mut camera_bounds,
        &mut next_map_bounds,
        data.id,
        data.width,
        data.height,
        &data.meta(),
    );
    debug!("Camera bounds for map {} resolved via {:?}", data.id, resolution);

    let scroll = scroll_for(&game_map, &camera_bounds);
    scroll.center_on(&mut game_map, event.x, event.y);
    info!(
        "Entered map {} at ({}, {}), display=({}, {})",
        data.id, event.x, event.y, game_map.display_x, game_map.display_y
    );
}
