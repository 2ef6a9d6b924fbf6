//! Save and load events and observers.
//!
//! Saving writes the current map position and the whole camera bounds
//! registry. Loading replaces the registry wholesale, drops any pending
//! next-map bounds and puts the camera back where it was saved.
use crate::resources::camerabounds::CameraBounds;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamemap::GameMap;
use crate::resources::mapstore::MapStore;
use crate::resources::nextmapbounds::NextMapBounds;
use crate::resources::savecontents::SaveContents;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info, warn};
use std::path::PathBuf;

/// Write a save file. `None` uses the configured save path.
#[derive(Event, Debug, Clone)]
pub struct SaveGameEvent {
    pub path: Option<PathBuf>,
}

/// Read a save file. `None` uses the configured save path.
#[derive(Event, Debug, Clone)]
pub struct LoadGameEvent {
    pub path: Option<PathBuf>,
}

pub fn observe_save_game_event(
    trigger: On<SaveGameEvent>,
    config: Res<GameConfig>,
    game_map: Res<GameMap>,
    camera_bounds: Res<CameraBounds>,
) {
    let path = trigger
        .event()
        .path
        .clone()
        .unwrap_or_else(|| config.save_path.clone());
    let contents = SaveContents::capture(&game_map, &camera_bounds);
    if let Err(e) = contents.save_to_file(&path) {
        error!("{}", e);
    }
}

pub fn observe_load_game_event(
    trigger: On<LoadGameEvent>,
    config: Res<GameConfig>,
    map_store: Res<MapStore>,
    mut game_map: ResMut<GameMap>,
    mut camera_bounds: ResMut<CameraBounds>,
    mut next_map_bounds: ResMut<NextMapBounds>,
) {
    let path = trigger
        .event()
        .path
        .clone()
        .unwrap_or_else(|| config.save_path.clone());
    match SaveContents::load_from_file(&path) {
        Ok(contents) => restore_save(
            contents,
            &map_store,
            &mut game_map,
            &mut camera_bounds,
            &mut next_map_bounds,
        ),
        Err(e) => error!("{}", e),
    }
}

/// Apply loaded save contents to the world state.
///
/// A save without a registry leaves the registry empty; each map gets its
/// bounds again the next time it loads. The saved offsets are restored as
/// they were written, without re-clamping. A save naming a map that is not
/// in the store leaves no map loaded.
pub fn restore_save(
    contents: SaveContents,
    map_store: &MapStore,
    game_map: &mut GameMap,
    camera_bounds: &mut CameraBounds,
    next_map_bounds: &mut NextMapBounds,
) {
    *camera_bounds = contents.camera_bounds.unwrap_or_default();
    next_map_bounds.reset();

    let Some(data) = map_store.get(contents.map_id) else {
        warn!(
            "Save refers to unknown map {}, no map loaded",
            contents.map_id
        );
        game_map.unload();
        return;
    };
    game_map.setup(data);
    game_map.display_x = contents.display_x;
    game_map.display_y = contents.display_y;
    game_map.parallax_x = contents.parallax_x;
    game_map.parallax_y = contents.parallax_y;

    info!(
        "Restored map {} with {} camera bounds entries",
        contents.map_id,
        camera_bounds.len()
    );
}
