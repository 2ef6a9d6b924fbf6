//! World setup shared by the runner binary and the integration tests.
//!
//! [`init_world`] inserts every resource the observers need and registers the
//! observers themselves. With the `lua` feature, [`build_update_schedule`]
//! returns the per-frame schedule that feeds script commands into the world.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::camerabounds::{
    observe_set_camera_bounds, observe_set_camera_bounds_next_map,
};
use crate::events::mapsetup::observe_map_setup_event;
use crate::events::savegame::{observe_load_game_event, observe_save_game_event};
use crate::events::scroll::{observe_scroll_map_event, observe_set_display_pos_event};
use crate::resources::camerabounds::CameraBounds;
use crate::resources::camerasnapshot::CameraSnapshot;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamemap::GameMap;
use crate::resources::mapstore::MapStore;
use crate::resources::nextmapbounds::NextMapBounds;

/// Register all observers on `world`.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(observe_map_setup_event));
    world.spawn(Observer::new(observe_set_camera_bounds));
    world.spawn(Observer::new(observe_set_camera_bounds_next_map));
    world.spawn(Observer::new(observe_scroll_map_event));
    world.spawn(Observer::new(observe_set_display_pos_event));
    world.spawn(Observer::new(observe_save_game_event));
    world.spawn(Observer::new(observe_load_game_event));
    // Ensure the observers are registered before anything triggers events.
    world.flush();
}

/// Build a world with an empty camera bounds registry and no map loaded.
pub fn init_world(config: GameConfig, map_store: MapStore) -> World {
    let mut world = World::new();
    let screen = config.screen_size();
    info!(
        "Screen {}x{} px, {}x{} tiles, {} maps available",
        screen.w,
        screen.h,
        screen.tiles_x(),
        screen.tiles_y(),
        map_store.len()
    );
    world.insert_resource(GameMap::new(&screen));
    world.insert_resource(screen);
    world.insert_resource(config);
    world.insert_resource(map_store);
    world.insert_resource(CameraBounds::new());
    world.insert_resource(NextMapBounds::new());
    register_observers(&mut world);
    world
}

/// Current camera state of `world`.
pub fn snapshot(world: &World) -> CameraSnapshot {
    CameraSnapshot::capture(
        world.resource::<GameMap>(),
        world.resource::<CameraBounds>(),
        world.resource::<NextMapBounds>(),
    )
}

/// Per-frame schedule: refresh the script's camera view, call `on_update`,
/// then apply the queued commands in order.
#[cfg(feature = "lua")]
pub fn build_update_schedule() -> Schedule {
    use crate::systems::lua_commands::{
        lua_map_commands_system, lua_on_update_system, update_lua_camera_cache,
    };

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_lua_camera_cache,
            lua_on_update_system,
            lua_map_commands_system,
        )
            .chain(),
    );
    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::mapsetup::MapSetupEvent;
    use crate::resources::boundsrect::BoundsRect;
    use crate::resources::mapstore::MapData;

    #[test]
    fn test_init_world_transfer() {
        let mut store = MapStore::new();
        store.insert(MapData::new(1, 40, 30).with_note("<minX:2>"));
        let mut world = init_world(GameConfig::new(), store);

        world.trigger(MapSetupEvent {
            map_id: 1,
            x: 0.0,
            y: 0.0,
        });
        let snap = snapshot(&world);
        assert_eq!(snap.map_id, 1);
        assert_eq!(snap.bounds, Some(BoundsRect::new(2, 39, 0, 29)));
        assert_eq!(snap.display_x, 2.0);
    }
}
