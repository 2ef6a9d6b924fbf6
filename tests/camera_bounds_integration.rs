//! Camera bounds integration tests: observers driven through a real world.

use bevy_ecs::prelude::*;

use boundcamera::events::camerabounds::{SetCameraBoundsEvent, SetCameraBoundsNextMapEvent};
use boundcamera::events::mapsetup::MapSetupEvent;
use boundcamera::events::savegame::{LoadGameEvent, SaveGameEvent};
use boundcamera::events::scroll::{ScrollMapEvent, SetDisplayPosEvent};
use boundcamera::game::{init_world, snapshot};
use boundcamera::resources::boundsrect::{BoundsRect, PartialBounds};
use boundcamera::resources::camerabounds::CameraBounds;
use boundcamera::resources::gameconfig::GameConfig;
use boundcamera::resources::gamemap::GameMap;
use boundcamera::resources::mapstore::{MapData, MapStore, ScrollType};
use boundcamera::resources::nextmapbounds::NextMapBounds;
use boundcamera::systems::scroll::ScrollDirection;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Default screen is 17x13 tiles.
fn make_world() -> World {
    let mut store = MapStore::new();
    store.insert(MapData::new(1, 40, 30));
    store.insert(MapData::new(2, 40, 30));
    store.insert(MapData::new(3, 20, 20).with_note("<minX:4><maxY:abc>"));
    store.insert(
        MapData::new(4, 40, 30)
            .with_scroll_type(ScrollType::LoopHorizontal)
            .with_note("<minX:10>"),
    );
    store.insert(MapData::new(5, 10, 8).with_note("<minX:3>"));
    init_world(GameConfig::new(), store)
}

fn transfer(world: &mut World, map_id: u32, x: f32, y: f32) {
    world.trigger(MapSetupEvent { map_id, x, y });
}

fn bounds_of(world: &World, map_id: u32) -> Option<BoundsRect> {
    world.resource::<CameraBounds>().get(map_id)
}

fn partial(min_x: Option<i32>, max_x: Option<i32>, min_y: Option<i32>, max_y: Option<i32>) -> PartialBounds {
    PartialBounds::new(min_x, max_x, min_y, max_y)
}

#[test]
fn next_map_bounds_apply_once() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(5), Some(30), Some(2), Some(20)),
    });
    assert!(world.resource::<NextMapBounds>().is_pending());

    transfer(&mut world, 1, 0.0, 0.0);
    assert_eq!(bounds_of(&world, 1), Some(BoundsRect::new(5, 30, 2, 20)));
    assert!(!world.resource::<NextMapBounds>().is_pending());

    transfer(&mut world, 2, 0.0, 0.0);
    assert_eq!(bounds_of(&world, 2), Some(BoundsRect::full_extent(40, 30)));
}

#[test]
fn next_map_bounds_unset_fields_take_full_extent() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(None, Some(12), None, None),
    });
    transfer(&mut world, 3, 0.0, 0.0);
    // The map note is not consulted when an override is pending.
    assert_eq!(bounds_of(&world, 3), Some(BoundsRect::new(0, 12, 0, 19)));
}

#[test]
fn later_next_map_request_replaces_earlier() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(1), None, None, None),
    });
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(None, None, Some(3), None),
    });
    transfer(&mut world, 1, 0.0, 0.0);
    assert_eq!(bounds_of(&world, 1), Some(BoundsRect::new(0, 39, 3, 29)));
}

#[test]
fn transfer_to_unknown_map_keeps_pending_bounds() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(2), None, None, None),
    });
    transfer(&mut world, 99, 0.0, 0.0);
    assert!(world.resource::<NextMapBounds>().is_pending());
    assert_eq!(world.resource::<GameMap>().map_id, 0);
}

#[test]
fn arrival_is_clamped_to_bounds() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(5), Some(30), Some(2), Some(20)),
    });
    transfer(&mut world, 1, 0.0, 0.0);
    let snap = snapshot(&world);
    assert!(approx_eq(snap.display_x, 5.0));
    assert!(approx_eq(snap.display_y, 2.0));
}

#[test]
fn display_position_stays_in_window() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(5), Some(30), Some(2), Some(20)),
    });
    transfer(&mut world, 1, 0.0, 0.0);

    world.trigger(SetDisplayPosEvent { x: 100.0, y: 100.0 });
    let map = world.resource::<GameMap>();
    // max display = max + 1 - screen tiles
    assert!(approx_eq(map.display_x, 14.0));
    assert!(approx_eq(map.display_y, 8.0));

    world.trigger(SetDisplayPosEvent { x: -3.0, y: 4.5 });
    let map = world.resource::<GameMap>();
    assert!(approx_eq(map.display_x, 5.0));
    assert!(approx_eq(map.display_y, 4.5));
    assert!(approx_eq(map.parallax_x, 5.0));
}

#[test]
fn parallax_follows_applied_scroll_delta() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(5), Some(30), Some(2), Some(20)),
    });
    transfer(&mut world, 1, 0.0, 0.0);

    world.trigger(ScrollMapEvent {
        direction: ScrollDirection::Left,
        distance: 3.0,
    });
    let map = world.resource::<GameMap>();
    assert!(approx_eq(map.display_x, 5.0));
    assert!(approx_eq(map.parallax_x, 5.0));

    world.trigger(ScrollMapEvent {
        direction: ScrollDirection::Right,
        distance: 20.0,
    });
    let map = world.resource::<GameMap>();
    assert!(approx_eq(map.display_x, 14.0));
    assert!(approx_eq(map.parallax_x, 14.0));

    world.trigger(ScrollMapEvent {
        direction: ScrollDirection::Down,
        distance: 2.5,
    });
    let map = world.resource::<GameMap>();
    assert!(approx_eq(map.display_y, 4.5));
    assert!(approx_eq(map.parallax_y, 4.5));
}

#[test]
fn defaults_come_from_map_note() {
    let mut world = make_world();
    transfer(&mut world, 3, 0.0, 0.0);
    // Non-numeric maxY falls back to the last row.
    assert_eq!(bounds_of(&world, 3), Some(BoundsRect::new(4, 19, 0, 19)));
}

#[test]
fn reentering_a_map_keeps_edited_bounds() {
    let mut world = make_world();
    transfer(&mut world, 1, 0.0, 0.0);
    world.trigger(SetCameraBoundsEvent {
        bounds: partial(None, Some(50), None, Some(-4)),
    });
    assert_eq!(bounds_of(&world, 1), Some(BoundsRect::new(0, 39, 0, 0)));

    transfer(&mut world, 2, 0.0, 0.0);
    transfer(&mut world, 1, 0.0, 0.0);
    assert_eq!(bounds_of(&world, 1), Some(BoundsRect::new(0, 39, 0, 0)));
    assert_eq!(world.resource::<CameraBounds>().len(), 2);
}

#[test]
fn set_camera_bounds_without_entry_is_ignored() {
    let mut world = make_world();
    world.trigger(SetCameraBoundsEvent {
        bounds: partial(Some(1), Some(2), Some(1), Some(2)),
    });
    assert!(world.resource::<CameraBounds>().is_empty());
}

#[test]
fn looping_axis_ignores_bounds() {
    let mut world = make_world();
    transfer(&mut world, 4, 0.0, 0.0);
    assert_eq!(bounds_of(&world, 4), Some(BoundsRect::new(10, 39, 0, 29)));

    world.trigger(SetDisplayPosEvent { x: 2.0, y: 0.0 });
    let map = world.resource::<GameMap>();
    assert!(approx_eq(map.display_x, 2.0));
}

#[test]
fn map_smaller_than_screen_is_centered() {
    let mut world = make_world();
    transfer(&mut world, 5, 4.0, 4.0);
    let map = world.resource::<GameMap>();
    // (10 - 17) / 2 and (8 - 13) / 2
    assert!(approx_eq(map.display_x, -3.5));
    assert!(approx_eq(map.display_y, -2.5));
}

#[test]
fn save_and_load_restore_registry() {
    let path = std::env::temp_dir().join(format!(
        "boundcamera_integration_{}.json",
        std::process::id()
    ));
    let mut world = make_world();
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(5), Some(30), Some(2), Some(20)),
    });
    transfer(&mut world, 1, 0.0, 0.0);
    world.trigger(SetDisplayPosEvent { x: 7.0, y: 3.0 });
    world.trigger(SaveGameEvent {
        path: Some(path.clone()),
    });

    transfer(&mut world, 3, 0.0, 0.0);
    world.trigger(SetCameraBoundsEvent {
        bounds: partial(Some(1), None, None, None),
    });
    world.trigger(SetCameraBoundsNextMapEvent {
        bounds: partial(Some(9), None, None, None),
    });

    world.trigger(LoadGameEvent {
        path: Some(path.clone()),
    });
    std::fs::remove_file(&path).unwrap();

    let registry = world.resource::<CameraBounds>();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(1), Some(BoundsRect::new(5, 30, 2, 20)));
    assert!(!world.resource::<NextMapBounds>().is_pending());

    let map = world.resource::<GameMap>();
    assert_eq!(map.map_id, 1);
    assert!(approx_eq(map.display_x, 7.0));
    assert!(approx_eq(map.display_y, 3.0));
}

#[test]
fn load_of_save_without_registry_starts_empty() {
    let path = std::env::temp_dir().join(format!(
        "boundcamera_old_save_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{"mapId": 3, "displayX": 1.0, "displayY": 0.0}"#).unwrap();

    let mut world = make_world();
    transfer(&mut world, 1, 0.0, 0.0);
    world.trigger(LoadGameEvent {
        path: Some(path.clone()),
    });
    std::fs::remove_file(&path).unwrap();

    assert!(world.resource::<CameraBounds>().is_empty());
    assert_eq!(world.resource::<GameMap>().map_id, 3);

    // The loaded map gets its defaults on the next load.
    transfer(&mut world, 3, 0.0, 0.0);
    assert_eq!(bounds_of(&world, 3), Some(BoundsRect::new(4, 19, 0, 19)));
}

#[test]
fn save_with_extreme_bounds_places_camera() {
    let path = std::env::temp_dir().join(format!(
        "boundcamera_extreme_{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{"mapId": 1, "cameraBounds": {"1": {"minX": 0, "maxX": 2147483647, "minY": 0, "maxY": 2147483647}}}"#,
    )
    .unwrap();

    let mut world = make_world();
    world.trigger(LoadGameEvent {
        path: Some(path.clone()),
    });
    std::fs::remove_file(&path).unwrap();

    world.trigger(SetDisplayPosEvent { x: 100.0, y: 3.0 });
    world.trigger(ScrollMapEvent {
        direction: ScrollDirection::Down,
        distance: 2.0,
    });
    let map = world.resource::<GameMap>();
    assert_eq!(map.map_id, 1);
    assert!(approx_eq(map.display_x, 100.0));
    assert!(approx_eq(map.display_y, 5.0));
}

#[test]
fn save_naming_unknown_map_leaves_no_map_loaded() {
    let path = std::env::temp_dir().join(format!(
        "boundcamera_unknown_map_{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{"mapId": 77, "displayX": 9.0, "displayY": 4.0, "cameraBounds": {}}"#,
    )
    .unwrap();

    let mut world = make_world();
    transfer(&mut world, 1, 20.0, 15.0);
    world.trigger(LoadGameEvent {
        path: Some(path.clone()),
    });
    std::fs::remove_file(&path).unwrap();

    let map = world.resource::<GameMap>();
    assert_eq!(map.map_id, 0);
    assert_eq!(map.width, 0);
    assert!(approx_eq(map.display_x, 0.0));
    assert!(approx_eq(map.display_y, 0.0));
    assert!(world.resource::<CameraBounds>().is_empty());
}
