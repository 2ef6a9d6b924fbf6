//! Camera placement events.
//!
//! Both events go through [`scroll_for`], so they respect the current map's
//! camera bounds on non-looping axes.
use crate::resources::camerabounds::CameraBounds;
use crate::resources::gamemap::GameMap;
use crate::systems::scroll::{ScrollDirection, scroll_for};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Scroll the camera by `distance` tiles.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScrollMapEvent {
    pub direction: ScrollDirection,
    pub distance: f32,
}

/// Place the camera's top-left corner at `(x, y)`.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetDisplayPosEvent {
    pub x: f32,
    pub y: f32,
}

pub fn observe_scroll_map_event(
    trigger: On<ScrollMapEvent>,
    mut game_map: ResMut<GameMap>,
    camera_bounds: Res<CameraBounds>,
) {
    let event = trigger.event();
    let scroll = scroll_for(&game_map, &camera_bounds);
    scroll.scroll(&mut game_map, event.direction, event.distance);
    debug!(
        "Scrolled {:?} by {}: display=({}, {}) parallax=({}, {})",
        event.direction,
        event.distance,
        game_map.display_x,
        game_map.display_y,
        game_map.parallax_x,
        game_map.parallax_y
    );
}

pub fn observe_set_display_pos_event(
    trigger: On<SetDisplayPosEvent>,
    mut game_map: ResMut<GameMap>,
    camera_bounds: Res<CameraBounds>,
) {
    let event = trigger.event();
    let scroll = scroll_for(&game_map, &camera_bounds);
    scroll.set_display_pos(&mut game_map, event.x, event.y);
    debug!(
        "Display position requested ({}, {}): display=({}, {})",
        event.x, event.y, game_map.display_x, game_map.display_y
    );
}
