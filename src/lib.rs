//! Per-map camera bounds for a tile-map game.
//!
//! Each map gets a rectangle of tiles the camera may show. Bounds come from
//! the map's note tags, from a script-issued request for the next map to
//! load, or from an in-place change on the current map. They are persisted
//! with save files.

pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
