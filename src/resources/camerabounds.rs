//! Per-map camera bounds registry.
//!
//! [`CameraBounds`] maps a map id to the [`BoundsRect`] the camera is held to
//! on that map. It belongs to the save state: it is created for a new game,
//! written into save files verbatim and replaced wholesale when a save is
//! loaded. Entries are created the first time a map loads and are never
//! removed during play.

use crate::resources::boundsrect::{BoundsRect, PartialBounds};
use crate::resources::mapmeta::MapMeta;
use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Map id reserved for "no map"; never receives default bounds.
pub const NO_MAP_ID: u32 = 0;

/// Registry of active camera bounds keyed by map id.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CameraBounds {
    pub map: FxHashMap<u32, BoundsRect>,
}

impl CameraBounds {
    pub fn new() -> Self {
        CameraBounds {
            map: FxHashMap::default(),
        }
    }

    pub fn get(&self, map_id: u32) -> Option<BoundsRect> {
        self.map.get(&map_id).copied()
    }

    pub fn contains(&self, map_id: u32) -> bool {
        self.map.contains_key(&map_id)
    }

    /// Store `rect` for `map_id`, clamped to a `width` x `height` map.
    /// Any previous entry is overwritten.
    pub fn set(&mut self, map_id: u32, rect: BoundsRect, width: u32, height: u32) {
        let clamped = rect.clamped(width, height);
        if clamped != rect {
            debug!("Camera bounds for map {} clamped {:?} -> {:?}", map_id, rect, clamped);
        }
        self.map.insert(map_id, clamped);
    }

    /// Update only the supplied fields of an existing entry.
    ///
    /// Returns `false` (and changes nothing) when `map_id` has no entry.
    pub fn update(&mut self, map_id: u32, partial: &PartialBounds, width: u32, height: u32) -> bool {
        match self.map.get_mut(&map_id) {
            Some(rect) => {
                rect.apply_partial(partial, width, height);
                true
            }
            None => false,
        }
    }

    /// Create the entry for `map_id` from the map's note tags if it has none.
    ///
    /// Each of `minX`, `maxX`, `minY`, `maxY` falls back to the full map
    /// extent when the tag is missing or not numeric. Returns whether an
    /// entry was created.
    pub fn ensure_default(&mut self, map_id: u32, width: u32, height: u32, meta: &MapMeta) -> bool {
        if map_id == NO_MAP_ID || self.contains(map_id) {
            return false;
        }
        let declared = PartialBounds::new(
            meta.integer("minX"),
            meta.integer("maxX"),
            meta.integer("minY"),
            meta.integer("maxY"),
        );
        let rect = declared.resolve(width, height);
        debug!("Default camera bounds for map {}: {:?}", map_id, rect);
        self.map.insert(map_id, rect);
        true
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
