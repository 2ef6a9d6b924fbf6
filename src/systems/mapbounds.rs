//! Camera bounds resolution on map load.
//!
//! Runs once per map load, before any camera placement on the new map:
//!
//! 1. A pending next-map override is resolved against the new map's size,
//!    stored for it (replacing any entry) and cleared.
//! 2. Otherwise a map without an entry gets one from its note tags.
//! 3. Otherwise the existing entry is kept.

use crate::resources::camerabounds::CameraBounds;
use crate::resources::mapmeta::MapMeta;
use crate::resources::nextmapbounds::NextMapBounds;
use log::{debug, info};

/// Which branch of the resolution ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsResolution {
    /// The pending override was installed.
    Pending,
    /// Defaults were created from the map note.
    Default,
    /// An existing entry was kept.
    Existing,
    /// Map id 0 with nothing pending; no entry.
    Unmapped,
}

/// Make sure `map_id` has camera bounds after a map load.
///
/// Unset fields of a pending override take the map's full extent; the map
/// note is not consulted in that case.
pub fn resolve_map_bounds(
    camera_bounds: &mut CameraBounds,
    next_map_bounds: &mut NextMapBounds,
    map_id: u32,
    width: u32,
    height: u32,
    meta: &MapMeta,
) -> BoundsResolution {
    if let Some(pending) = next_map_bounds.take() {
        let rect = pending.resolve(width, height);
        info!("Applying next-map camera bounds to map {}: {:?}", map_id, rect);
        camera_bounds.set(map_id, rect, width, height);
        return BoundsResolution::Pending;
    }
    if camera_bounds.ensure_default(map_id, width, height, meta) {
        return BoundsResolution::Default;
    }
    if camera_bounds.contains(map_id) {
        debug!("Keeping camera bounds for map {}", map_id);
        BoundsResolution::Existing
    } else {
        BoundsResolution::Unmapped
    }
}
