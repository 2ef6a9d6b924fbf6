//! Pending camera bounds for the next map.
//!
//! Set by the "bounds for next map" authoring command and consumed by the
//! first map load that follows, whichever map that is. Session state only:
//! it is not written to save files and is cleared when a save is loaded.

use crate::resources::boundsrect::PartialBounds;
use bevy_ecs::prelude::Resource;

/// One-shot camera bounds override for the next map load.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct NextMapBounds {
    pending: Option<PartialBounds>,
}

impl NextMapBounds {
    /// Create with nothing pending.
    pub fn new() -> Self {
        NextMapBounds { pending: None }
    }

    /// Read-only access to the pending override.
    pub fn get(&self) -> Option<&PartialBounds> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace any pending override. Values are stored as given; clamping
    /// happens when a map consumes them.
    pub fn set(&mut self, bounds: PartialBounds) {
        self.pending = Some(bounds);
    }

    /// Remove and return the pending override.
    pub fn take(&mut self) -> Option<PartialBounds> {
        self.pending.take()
    }

    /// Drop the pending override.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
