//! Camera bounds rectangle types.
//!
//! A [`BoundsRect`] is the inclusive tile rectangle the camera is allowed to
//! show on a map. [`PartialBounds`] is the same rectangle with every field
//! optional, used for authoring command payloads and the pending next-map
//! override.
//!
//! All clamping saturates: out-of-range values are pulled into range, never
//! rejected.

use log::warn;
use serde::{Deserialize, Serialize};

/// Inclusive tile-index rectangle that bounds camera scrolling on one map.
///
/// Serialized with the `minX`/`maxX`/`minY`/`maxY` field names used in save
/// files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsRect {
    /// Leftmost tile column the camera may show.
    pub min_x: i32,
    /// Rightmost tile column the camera may show.
    pub max_x: i32,
    /// Topmost tile row the camera may show.
    pub min_y: i32,
    /// Bottommost tile row the camera may show.
    pub max_y: i32,
}

impl BoundsRect {
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        BoundsRect {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Rectangle covering a whole `width` x `height` map.
    pub fn full_extent(width: u32, height: u32) -> Self {
        BoundsRect {
            min_x: 0,
            max_x: last_index(width),
            min_y: 0,
            max_y: last_index(height),
        }
    }

    /// Return a copy pulled into `0 <= min <= max <= extent - 1` on both axes.
    ///
    /// Each axis is clamped independently. If the min ends up past the max,
    /// the min is lowered to the max.
    pub fn clamped(self, width: u32, height: u32) -> Self {
        let (min_x, max_x) = clamp_axis(self.min_x, self.max_x, width);
        let (min_y, max_y) = clamp_axis(self.min_y, self.max_y, height);
        BoundsRect {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Apply the supplied fields of `partial`, clamping each updated field on
    /// its own.
    ///
    /// Min fields are clamped to `[0, current max]`, max fields to
    /// `[current min, extent - 1]`. Fields are applied in `min_x, max_x,
    /// min_y, max_y` order, so a max updated in the same call sees the new
    /// min.
    pub fn apply_partial(&mut self, partial: &PartialBounds, width: u32, height: u32) {
        let last_x = last_index(width);
        let last_y = last_index(height);
        if let Some(min_x) = partial.min_x {
            self.min_x = min_x.max(0).min(self.max_x.min(last_x));
        }
        if let Some(max_x) = partial.max_x {
            self.max_x = max_x.min(last_x).max(self.min_x);
        }
        if let Some(min_y) = partial.min_y {
            self.min_y = min_y.max(0).min(self.max_y.min(last_y));
        }
        if let Some(max_y) = partial.max_y {
            self.max_y = max_y.min(last_y).max(self.min_y);
        }
    }

    /// Check the rectangle invariant against a map size.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        0 <= self.min_x
            && self.min_x <= self.max_x
            && self.max_x <= last_index(width)
            && 0 <= self.min_y
            && self.min_y <= self.max_y
            && self.max_y <= last_index(height)
    }
}

/// Bounds rectangle where any field may be left unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialBounds {
    pub min_x: Option<i32>,
    pub max_x: Option<i32>,
    pub min_y: Option<i32>,
    pub max_y: Option<i32>,
}

impl PartialBounds {
    pub fn new(
        min_x: Option<i32>,
        max_x: Option<i32>,
        min_y: Option<i32>,
        max_y: Option<i32>,
    ) -> Self {
        PartialBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Build from raw authoring-command arguments in `minX, maxX, minY, maxY`
    /// order. See [`parse_bound_arg`] for how each argument is read.
    pub fn from_args(
        min_x: Option<&str>,
        max_x: Option<&str>,
        min_y: Option<&str>,
        max_y: Option<&str>,
    ) -> Self {
        PartialBounds {
            min_x: min_x.and_then(|s| parse_bound_arg("minX", s)),
            max_x: max_x.and_then(|s| parse_bound_arg("maxX", s)),
            min_y: min_y.and_then(|s| parse_bound_arg("minY", s)),
            max_y: max_y.and_then(|s| parse_bound_arg("maxY", s)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x.is_none() && self.max_x.is_none() && self.min_y.is_none() && self.max_y.is_none()
    }

    /// Commit to a full rectangle for a `width` x `height` map.
    ///
    /// Unset fields fall back to the map's full extent, then the result is
    /// clamped.
    pub fn resolve(&self, width: u32, height: u32) -> BoundsRect {
        let full = BoundsRect::full_extent(width, height);
        BoundsRect {
            min_x: self.min_x.unwrap_or(full.min_x),
            max_x: self.max_x.unwrap_or(full.max_x),
            min_y: self.min_y.unwrap_or(full.min_y),
            max_y: self.max_y.unwrap_or(full.max_y),
        }
        .clamped(width, height)
    }
}

/// Read one authoring-command argument.
///
/// - empty or blank: unspecified (`None`)
/// - integer or decimal text: the value, truncated toward zero
/// - anything else: coerced to `0`
pub fn parse_bound_arg(name: &str, raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i32>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value.trunc() as i32),
        _ => {
            warn!("Non-numeric camera bound {}={:?}, using 0", name, raw);
            Some(0)
        }
    }
}

/// Index of the last tile on an axis of `extent` tiles.
pub fn last_index(extent: u32) -> i32 {
    (extent as i64 - 1).clamp(0, i32::MAX as i64) as i32
}

fn clamp_axis(min: i32, max: i32, extent: u32) -> (i32, i32) {
    let last = last_index(extent);
    let max = max.clamp(0, last);
    let min = min.clamp(0, last).min(max);
    (min, max)
}
