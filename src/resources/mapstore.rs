//! Map data storage.
//!
//! Provides serializable map definitions and a store of loaded maps keyed by
//! map id. Map files are JSON:
//!
//! ```json
//! {
//!   "id": 3,
//!   "name": "Harbor",
//!   "width": 40,
//!   "height": 30,
//!   "scroll_type": "loop_horizontal",
//!   "note": "<minX:4>\n<maxX:35>"
//! }
//! ```

use crate::resources::mapmeta::MapMeta;
use bevy_ecs::prelude::Resource;
use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a map wraps at its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollType {
    #[default]
    None,
    LoopVertical,
    LoopHorizontal,
    LoopBoth,
}

impl ScrollType {
    pub fn loops_horizontally(self) -> bool {
        matches!(self, ScrollType::LoopHorizontal | ScrollType::LoopBoth)
    }

    pub fn loops_vertically(self) -> bool {
        matches!(self, ScrollType::LoopVertical | ScrollType::LoopBoth)
    }
}

/// A map definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapData {
    /// Map id; `0` is reserved.
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    #[serde(default)]
    pub scroll_type: ScrollType,
    /// Parallax background wraps horizontally.
    #[serde(default)]
    pub parallax_loop_x: bool,
    /// Parallax background wraps vertically.
    #[serde(default)]
    pub parallax_loop_y: bool,
    /// Free text holding `<key:value>` tags.
    #[serde(default)]
    pub note: String,
}

impl MapData {
    pub fn new(id: u32, width: u32, height: u32) -> Self {
        MapData {
            id,
            name: String::new(),
            width,
            height,
            scroll_type: ScrollType::None,
            parallax_loop_x: false,
            parallax_loop_y: false,
            note: String::new(),
        }
    }

    /// Builder-style: set the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Builder-style: set the scroll type.
    pub fn with_scroll_type(mut self, scroll_type: ScrollType) -> Self {
        self.scroll_type = scroll_type;
        self
    }

    /// Builder-style: set the parallax loop flags.
    pub fn with_parallax_loop(mut self, loop_x: bool, loop_y: bool) -> Self {
        self.parallax_loop_x = loop_x;
        self.parallax_loop_y = loop_y;
        self
    }

    /// Parse the note tags.
    pub fn meta(&self) -> MapMeta {
        MapMeta::parse(&self.note)
    }

    /// Parse a map definition from JSON text.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid map data: {}", e))
    }
}

/// Registry of loaded maps by id.
#[derive(Resource, Debug, Default)]
pub struct MapStore {
    pub map: FxHashMap<u32, MapData>,
}

impl MapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MapStore {
            map: FxHashMap::default(),
        }
    }

    /// Get a map by id.
    pub fn get(&self, id: u32) -> Option<&MapData> {
        self.map.get(&id)
    }

    /// Insert a map under its own id, replacing any map with the same id.
    pub fn insert(&mut self, data: MapData) {
        self.map.insert(data.id, data);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Load every `*.json` file in `dir`.
    ///
    /// Files that fail to parse are skipped with a warning. Returns the number
    /// of maps loaded, or an error if the directory cannot be read.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, String> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| format!("Failed to read map directory {:?}: {}", dir, e))?;

        let mut loaded = 0;
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {:?}: {}", path, e))
                .and_then(|text| MapData::from_json(&text));
            match parsed {
                Ok(data) if data.id == 0 => warn!("Skipping {:?}: map id 0 is reserved", path),
                Ok(data) => {
                    info!("Loaded map {} '{}' ({}x{})", data.id, data.name, data.width, data.height);
                    self.insert(data);
                    loaded += 1;
                }
                Err(e) => warn!("Skipping {:?}: {}", path, e),
            }
        }
        Ok(loaded)
    }
}
