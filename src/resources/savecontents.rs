//! Save file contents.
//!
//! A save holds the current map, the camera offsets and the camera bounds
//! registry. The registry is stored verbatim under `cameraBounds`; saves
//! written before any bounds existed have no such field and load as `None`.

use crate::resources::camerabounds::CameraBounds;
use crate::resources::gamemap::GameMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable game state written to and read from save files.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveContents {
    pub map_id: u32,
    #[serde(default)]
    pub display_x: f32,
    #[serde(default)]
    pub display_y: f32,
    #[serde(default)]
    pub parallax_x: f32,
    #[serde(default)]
    pub parallax_y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_bounds: Option<CameraBounds>,
}

impl SaveContents {
    /// Capture the current map position and bounds registry.
    pub fn capture(game_map: &GameMap, camera_bounds: &CameraBounds) -> Self {
        SaveContents {
            map_id: game_map.map_id,
            display_x: game_map.display_x,
            display_y: game_map.display_y,
            parallax_x: game_map.parallax_x,
            parallax_y: game_map.parallax_y,
            camera_bounds: Some(camera_bounds.clone()),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to encode save: {}", e))
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid save data: {}", e))
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create save directory {:?}: {}", parent, e))?;
        }
        std::fs::write(path, self.to_json()?)
            .map_err(|e| format!("Failed to write save file {:?}: {}", path, e))?;
        info!("Saved game to {:?}", path);
        Ok(())
    }

    /// Read from `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read save file {:?}: {}", path, e))?;
        let contents = Self::from_json(&text)?;
        info!("Loaded save from {:?} (map {})", path, contents.map_id);
        Ok(contents)
    }
}
