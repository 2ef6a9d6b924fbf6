//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and a method to load configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 816
//! height = 624
//! tile_size = 48
//!
//! [maps]
//! path = ./assets/maps
//!
//! [save]
//! path = ./save/file1.json
//! ```

use crate::resources::screensize::ScreenSize;
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 816;
const DEFAULT_SCREEN_HEIGHT: u32 = 624;
const DEFAULT_TILE_SIZE: u32 = 48;
const DEFAULT_MAPS_PATH: &str = "./assets/maps";
const DEFAULT_SAVE_PATH: &str = "./save/file1.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Map tile edge in pixels.
    pub tile_size: u32,
    /// Directory holding map JSON files.
    pub maps_path: PathBuf,
    /// Save file used when a save/load command gives no path.
    pub save_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            maps_path: PathBuf::from(DEFAULT_MAPS_PATH),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. A zero tile size
    /// is ignored.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }
        if let Some(tile_size) = config.getuint("screen", "tile_size").ok().flatten()
            && tile_size > 0
        {
            self.tile_size = tile_size as u32;
        }

        // [maps] section
        if let Some(path) = config.get("maps", "path") {
            self.maps_path = PathBuf::from(path);
        }

        // [save] section
        if let Some(path) = config.get("save", "path") {
            self.save_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} screen, tile={}, maps={:?}, save={:?}",
            self.screen_width, self.screen_height, self.tile_size, self.maps_path, self.save_path
        );

        Ok(())
    }

    /// Screen size resource derived from this configuration.
    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize {
            w: self.screen_width as i32,
            h: self.screen_height as i32,
            tile_size: self.tile_size,
        }
    }
}
