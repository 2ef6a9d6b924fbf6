//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by observers and systems: the loaded map and camera, the camera
//! bounds registry, map data and configuration.
//!
//! Overview
//! - `boundsrect` – bounds rectangle and partial updates
//! - `camerabounds` – per-map camera bounds registry (persisted)
//! - `camerasnapshot` – read-only camera view for scripts and the runner
//! - `gameconfig` – screen, map and save settings from config.ini
//! - `gamemap` – current map and camera offsets
//! - `lua_runtime` – Lua interpreter and the `engine` API
//! - `mapmeta` – `<key:value>` note tags
//! - `mapstore` – loaded map definitions keyed by id
//! - `nextmapbounds` – one-shot bounds for the next map load
//! - `savecontents` – save file format
//! - `screensize` – screen dimensions and tile size
pub mod boundsrect;
pub mod camerabounds;
pub mod camerasnapshot;
pub mod gameconfig;
pub mod gamemap;
#[cfg(feature = "lua")]
pub mod lua_runtime;
pub mod mapmeta;
pub mod mapstore;
pub mod nextmapbounds;
pub mod savecontents;
pub mod screensize;
