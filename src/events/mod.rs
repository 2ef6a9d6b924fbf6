//! Event types and observers.
//!
//! Every state change goes through an event so that authoring commands, map
//! loads and camera moves are applied in the order they were issued.
//!
//! Submodules:
//! - [`camerabounds`] – the two camera bounds authoring commands
//! - [`mapsetup`] – map transfer and bounds resolution
//! - [`savegame`] – save file write/read
//! - [`scroll`] – camera placement and relative scrolling
pub mod camerabounds;
pub mod mapsetup;
pub mod savegame;
pub mod scroll;
