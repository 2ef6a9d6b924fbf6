//! Engine systems and the camera logic they share with observers.
//!
//! Submodules overview
//! - [`lua_commands`] – drain Lua command queues and trigger events
//! - [`mapbounds`] – resolve a map's camera bounds when it loads
//! - [`scroll`] – camera placement and scrolling, bounded or not

#[cfg(feature = "lua")]
pub mod lua_commands;
pub mod mapbounds;
pub mod scroll;
