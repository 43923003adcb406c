//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`timer`] – expiry notifications of countdown timers
pub mod audio;
pub mod switchdebug;
pub mod timer;
