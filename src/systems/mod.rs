//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering. The per-tick order is assembled in [`crate::game::build_schedule`].
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward commands, poll replies)
//! - [`camera`] – zoom keys, player tracking, free camera and map clamping
//! - [`death`] – respawn timer on death and the respawn observer
//! - [`floorcollision`] – ground or unground actors from the tile under their feet
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`npc`] – NPC reaction to the player and ledge stops
//! - [`pause`] – freeze and resume simulation and music
//! - [`physics`] – step every living actor
//! - [`playercontrol`] – translate input state into player actor flags
//! - [`render`] – draw world, HUD and debug overlays using Raylib
//! - [`spritesync`] – copy animation frames and facing into sprites
//! - [`time`] – update simulation time and delta
//! - [`timers`] – count down timers and fire their events

pub mod audio;
pub mod camera;
pub mod death;
pub mod floorcollision;
pub mod input;
pub mod npc;
pub mod pause;
pub mod physics;
pub mod playercontrol;
pub mod render;
pub mod spritesync;
pub mod time;
pub mod timers;
