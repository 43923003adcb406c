//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, the level map,
//! the camera and asset stores.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `camera` – gameplay camera, its clamp math and the raylib mirror
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings read from the INI file
//! - `hudicon` – icon shown while the free camera is active
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `quit` – quit request raised by the player
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilemap` – the level and its tile type queries
//! - `worldtime` – simulation time, delta and pause
pub mod audio;
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod hudicon;
pub mod input;
pub mod quit;
pub mod screensize;
pub mod texturestore;
pub mod tilemap;
pub mod worldtime;
