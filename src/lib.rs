//! Rainbow Joe library.
//!
//! This module exposes the game's ECS components, resources, systems, and events
//! for use in integration tests and by the `rainbowjoe` binary.

pub mod components;
pub mod errors;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
