//! ECS components for entities.
//!
//! Submodules overview:
//! - [`aabb`] – axis-aligned bounding box and the overlap test
//! - [`actor`] – simulated characters: flags, speed, jump and animation state
//! - [`mapposition`] – world-space position (top-left corner) of an entity
//! - [`npcpatrol`] – stop windows for non-playable characters
//! - [`parallax`] – repeating background layers scrolled with the camera
//! - [`playercontrolled`] – marker for the keyboard-driven actor
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – countdown timer that emits events when finished
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod aabb;
pub mod actor;
pub mod mapposition;
pub mod npcpatrol;
pub mod parallax;
pub mod playercontrolled;
pub mod sprite;
pub mod timer;
pub mod zindex;
