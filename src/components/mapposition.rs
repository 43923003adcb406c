//! World-space position component.
//!
//! [`MapPosition`] stores the top-left corner of an entity in map pixels.
//! Actors, tiles and debug overlays all read it; the actor physics system is
//! the only writer for moving entities.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of an entity in world (map) pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
