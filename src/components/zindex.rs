//! Z-index component for render ordering.
//!
//! Entities with higher values are drawn on top of those with lower values.
//! Tile layers get consecutive negative values in map order, actors draw at
//! [`ACTORS`] and the overlay layer sits at [`OVERLAY`].

use bevy_ecs::prelude::Component;

/// Z of playable and non-playable characters.
pub const ACTORS: i32 = 0;
/// Z of the tile layer named "Overlay", drawn in front of the actors.
pub const OVERLAY: i32 = 10;

/// Rendering order hint for 2D drawing. Higher values are drawn later.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
