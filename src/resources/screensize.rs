//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The camera uses them to work
//! out the visible portion of the map.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn as_vec(&self) -> raylib::prelude::Vector2 {
        raylib::prelude::Vector2 {
            x: self.w as f32,
            y: self.h as f32,
        }
    }
}
