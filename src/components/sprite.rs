use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its size in world units and an offset into the texture.
/// The offset selects the frame (or tile) inside a sprite sheet.
/// The origin is the pivot in pixels relative to the sprite's top-left corner.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Unflipped sprite with its pivot at the top-left corner.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32, offset: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset,
            origin: Vector2 { x: 0.0, y: 0.0 },
            flip_h: false,
        }
    }
}
