//! Camera resources.
//!
//! [`GameCamera`] is the gameplay view: a top-left offset in map pixels plus a
//! zoom factor. It either follows the player or, while the free camera key is
//! held, pans with the arrow keys. Each tick the result is clamped to the map
//! and mirrored into [`Camera2DRes`], the raylib camera used for drawing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// Free camera panning speed in pixels per second.
pub const FREE_CAMERA_SPEED: f32 = 250.0;
/// The view never zooms out past one map pixel per screen pixel.
pub const MIN_ZOOM: f32 = 1.0;

/// ECS resource that holds the raylib 2D camera used by the renderer.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    pub fn from_game_camera(cam: &GameCamera) -> Self {
        Camera2DRes(Camera2D {
            offset: Vector2 { x: 0.0, y: 0.0 },
            target: cam.pos,
            rotation: 0.0,
            zoom: cam.zoom,
        })
    }
}

/// Gameplay camera state.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct GameCamera {
    /// Top-left corner of the view in map pixels.
    pub pos: Vector2,
    pub zoom: f32,
    pub zoom_initial: f32,
    /// Set while the free camera key is held.
    pub free_mode: bool,
}

impl GameCamera {
    /// Camera in the bottom-left corner of the map, where the level starts.
    pub fn new(zoom: f32, map_height: f32, viewport_height: f32) -> Self {
        let zoom = zoom.max(MIN_ZOOM);
        Self {
            pos: Vector2 {
                x: 0.0,
                y: map_height - viewport_height,
            },
            zoom,
            zoom_initial: zoom,
            free_mode: false,
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(MIN_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = self.zoom_initial;
    }
}

/// Offset that centres the viewport on an entity.
pub fn track_offset(entity_pos: Vector2, entity_size: Vector2, viewport: Vector2, zoom: f32) -> Vector2 {
    Vector2 {
        x: entity_pos.x - viewport.x / (zoom * 2.0) + entity_size.x / 2.0,
        y: entity_pos.y - viewport.y / (zoom * 2.0) + entity_size.y / 2.0,
    }
}

fn clamp_axis(offset: f32, map: f32, viewport: f32, zoom: f32) -> f32 {
    let max = (map - viewport / zoom).max(0.0);
    offset.clamp(0.0, max)
}

/// Keep the view inside the map.
///
/// When the map is smaller than the view on an axis, that axis pins to 0.
pub fn clamp_offset(offset: Vector2, map_size: Vector2, viewport: Vector2, zoom: f32) -> Vector2 {
    Vector2 {
        x: clamp_axis(offset.x, map_size.x, viewport.x, zoom),
        y: clamp_axis(offset.y, map_size.y, viewport.y, zoom),
    }
}
