//! Camera systems.
//!
//! - [`zoom_controls`] handles keys 1 (reset), 2 (out) and 3 (in).
//! - [`update_camera`] follows the player or pans freely, clamps the view to
//!   the map and mirrors the result into [`Camera2DRes`].

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::PlayerControlled;
use crate::resources::camera::{
    Camera2DRes, FREE_CAMERA_SPEED, GameCamera, clamp_offset, track_offset,
};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::tilemap::{TileMap, TileTypeSource};
use crate::resources::worldtime::WorldTime;

/// Zoom changes by one unit per second while 2 or 3 is held.
pub fn zoom_controls(input: Res<InputState>, time: Res<WorldTime>, mut camera: ResMut<GameCamera>) {
    if input.zoom_reset.active {
        camera.reset_zoom();
    }
    if input.zoom_out.active {
        let zoom = camera.zoom - time.delta;
        camera.set_zoom(zoom);
    }
    if input.zoom_in.active {
        let zoom = camera.zoom + time.delta;
        camera.set_zoom(zoom);
    }
}

pub fn update_camera(
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    map: Res<TileMap>,
    mut camera: ResMut<GameCamera>,
    mut rl_camera: ResMut<Camera2DRes>,
    player: Query<(&Actor, &MapPosition), With<PlayerControlled>>,
) {
    let viewport = screen.as_vec();

    if camera.free_mode {
        let step = FREE_CAMERA_SPEED * time.delta;
        if input.camera_up.active {
            camera.pos.y -= step;
        }
        if input.camera_down.active {
            camera.pos.y += step;
        }
        if input.camera_left.active {
            camera.pos.x -= step;
        }
        if input.camera_right.active {
            camera.pos.x += step;
        }
    } else if let Ok((actor, position)) = player.single() {
        let size = Vector2 {
            x: actor.width,
            y: actor.height,
        };
        camera.pos = track_offset(position.pos, size, viewport, camera.zoom);
    }

    let (map_w, map_h) = map.pixel_size();
    camera.pos = clamp_offset(camera.pos, Vector2 { x: map_w, y: map_h }, viewport, camera.zoom);
    *rl_camera = Camera2DRes::from_game_camera(&camera);
}
