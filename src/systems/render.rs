//! Drawing.
//!
//! Rendering runs outside the update schedule because it can fail: a texture
//! that vanished from the [`TextureStore`] ends the frame loop with
//! [`GameError::RenderFailed`]. [`render_frame`] takes the raylib handle out
//! of the world for the duration of the frame and draws, in order:
//! parallax backgrounds, every sprite sorted by [`ZIndex`] (tile layers,
//! actors, the overlay layer), the debug overlay and the HUD.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::components::parallax::Parallax;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::errors::GameError;
use crate::resources::camera::{Camera2DRes, GameCamera};
use crate::resources::debugmode::DebugMode;
use crate::resources::hudicon::HudIcon;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::TileMap;
use crate::resources::worldtime::WorldTime;

/// Draw one frame.
pub fn render_frame(world: &mut World) -> Result<(), GameError> {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .ok_or_else(|| GameError::RenderFailed("raylib handle is not available".into()))?;
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return Err(GameError::RenderFailed("raylib thread token is not available".into()));
    };

    let result = {
        let mut d = rl.begin_drawing(&thread);
        draw_scene(world, &mut d)
    };

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    result
}

fn draw_scene(world: &mut World, d: &mut RaylibDrawHandle) -> Result<(), GameError> {
    let background = world
        .get_resource::<TileMap>()
        .and_then(|map| map.background)
        .unwrap_or(Color::BLACK);
    d.clear_background(background);

    let cam = world.resource::<Camera2DRes>().0;
    {
        let mut d2 = d.begin_mode2D(cam);
        parallax_pass(world, &mut d2, cam)?;
        render_pass(world, &mut d2)?;
        if world.contains_resource::<DebugMode>() {
            debug_pass(world, &mut d2);
        }
    }
    render_hud(world, d)?;
    render_debug_ui(world, d);
    Ok(())
}

fn parallax_pass(
    world: &mut World,
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    cam: Camera2D,
) -> Result<(), GameError> {
    let screen = *world.resource::<ScreenSize>();
    let view_width = screen.w as f32 / cam.zoom;

    let mut layers: Vec<Parallax> = {
        let mut q = world.query::<&Parallax>();
        q.iter(world).cloned().collect()
    };
    // Slow (far) layers first.
    layers.sort_by(|a, b| a.factor.total_cmp(&b.factor));

    let textures = world.resource::<TextureStore>();
    for layer in layers.iter() {
        let tex = textures.require(&layer.tex_key)?;
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width as f32,
            height: tex.height as f32,
        };
        for x in layer.copies(cam.target.x, view_width) {
            let dest = Rectangle {
                x,
                y: layer.y,
                width: layer.width,
                height: layer.height,
            };
            d2.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }
    Ok(())
}

/// Draw every visible sprite in z order.
///
/// The visible world rectangle comes from the camera's screen corners; sprites
/// outside of it are culled.
pub fn render_pass(
    world: &mut World,
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
) -> Result<(), GameError> {
    let cam = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();

    let tl = d2.get_screen_to_world2D(Vector2 { x: 0.0, y: 0.0 }, cam);
    let br = d2.get_screen_to_world2D(screen.as_vec(), cam);
    let view_min = Vector2 {
        x: tl.x.min(br.x),
        y: tl.y.min(br.y),
    };
    let view_max = Vector2 {
        x: tl.x.max(br.x),
        y: tl.y.max(br.y),
    };

    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world)
            .filter(|(s, p, _)| {
                let min = Vector2 {
                    x: p.pos.x - s.origin.x,
                    y: p.pos.y - s.origin.y,
                };
                let max = Vector2 {
                    x: min.x + s.width,
                    y: min.y + s.height,
                };
                !(max.x < view_min.x
                    || min.x > view_max.x
                    || max.y < view_min.y
                    || min.y > view_max.y)
            })
            .map(|(s, p, z)| (s.clone(), *p, *z))
            .collect()
    };

    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (sprite, pos, _z) in to_draw.iter() {
        let tex = textures.require(&sprite.tex_key)?;
        // A negative source width mirrors the frame.
        let src = Rectangle {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: if sprite.flip_h { -sprite.width } else { sprite.width },
            height: sprite.height,
        };
        let dest = Rectangle {
            x: pos.pos.x,
            y: pos.pos.y,
            width: sprite.width,
            height: sprite.height,
        };
        d2.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
    }
    Ok(())
}

/// Bounding boxes and floor probes of every actor.
fn debug_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut actors = world.query::<(&Actor, &MapPosition)>();
    for (actor, position) in actors.iter(world) {
        let bb = actor.bb;
        d2.draw_rectangle_lines(
            bb.l as i32,
            bb.t as i32,
            bb.width() as i32,
            bb.height() as i32,
            Color::RED,
        );
        let feet = Vector2 {
            x: position.pos.x,
            y: position.pos.y + actor.height,
        };
        let color = if actor.in_mid_air() { Color::ORANGE } else { Color::GREEN };
        d2.draw_line(feet.x as i32 - 5, feet.y as i32, feet.x as i32 + 5, feet.y as i32, color);
        d2.draw_line(feet.x as i32, feet.y as i32 - 5, feet.x as i32, feet.y as i32 + 5, color);
    }
}

/// Telescope icon in the top-right corner while the free camera is active.
fn render_hud(world: &mut World, d: &mut RaylibDrawHandle) -> Result<(), GameError> {
    let camera = *world.resource::<GameCamera>();
    if !camera.free_mode {
        return Ok(());
    }
    let Some(icon) = world.get_resource::<HudIcon>() else {
        return Ok(());
    };
    let screen = *world.resource::<ScreenSize>();
    let tex = world.resource::<TextureStore>().require(&icon.tex_key)?;
    let width = icon.width * camera.zoom;
    let height = icon.height * camera.zoom;
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: icon.width,
        height: icon.height,
    };
    let dest = Rectangle {
        x: screen.w as f32 - width,
        y: 0.0,
        width,
        height,
    };
    d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    Ok(())
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();

    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", d.get_fps());
    d.draw_text(&text, 10, 10, 10, Color::WHITE);

    let entity_count = world.entities().len();
    d.draw_text(&format!("Entities: {}", entity_count), 10, 30, 10, Color::WHITE);

    if world.resource::<WorldTime>().is_paused() {
        d.draw_text("PAUSED", 10, 50, 10, Color::YELLOW);
    }

    let cam = world.resource::<GameCamera>();
    let cam_text = format!(
        "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}{}",
        cam.pos.x,
        cam.pos.y,
        cam.zoom,
        if cam.free_mode { " [free]" } else { "" }
    );
    d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::WHITE);
}
