//! Level setup and the per-tick schedule.
//!
//! [`setup`] loads the level and its assets before the first frame. The
//! window-independent half, [`spawn_level`], only needs a parsed [`TileMap`]
//! and is what the integration tests use to build a headless world.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::actor::{Actor, ActorTuning, SPRITE_CELL};
use crate::components::mapposition::MapPosition;
use crate::components::npcpatrol::NpcPatrol;
use crate::components::parallax::Parallax;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::sprite::Sprite;
use crate::components::zindex::{self, ZIndex};
use crate::errors::GameError;
use crate::events::audio::AudioCmd;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::audio::{FX_JUMP, MUSIC_DEAD, MUSIC_MAIN};
use crate::resources::camera::{Camera2DRes, GameCamera};
use crate::resources::gameconfig::GameConfig;
use crate::resources::hudicon::HudIcon;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::TileMap;
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::camera::{update_camera, zoom_controls};
use crate::systems::death::{detect_deaths, respawn_observer};
use crate::systems::floorcollision::floor_collision;
use crate::systems::input::toggle_debug;
use crate::systems::npc::npc_behaviour;
use crate::systems::pause::toggle_pause;
use crate::systems::physics::actor_physics;
use crate::systems::playercontrol::player_control;
use crate::systems::spritesync::sync_actor_sprites;
use crate::systems::timers::update_timers;

pub const DEFAULT_MAP_PATH: &str = "res/maps/01.json";
pub const CHARACTERS_PATH: &str = "res/sprites/characters.png";
pub const TELESCOPE_PATH: &str = "res/icons/telescope.png";
pub const MUSIC_MAIN_PATH: &str = "res/music/enchanted-tiki-86.ogg";
pub const MUSIC_DEAD_PATH: &str = "res/sfx/05.ogg";
pub const FX_JUMP_PATH: &str = "res/sfx/jump.ogg";

/// Background images with their scroll factors, farthest first.
pub const BACKGROUNDS: [(&str, &str, f32); 2] = [
    ("bg:far", "res/backgrounds/far.png", 0.25),
    ("bg:near", "res/backgrounds/near.png", 0.5),
];

pub const CHARACTERS_TEX: &str = "characters";
pub const TELESCOPE_TEX: &str = "hud:telescope";

pub const PLAYER_SPAWN: Vector2 = Vector2 { x: 32.0, y: 608.0 };
/// Sprite sheet row of the player, in pixels.
pub const PLAYER_ROW: f32 = 64.0;
pub const NPC_SPAWN: Vector2 = Vector2 { x: 112.0, y: 400.0 };
pub const NPC_ROW: f32 = 32.0;

/// Entities created by [`spawn_level`].
#[derive(Debug, Clone, Copy)]
pub struct LevelEntities {
    pub player: Entity,
    pub npc: Entity,
}

/// Spawn one sprite per non-empty cell of every visible tile layer.
///
/// Layers get increasing negative z in map order so later layers cover
/// earlier ones; the overlay layer goes in front of the actors.
fn spawn_tiles(world: &mut World, map: &TileMap) {
    let layer_count = map.layers.len() as i32;
    let tw = map.tile_width as f32;
    let th = map.tile_height as f32;
    let mut spawned = 0usize;

    for (layer_index, layer) in map.layers.iter().enumerate() {
        if !layer.visible {
            continue;
        }
        let z = if layer.is_overlay() {
            zindex::OVERLAY
        } else {
            -(layer_count - layer_index as i32)
        };

        for (cell, &gid) in layer.data.iter().enumerate() {
            let Some((tileset, rect)) = map.tile_source_rect(gid) else {
                continue;
            };
            let tx = (cell as u32 % map.width) as f32;
            let ty = (cell as u32 / map.width) as f32;
            // Oversized tiles grow upwards from the cell's bottom edge.
            let position = MapPosition::new(tx * tw, (ty + 1.0) * th - rect.height);
            let mut sprite = Sprite::new(
                tileset.tex_key.clone(),
                rect.width,
                rect.height,
                Vector2 {
                    x: rect.x,
                    y: rect.y,
                },
            );
            sprite.flip_h = gid & 0x8000_0000 != 0;
            world.spawn((position, ZIndex(z), sprite));
            spawned += 1;
        }
    }
    info!("Spawned {} tiles from {} layers", spawned, layer_count);
}

fn spawn_actor(
    world: &mut World,
    map: &TileMap,
    tuning: ActorTuning,
    spawn: Vector2,
    row: f32,
) -> EntityWorldMut<'_> {
    let (map_w, map_h) = (map.pixel_width(), map.pixel_height());
    let actor = Actor::new(SPRITE_CELL, SPRITE_CELL, map_w, map_h, spawn)
        .with_tuning(tuning)
        .with_row_offset(row);
    let sprite = Sprite::new(
        CHARACTERS_TEX,
        SPRITE_CELL,
        SPRITE_CELL,
        actor.animation.source_origin(),
    );
    world.spawn((
        actor,
        MapPosition::new(spawn.x, spawn.y),
        sprite,
        ZIndex(zindex::ACTORS),
    ))
}

/// Insert the map, camera and actors into `world`. Needs no window.
pub fn spawn_level(world: &mut World, map: TileMap, config: &GameConfig) -> LevelEntities {
    let screen = world
        .get_resource::<ScreenSize>()
        .copied()
        .unwrap_or(ScreenSize {
            w: config.width as i32,
            h: config.height as i32,
        });
    world.insert_resource(screen);

    spawn_tiles(world, &map);

    let tuning = ActorTuning {
        meter_in_pixel: config.meter_in_pixel,
        gravitation: config.gravitation,
        ..ActorTuning::default()
    };
    let player = spawn_actor(world, &map, tuning, PLAYER_SPAWN, PLAYER_ROW)
        .insert(PlayerControlled)
        .id();
    let npc = spawn_actor(world, &map, tuning, NPC_SPAWN, NPC_ROW)
        .insert(NpcPatrol::default())
        .id();

    let camera = GameCamera::new(config.zoom, map.pixel_height(), screen.h as f32);
    world.insert_resource(Camera2DRes::from_game_camera(&camera));
    world.insert_resource(camera);
    world.insert_resource(map);

    LevelEntities { player, npc }
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: impl AsRef<Path>,
) -> Result<Texture2D, GameError> {
    let path = path.as_ref();
    rl.load_texture(thread, &path.to_string_lossy())
        .map_err(|e| GameError::load_failed("texture", path, e))
}

/// Upload tilesets, character sprites and the HUD icon. All are required.
fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    map: &TileMap,
) -> Result<TextureStore, GameError> {
    let mut store = TextureStore::new();
    for tileset in map.tilesets.iter() {
        let texture = load_texture(rl, thread, &tileset.image)?;
        store.insert(tileset.tex_key.clone(), texture);
    }
    store.insert(CHARACTERS_TEX, load_texture(rl, thread, CHARACTERS_PATH)?);
    store.insert(TELESCOPE_TEX, load_texture(rl, thread, TELESCOPE_PATH)?);
    Ok(store)
}

/// Backgrounds are decoration: missing ones are skipped.
fn load_backgrounds(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    store: &mut TextureStore,
    map_height: f32,
) {
    for (key, path, factor) in BACKGROUNDS {
        match load_texture(rl, thread, path) {
            Ok(texture) => {
                let (width, height) = (texture.width as f32, texture.height as f32);
                store.insert(key, texture);
                world.spawn(Parallax {
                    tex_key: key.to_string(),
                    factor,
                    width,
                    height,
                    y: map_height - height,
                });
            }
            Err(e) => warn!("Skipping background: {}", e),
        }
    }
}

/// Ask the audio thread to load every tune and start the level music.
pub fn queue_audio(world: &mut World) {
    let mut cmds = world.resource_mut::<Messages<AudioCmd>>();
    cmds.write(AudioCmd::LoadMusic {
        id: MUSIC_MAIN.to_string(),
        path: MUSIC_MAIN_PATH.to_string(),
    });
    cmds.write(AudioCmd::LoadMusic {
        id: MUSIC_DEAD.to_string(),
        path: MUSIC_DEAD_PATH.to_string(),
    });
    cmds.write(AudioCmd::LoadFx {
        id: FX_JUMP.to_string(),
        path: FX_JUMP_PATH.to_string(),
    });
    cmds.write(AudioCmd::PlayMusic {
        id: MUSIC_MAIN.to_string(),
        looped: true,
    });
}

/// Load the level and every asset, then populate `world`.
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    map_path: &Path,
) -> Result<LevelEntities, GameError> {
    let config = world.resource::<GameConfig>().clone();

    let map = TileMap::load(map_path)?;
    info!(
        "Loaded map {:?}: {}x{} tiles of {}x{} px, {} layers",
        map_path,
        map.width,
        map.height,
        map.tile_width,
        map.tile_height,
        map.layers.len()
    );

    let mut textures = load_textures(rl, thread, &map)?;
    load_backgrounds(world, rl, thread, &mut textures, map.pixel_height());
    let icon = textures.require(TELESCOPE_TEX)?;
    world.insert_resource(HudIcon {
        tex_key: TELESCOPE_TEX.to_string(),
        width: icon.width as f32,
        height: icon.height as f32,
    });
    world.insert_resource(textures);

    let level = spawn_level(world, map, &config);
    queue_audio(world);
    Ok(level)
}

/// Observers that must exist before the first tick.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(respawn_observer));
    world.flush();
}

/// The per-tick simulation schedule, minus hardware input polling.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            toggle_pause,
            toggle_debug,
            player_control,
            zoom_controls,
            actor_physics,
            detect_deaths,
            update_timers,
            floor_collision,
            npc_behaviour,
            update_camera,
            sync_actor_sprites,
            // audio systems must be together
            (
                update_bevy_audio_cmds,
                forward_audio_cmds,
                poll_audio_messages,
                update_bevy_audio_messages,
                log_audio_messages,
            )
                .chain(),
        )
            .chain(),
    );
    update
}
