//! Whole-tick integration tests: a headless level driven by the game schedule.

use bevy_ecs::prelude::*;
use serde_json::json;

use rainbowjoe::components::actor::{
    Actor, ActorFlag, Facing, RUN_VELOCITY_MAX, WALK_VELOCITY_MAX,
};
use rainbowjoe::components::mapposition::MapPosition;
use rainbowjoe::components::sprite::Sprite;
use rainbowjoe::components::timer::Timer;
use rainbowjoe::events::audio::AudioCmd;
use rainbowjoe::game::{self, LevelEntities, PLAYER_SPAWN};
use rainbowjoe::resources::audio::{FX_JUMP, MUSIC_DEAD, MUSIC_MAIN, init_audio_messages};
use rainbowjoe::resources::camera::{Camera2DRes, GameCamera};
use rainbowjoe::resources::debugmode::DebugMode;
use rainbowjoe::resources::gameconfig::GameConfig;
use rainbowjoe::resources::input::InputState;
use rainbowjoe::resources::quit::QuitRequest;
use rainbowjoe::resources::tilemap::TileMap;
use rainbowjoe::resources::worldtime::WorldTime;
use rainbowjoe::systems::audio::forward_audio_cmds;
use rainbowjoe::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;
const MAP_W: u32 = 60;
const MAP_H: u32 = 25;
/// Tile row holding the floor; its top edge is at y = 640.
const FLOOR_ROW: u32 = 20;

/// Every AudioCmd the schedule has produced so far.
#[derive(Resource, Default)]
struct AudioLog(Vec<AudioCmd>);

fn record_audio(mut reader: MessageReader<AudioCmd>, mut log: ResMut<AudioLog>) {
    log.0.extend(reader.read().cloned());
}

/// 60x25 map of 32px tiles with a single floor row.
fn level_map() -> TileMap {
    let mut data = vec![0u32; (MAP_W * MAP_H) as usize];
    for x in 0..MAP_W {
        data[(FLOOR_ROW * MAP_W + x) as usize] = 2;
    }
    let map = json!({
        "width": MAP_W,
        "height": MAP_H,
        "tilewidth": 32,
        "tileheight": 32,
        "layers": [
            { "name": "World", "type": "tilelayer", "visible": true, "data": data }
        ],
        "tilesets": [{
            "firstgid": 1,
            "name": "tiles",
            "image": "tiles.png",
            "columns": 8,
            "tilewidth": 32,
            "tileheight": 32,
            "tiles": [{ "id": 1, "type": "floor" }]
        }]
    });
    TileMap::from_json_str(&map.to_string(), "res/maps/test.json").unwrap()
}

struct Harness {
    world: World,
    schedule: Schedule,
    level: LevelEntities,
}

impl Harness {
    fn new() -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(QuitRequest::default());
        world.insert_resource(AudioLog::default());
        init_audio_messages(&mut world);

        let config = GameConfig::new();
        world.insert_resource(config.clone());
        game::register_observers(&mut world);
        let level = game::spawn_level(&mut world, level_map(), &config);

        let mut schedule = game::build_schedule();
        schedule.add_systems(record_audio.after(forward_audio_cmds));

        Self {
            world,
            schedule,
            level,
        }
    }

    fn tick(&mut self) {
        update_world_time(&mut self.world, DT);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    fn input(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut::<InputState>()
    }

    fn actor(&self, entity: Entity) -> &Actor {
        self.world.get::<Actor>(entity).unwrap()
    }

    fn pos(&self, entity: Entity) -> MapPosition {
        *self.world.get::<MapPosition>(entity).unwrap()
    }

    fn set_pos(&mut self, entity: Entity, x: f32, y: f32) {
        self.world.get_mut::<MapPosition>(entity).unwrap().pos = raylib::prelude::Vector2 { x, y };
    }

    fn audio(&self) -> &[AudioCmd] {
        &self.world.resource::<AudioLog>().0
    }

    fn player(&self) -> Entity {
        self.level.player
    }

    fn npc(&self) -> Entity {
        self.level.npc
    }
}

fn on_floor(y: f32) -> bool {
    (608.0..640.0).contains(&y)
}

#[test]
fn level_spawns_tiles_and_actors() {
    let mut h = Harness::new();
    let tiles = h
        .world
        .query_filtered::<&Sprite, Without<Actor>>()
        .iter(&h.world)
        .count();
    assert_eq!(tiles, MAP_W as usize);
    assert_eq!(h.world.query::<&Actor>().iter(&h.world).count(), 2);
    assert_eq!(h.pos(h.player()).pos.x, PLAYER_SPAWN.x);
}

#[test]
fn player_stands_still_on_the_floor() {
    let mut h = Harness::new();
    h.ticks(60);
    let player = h.actor(h.player());
    assert!(!player.in_mid_air());
    assert!(!player.in_motion());
    assert_eq!(h.pos(h.player()).pos.y, PLAYER_SPAWN.y);
}

#[test]
fn npc_falls_and_lands_on_the_floor() {
    let mut h = Harness::new();
    let start_y = h.pos(h.npc()).pos.y;
    h.ticks(10);
    assert!(h.actor(h.npc()).in_mid_air());
    assert!(h.pos(h.npc()).pos.y > start_y);

    h.ticks(290);
    assert!(!h.actor(h.npc()).in_mid_air());
    assert!(on_floor(h.pos(h.npc()).pos.y));
    assert_eq!(h.actor(h.npc()).velocity_fall, 0.0);
}

#[test]
fn walking_right_accelerates_to_walk_speed() {
    let mut h = Harness::new();
    h.input().move_right.active = true;
    h.ticks(30);

    let player = h.actor(h.player());
    assert!(player.in_motion());
    assert!(player.facing() == Facing::Right);
    assert_eq!(player.velocity, WALK_VELOCITY_MAX);
    let x = h.pos(h.player()).pos.x;
    assert!(x > 60.0 && x < 80.0, "x = {}", x);
}

#[test]
fn releasing_the_key_decelerates_to_a_stop() {
    let mut h = Harness::new();
    h.input().move_right.active = true;
    h.ticks(30);
    h.input().move_right.active = false;
    h.ticks(30);

    let player = h.actor(h.player());
    assert!(!player.in_motion());
    assert_eq!(player.velocity, 0.0);
    let x = h.pos(h.player()).pos.x;
    h.ticks(10);
    assert_eq!(h.pos(h.player()).pos.x, x);
}

#[test]
fn running_raises_the_speed_cap() {
    let mut h = Harness::new();
    h.input().move_right.active = true;
    h.input().run.active = true;
    h.ticks(60);

    let player = h.actor(h.player());
    assert_eq!(player.velocity_max, RUN_VELOCITY_MAX);
    assert!(player.velocity > WALK_VELOCITY_MAX);
}

#[test]
fn walking_left_faces_left_and_flips_the_sprite() {
    let mut h = Harness::new();
    h.input().move_left.active = true;
    h.ticks(5);

    assert!(h.actor(h.player()).facing() == Facing::Left);
    assert!(h.pos(h.player()).pos.x < PLAYER_SPAWN.x);
    assert!(h.world.get::<Sprite>(h.player()).unwrap().flip_h);
}

#[test]
fn jump_rises_plays_sound_and_lands_again() {
    let mut h = Harness::new();
    h.input().jump.active = true;
    h.tick();
    h.input().jump.active = false;

    assert!(h.actor(h.player()).is_jumping());
    assert!(h.audio().contains(&AudioCmd::PlayFx {
        id: FX_JUMP.to_string()
    }));

    h.ticks(20);
    assert!(h.actor(h.player()).in_mid_air());
    assert!(h.pos(h.player()).pos.y < PLAYER_SPAWN.y - 20.0);

    h.ticks(300);
    assert!(!h.actor(h.player()).in_mid_air());
    assert!(!h.actor(h.player()).is_jumping());
    assert!(on_floor(h.pos(h.player()).pos.y));
}

#[test]
fn holding_jump_in_mid_air_does_not_jump_again() {
    let mut h = Harness::new();
    h.input().jump.active = true;
    h.ticks(10);

    let jumps = h
        .audio()
        .iter()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { .. }))
        .count();
    assert_eq!(jumps, 1);
}

#[test]
fn falling_off_the_map_kills_and_respawns_the_player() {
    let mut h = Harness::new();
    let player = h.player();
    h.set_pos(player, 300.0, 840.0);
    h.tick();

    assert!(h.actor(player).is_dead());
    assert!(h.world.get::<Timer>(player).is_some());
    assert!(h.audio().contains(&AudioCmd::StopMusic {
        id: MUSIC_MAIN.to_string()
    }));
    assert!(h.audio().contains(&AudioCmd::PlayMusic {
        id: MUSIC_DEAD.to_string(),
        looped: false
    }));

    // Dead actors do not move while the respawn timer runs.
    h.ticks(60);
    assert!(h.actor(player).is_dead());
    assert_eq!(h.pos(player).pos.y, 840.0);

    h.ticks(70);
    assert!(!h.actor(player).is_dead());
    assert!(h.world.get::<Timer>(player).is_none());
    assert_eq!(h.pos(player).pos.x, PLAYER_SPAWN.x);
    assert_eq!(h.pos(player).pos.y, PLAYER_SPAWN.y);
    assert!(h.audio().contains(&AudioCmd::PlayMusic {
        id: MUSIC_MAIN.to_string(),
        looped: true
    }));
}

#[test]
fn npc_death_respawns_without_music() {
    let mut h = Harness::new();
    let npc = h.npc();
    h.set_pos(npc, 300.0, 900.0);
    h.ticks(130);

    assert!(!h.actor(npc).is_dead());
    assert!(
        !h.audio()
            .iter()
            .any(|cmd| matches!(cmd, AudioCmd::PlayMusic { .. }))
    );
}

#[test]
fn player_bump_turns_the_idle_npc_around() {
    let mut h = Harness::new();
    let npc = h.npc();
    h.set_pos(npc, 48.0, 608.0);
    h.tick();

    let actor = h.actor(npc);
    assert!(actor.facing() == Facing::Left);
    assert!(actor.in_motion());

    h.ticks(10);
    assert!(h.pos(npc).pos.x < 48.0);
    assert!(h.world.get::<Sprite>(npc).unwrap().flip_h);
}

#[test]
fn npc_stops_inside_its_stop_window() {
    let mut h = Harness::new();
    let npc = h.npc();
    h.set_pos(npc, 120.0, 608.0);
    h.world
        .get_mut::<Actor>(npc)
        .unwrap()
        .flags
        .set(ActorFlag::InMotion);
    h.tick();

    assert!(!h.actor(npc).in_motion());
}

#[test]
fn camera_follows_player_inside_map_bounds() {
    let mut h = Harness::new();
    h.tick();

    // 800x600 screen at zoom 2 shows 400x300 map pixels.
    let camera = *h.world.resource::<GameCamera>();
    assert_eq!(camera.pos.x, 0.0);
    assert!((camera.pos.y - 474.0).abs() < 1e-3);
    let rl_camera = h.world.resource::<Camera2DRes>().0;
    assert_eq!(rl_camera.target.x, camera.pos.x);
    assert_eq!(rl_camera.target.y, camera.pos.y);
    assert_eq!(rl_camera.zoom, 2.0);

    h.set_pos(h.player(), 1900.0, 608.0);
    h.tick();
    let camera = *h.world.resource::<GameCamera>();
    assert!((camera.pos.x - (1920.0 - 400.0)).abs() < 1e-3);
}

#[test]
fn free_camera_pans_with_arrow_keys() {
    let mut h = Harness::new();
    h.input().free_camera.active = true;
    h.input().camera_right.active = true;
    h.ticks(60);

    let camera = *h.world.resource::<GameCamera>();
    assert!(camera.free_mode);
    assert!((camera.pos.x - 250.0).abs() < 0.5, "x = {}", camera.pos.x);

    h.input().free_camera.active = false;
    h.input().camera_right.active = false;
    h.tick();
    let camera = *h.world.resource::<GameCamera>();
    assert!(!camera.free_mode);
    assert_eq!(camera.pos.x, 0.0);
}

#[test]
fn zoom_keys_change_and_reset_zoom() {
    let mut h = Harness::new();
    h.input().zoom_in.active = true;
    h.ticks(60);
    let zoom = h.world.resource::<GameCamera>().zoom;
    assert!((zoom - 3.0).abs() < 0.01, "zoom = {}", zoom);

    h.input().zoom_in.active = false;
    h.input().zoom_out.active = true;
    h.ticks(300);
    assert_eq!(h.world.resource::<GameCamera>().zoom, 1.0);

    h.input().zoom_out.active = false;
    h.input().zoom_reset.active = true;
    h.tick();
    assert_eq!(h.world.resource::<GameCamera>().zoom, 2.0);
}

#[test]
fn pause_freezes_the_player_and_pauses_music() {
    let mut h = Harness::new();
    h.input().pause.just_pressed = true;
    h.tick();
    h.input().pause.just_pressed = false;
    assert!(h.world.resource::<WorldTime>().is_paused());
    assert!(h.audio().contains(&AudioCmd::PauseMusic {
        id: MUSIC_MAIN.to_string()
    }));

    h.input().move_right.active = true;
    h.ticks(30);
    assert_eq!(h.pos(h.player()).pos.x, PLAYER_SPAWN.x);

    h.input().pause.just_pressed = true;
    h.tick();
    h.input().pause.just_pressed = false;
    assert!(!h.world.resource::<WorldTime>().is_paused());
    assert!(h.audio().contains(&AudioCmd::ResumeMusic {
        id: MUSIC_MAIN.to_string()
    }));
    h.ticks(10);
    assert!(h.pos(h.player()).pos.x > PLAYER_SPAWN.x);
}

#[test]
fn pausing_while_dead_pauses_the_death_tune() {
    let mut h = Harness::new();
    h.set_pos(h.player(), 300.0, 840.0);
    h.tick();
    assert!(h.actor(h.player()).is_dead());

    h.input().pause.just_pressed = true;
    h.tick();
    h.input().pause.just_pressed = false;
    assert!(h.audio().contains(&AudioCmd::PauseMusic {
        id: MUSIC_DEAD.to_string()
    }));
    assert!(!h.audio().contains(&AudioCmd::PauseMusic {
        id: MUSIC_MAIN.to_string()
    }));

    // The respawn timer does not run while paused.
    h.ticks(180);
    assert!(h.actor(h.player()).is_dead());

    h.input().pause.just_pressed = true;
    h.tick();
    assert!(h.audio().contains(&AudioCmd::ResumeMusic {
        id: MUSIC_DEAD.to_string()
    }));
}

#[test]
fn debug_key_toggles_debug_mode() {
    let mut h = Harness::new();
    h.input().mode_debug.just_pressed = true;
    h.tick();
    h.input().mode_debug.just_pressed = false;
    assert!(h.world.contains_resource::<DebugMode>());

    h.tick();
    assert!(h.world.contains_resource::<DebugMode>());

    h.input().mode_debug.just_pressed = true;
    h.tick();
    assert!(!h.world.contains_resource::<DebugMode>());
}

#[test]
fn quit_key_requests_quit() {
    let mut h = Harness::new();
    h.tick();
    assert!(!h.world.resource::<QuitRequest>().0);
    h.input().quit.active = true;
    h.tick();
    assert!(h.world.resource::<QuitRequest>().0);
}
