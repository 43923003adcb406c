//! Keyboard control of the player actor.
//!
//! Motion is re-evaluated every tick: the actor only keeps accelerating while
//! a direction key is held. The run/walk preset can only change on the
//! ground, so a running jump keeps its speed in the air.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::actor::{Actor, ActorFlag, Facing, Gait};
use crate::components::playercontrolled::PlayerControlled;
use crate::events::audio::AudioCmd;
use crate::resources::audio::FX_JUMP;
use crate::resources::camera::GameCamera;
use crate::resources::input::InputState;
use crate::resources::quit::QuitRequest;
use crate::resources::worldtime::WorldTime;

pub fn player_control(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut camera: ResMut<GameCamera>,
    mut quit: ResMut<QuitRequest>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut query: Query<&mut Actor, With<PlayerControlled>>,
) {
    if input.quit.active && !quit.0 {
        info!("Quit requested");
        quit.0 = true;
    }
    camera.free_mode = input.free_camera.active;

    if time.is_paused() {
        return;
    }

    for mut actor in query.iter_mut() {
        if actor.is_dead() {
            continue;
        }
        actor.flags.clear(ActorFlag::InMotion);

        if !actor.in_mid_air() {
            actor.set_gait(if input.run.active { Gait::Run } else { Gait::Walk });
        }
        if input.move_left.active {
            actor.turn(Facing::Left);
        }
        if input.move_right.active {
            actor.turn(Facing::Right);
        }
        if input.jump.active && actor.start_jump() {
            audio_cmds.write(AudioCmd::PlayFx {
                id: FX_JUMP.to_string(),
            });
        }
    }
}
