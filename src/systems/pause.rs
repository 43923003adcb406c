//! Pause toggle.
//!
//! P freezes the simulation by zeroing the time scale and pauses whichever
//! tune is playing: the death tune while the player is dead, the level music
//! otherwise.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::actor::Actor;
use crate::components::playercontrolled::PlayerControlled;
use crate::events::audio::AudioCmd;
use crate::resources::audio::{MUSIC_DEAD, MUSIC_MAIN};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn toggle_pause(
    input: Res<InputState>,
    mut time: ResMut<WorldTime>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    player: Query<&Actor, With<PlayerControlled>>,
) {
    if !input.pause.just_pressed {
        return;
    }
    let track = if player.iter().any(|actor| actor.is_dead()) {
        MUSIC_DEAD
    } else {
        MUSIC_MAIN
    };
    let id = track.to_string();
    if time.toggle_pause() {
        info!("Game paused");
        audio_cmds.write(AudioCmd::PauseMusic { id });
    } else {
        info!("Game resumed");
        audio_cmds.write(AudioCmd::ResumeMusic { id });
    }
}
