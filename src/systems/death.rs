//! Death and respawn.
//!
//! Falling out of the world sets the actor's `IsDead` flag during the physics
//! step. [`detect_deaths`] reacts to it by attaching a respawn [`Timer`]; for
//! the player it also swaps the level music for the death tune. When the
//! timer fires, [`respawn_observer`] puts the actor back at its spawn point.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::timer::Timer;
use crate::events::audio::AudioCmd;
use crate::events::timer::TimerEvent;
use crate::resources::audio::{MUSIC_DEAD, MUSIC_MAIN};

/// Seconds between death and respawn.
pub const RESPAWN_DELAY: f32 = 2.0;
pub const RESPAWN_SIGNAL: &str = "respawn";

pub fn detect_deaths(
    mut commands: Commands,
    query: Query<(Entity, &Actor, Has<PlayerControlled>), Without<Timer>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for (entity, actor, is_player) in query.iter() {
        if !actor.is_dead() {
            continue;
        }
        commands
            .entity(entity)
            .insert(Timer::new(RESPAWN_DELAY, RESPAWN_SIGNAL));
        if is_player {
            info!("Player died");
            audio_cmds.write(AudioCmd::StopMusic {
                id: MUSIC_MAIN.to_string(),
            });
            audio_cmds.write(AudioCmd::PlayMusic {
                id: MUSIC_DEAD.to_string(),
                looped: false,
            });
        }
    }
}

pub fn respawn_observer(
    trigger: On<TimerEvent>,
    mut query: Query<(&mut Actor, &mut MapPosition, Has<PlayerControlled>)>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    if event.signal != RESPAWN_SIGNAL {
        return;
    }
    let Ok((mut actor, mut position, is_player)) = query.get_mut(event.entity) else {
        return;
    };
    actor.respawn(&mut position.pos);
    if is_player {
        info!("Player respawned at ({}, {})", position.pos.x, position.pos.y);
        audio_cmds.write(AudioCmd::StopMusic {
            id: MUSIC_DEAD.to_string(),
        });
        audio_cmds.write(AudioCmd::PlayMusic {
            id: MUSIC_MAIN.to_string(),
            looped: true,
        });
    }
}
