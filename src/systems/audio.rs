//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, answering with [`AudioMessage`]s.
//! - [`forward_audio_cmds`] sends the commands written this frame to the
//!   thread, or drops them when audio is disabled.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue.
//! - [`log_audio_messages`] reports load failures.
//!
//! Raylib audio calls stay on one thread; the game thread only talks to it
//! over channels. Music streams need periodic `update_stream()` calls, which
//! the thread loop takes care of.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
///
/// Without a bridge (audio disabled) the commands are consumed and dropped.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    match bridge {
        Some(bridge) => {
            for cmd in reader.read() {
                // ignore send error on shutdown
                let _ = bridge.tx_cmd.send(cmd.clone());
            }
        }
        None => {
            for cmd in reader.read() {
                debug!("audio disabled, dropping {:?}", cmd);
            }
        }
    }
}

/// Drain any pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(
    bridge: Option<Res<AudioBridge>>,
    mut writer: MessageWriter<AudioMessage>,
) {
    if let Some(bridge) = bridge {
        writer.write_batch(bridge.rx_msg.try_iter());
    }
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Missing sound files are not fatal; they are reported once here.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("music '{}' could not be loaded: {}", id, error)
            }
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("sound '{}' could not be loaded: {}", id, error)
            }
            other => debug!("audio: {:?}", other),
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns the Raylib audio device and every `Music`/`Sound` handle. Drains
/// commands without blocking, pumps the playing streams, restarts looped
/// tracks and reports finished ones, then sleeps briefly. Returns after
/// [`AudioCmd::Shutdown`] or when the game side hung up.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            return;
        }
    };

    info!("[audio] thread starting (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        // 1) Drain commands
        loop {
            let cmd = match rx_cmd.try_recv() {
                Ok(cmd) => cmd,
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => break 'run,
            };
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("[audio] loaded id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] play start id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] stop id='{}'", id);
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                    }
                }
                AudioCmd::PauseMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] pause id='{}'", id);
                        music.pause_stream();
                        playing.remove(&id);
                    }
                }
                AudioCmd::ResumeMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] resume id='{}'", id);
                        music.resume_stream();
                        playing.insert(id);
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    } else {
                        debug!("[audio] fx play skipped id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    break 'run;
                }
            }
        }

        // 2) Pump streaming + detect ends.
        //    If a track ended and isn't looped, emit Finished exactly once.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended {
            if looped.contains(&id) {
                if let Some(music) = musics.get(&id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                    let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                }
            } else {
                debug!("[audio] finished id='{}'", id);
                playing.remove(&id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id });
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    musics.clear();
    sounds.clear();
    info!("[audio] thread exiting (id={:?})", std::thread::current().id());
    // musics and sounds drop before `audio`
}
