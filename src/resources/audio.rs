//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`]. [`init_audio_messages`] registers the
//! message queues and is enough on its own when audio is disabled: commands
//! are then dropped by the forwarding system. Call [`shutdown_audio`] during
//! teardown to stop the thread and free audio resources.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{info, warn};

/// Background tune played during the level.
pub const MUSIC_MAIN: &str = "main";
/// Short tune played when the player dies.
pub const MUSIC_DEAD: &str = "dead";
pub const FX_JUMP: &str = "jump";

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Insert the `Messages<AudioCmd>` and `Messages<AudioMessage>` queues.
pub fn init_audio_messages(world: &mut World) {
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Spawn the audio thread and register bridge resources.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let spawned = std::thread::Builder::new()
        .name("audio".into())
        .spawn(move || audio_thread(rx_cmd, tx_msg));

    init_audio_messages(world);
    match spawned {
        Ok(handle) => {
            world.insert_resource(AudioBridge {
                tx_cmd,
                rx_msg,
                handle,
            });
            info!("Audio thread started");
        }
        Err(e) => warn!("Could not start audio thread, continuing without sound: {}", e),
    }
}

/// Request shutdown of the audio thread and join it.
///
/// Safe to call when audio never started.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if bridge.handle.join().is_err() {
            warn!("Audio thread panicked during shutdown");
        }
    }
}
