use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    PauseMusic { id: String },
    ResumeMusic { id: String },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

/// Messages sent *back* from the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicFinished { id: String }, // reached end for non looping
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
