use bevy_ecs::prelude::Resource;

/// Set by the player controller when the quit key is pressed; the main loop
/// exits after the current frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuitRequest(pub bool);
