use bevy_ecs::prelude::Component;

/// Marks the actor driven by the keyboard. The camera follows it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PlayerControlled;
