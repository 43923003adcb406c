//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`toggle_debug`] turns an F11 press into a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    for key in input.all_mut() {
        let binding = key.key_binding;
        key.refresh(
            rl.is_key_down(binding),
            rl.is_key_pressed(binding),
            rl.is_key_released(binding),
        );
    }
}

/// Emit a [`SwitchDebugEvent`] when the debug key was just pressed.
pub fn toggle_debug(input: Res<InputState>, mut commands: Commands) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
