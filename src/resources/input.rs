//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. A/D walk, left shift runs,
//! space jumps; F plus the arrow keys pans the free camera.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    pub fn refresh(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub run: BoolState,
    pub jump: BoolState,
    // Camera
    pub free_camera: BoolState,
    pub camera_up: BoolState,
    pub camera_down: BoolState,
    pub camera_left: BoolState,
    pub camera_right: BoolState,
    pub zoom_reset: BoolState,
    pub zoom_out: BoolState,
    pub zoom_in: BoolState,
    // Special keys
    pub pause: BoolState,
    pub quit: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound(KeyboardKey::KEY_A),
            move_right: BoolState::bound(KeyboardKey::KEY_D),
            run: BoolState::bound(KeyboardKey::KEY_LEFT_SHIFT),
            jump: BoolState::bound(KeyboardKey::KEY_SPACE),
            free_camera: BoolState::bound(KeyboardKey::KEY_F),
            camera_up: BoolState::bound(KeyboardKey::KEY_UP),
            camera_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            camera_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            camera_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            zoom_reset: BoolState::bound(KeyboardKey::KEY_ONE),
            zoom_out: BoolState::bound(KeyboardKey::KEY_TWO),
            zoom_in: BoolState::bound(KeyboardKey::KEY_THREE),
            pause: BoolState::bound(KeyboardKey::KEY_P),
            quit: BoolState::bound(KeyboardKey::KEY_Q),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Every tracked key, for polling in one pass.
    pub fn all_mut(&mut self) -> [&mut BoolState; 15] {
        [
            &mut self.move_left,
            &mut self.move_right,
            &mut self.run,
            &mut self.jump,
            &mut self.free_camera,
            &mut self.camera_up,
            &mut self.camera_down,
            &mut self.camera_left,
            &mut self.camera_right,
            &mut self.zoom_reset,
            &mut self.zoom_out,
            &mut self.zoom_in,
            &mut self.pause,
            &mut self.quit,
            &mut self.mode_debug,
        ]
    }
}
