use bevy_ecs::prelude::Resource;

/// Longest frame delta (seconds) fed to the simulation.
///
/// Window drags or a debugger pause produce huge deltas that would teleport
/// actors through the floor.
pub const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }

    /// Flip between frozen and normal speed. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.time_scale = if self.is_paused() { 1.0 } else { 0.0 };
        self.is_paused()
    }
}
