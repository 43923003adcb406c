//! Patrol behaviour for non-playable characters.
//!
//! An NPC walks in one direction until it bumps into the player, who turns it
//! around. Stop windows keep it from walking off the ledges of the level: when
//! the NPC is inside a window and facing the window's direction it stops.

use bevy_ecs::prelude::Component;

use crate::components::actor::Facing;

/// Horizontal range where an NPC facing `facing` comes to a halt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopWindow {
    pub min_x: f32,
    pub max_x: f32,
    pub facing: Facing,
}

impl StopWindow {
    pub fn new(min_x: f32, max_x: f32, facing: Facing) -> Self {
        Self { min_x, max_x, facing }
    }

    /// True when an actor at `x` facing `facing` must stop.
    pub fn halts(&self, x: f32, facing: Facing) -> bool {
        facing == self.facing && x > self.min_x && x < self.max_x
    }
}

#[derive(Component, Clone, Debug)]
pub struct NpcPatrol {
    pub stops: Vec<StopWindow>,
}

impl NpcPatrol {
    pub fn new(stops: Vec<StopWindow>) -> Self {
        Self { stops }
    }

    pub fn should_stop(&self, x: f32, facing: Facing) -> bool {
        self.stops.iter().any(|w| w.halts(x, facing))
    }
}

impl Default for NpcPatrol {
    /// Ledges of the first level.
    fn default() -> Self {
        Self::new(vec![
            StopWindow::new(1632.0, 1648.0, Facing::Left),
            StopWindow::new(112.0, 128.0, Facing::Right),
        ])
    }
}
