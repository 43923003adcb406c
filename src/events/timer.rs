//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered for the entity and the timer is
//! removed. The respawn observer listens for the `"respawn"` signal.
//!
//! # Related
//!
//! - [`crate::components::timer::Timer`] – the timer component
//! - [`crate::systems::timers::update_timers`] – the system that emits these events

use bevy_ecs::prelude::*;

/// Event emitted when a timer expires.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}
