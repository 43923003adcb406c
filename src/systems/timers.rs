use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Count down every [`Timer`] and fire a [`TimerEvent`] once it expires.
///
/// Expired timers are removed from their entity, so each fires exactly once.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        timer.elapsed += world_time.delta;
        if timer.is_finished() {
            commands.entity(entity).remove::<Timer>();
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
        }
    }
}
