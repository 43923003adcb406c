use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

/// Advance every living actor by the frame delta.
///
/// Dead actors stay frozen until they are respawned.
pub fn actor_physics(time: Res<WorldTime>, mut query: Query<(&mut Actor, &mut MapPosition)>) {
    for (mut actor, mut position) in query.iter_mut() {
        if actor.is_dead() {
            continue;
        }
        actor.step(&mut position.pos, time.delta);
    }
}
