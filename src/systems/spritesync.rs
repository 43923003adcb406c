use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::sprite::Sprite;

/// Copy the current animation frame and facing of each actor into its sprite.
pub fn sync_actor_sprites(mut query: Query<(&Actor, &mut Sprite)>) {
    for (actor, mut sprite) in query.iter_mut() {
        sprite.offset = actor.animation.source_origin();
        sprite.flip_h = actor.flip_h();
    }
}
