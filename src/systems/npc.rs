//! NPC behaviour.
//!
//! An idle NPC that touches the player turns around and starts walking. Stop
//! windows from [`NpcPatrol`] halt it before it walks off a ledge.

use bevy_ecs::prelude::*;

use crate::components::aabb::Aabb;
use crate::components::actor::{Actor, ActorFlag};
use crate::components::mapposition::MapPosition;
use crate::components::npcpatrol::NpcPatrol;
use crate::components::playercontrolled::PlayerControlled;

pub fn npc_behaviour(
    players: Query<&Actor, (With<PlayerControlled>, Without<NpcPatrol>)>,
    mut npcs: Query<(&mut Actor, &MapPosition, &NpcPatrol), Without<PlayerControlled>>,
) {
    let player_boxes: Vec<Aabb> = players.iter().map(|p| p.bb).collect();

    for (mut npc, position, patrol) in npcs.iter_mut() {
        if npc.is_dead() {
            continue;
        }
        let bumped = player_boxes.iter().any(|bb| bb.intersects(&npc.bb));
        if bumped && !npc.in_motion() {
            npc.flags.toggle(ActorFlag::Direction);
            npc.flags.set(ActorFlag::InMotion);
        }
        if patrol.should_stop(position.pos.x, npc.facing()) {
            npc.flags.clear(ActorFlag::InMotion);
        }
    }
}
