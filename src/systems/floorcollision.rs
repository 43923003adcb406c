use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, ActorFlag};
use crate::components::mapposition::MapPosition;
use crate::resources::tilemap::{TileMap, TileTypeSource};

/// Tile type actors can stand on.
pub const FLOOR: &str = "floor";

/// Ground an actor when the tile under its feet is floor, otherwise mark it airborne.
pub fn update_mid_air(actor: &mut Actor, position: &MapPosition, tiles: &impl TileTypeSource) {
    let feet_y = position.pos.y + actor.height;
    let grounded = tiles.is_tile_of_type(position.pos.x, feet_y, FLOOR);
    actor.flags.assign(ActorFlag::InMidAir, !grounded);
}

pub fn floor_collision(map: Res<TileMap>, mut query: Query<(&mut Actor, &MapPosition)>) {
    for (mut actor, position) in query.iter_mut() {
        if actor.is_dead() {
            continue;
        }
        update_mid_air(&mut actor, position, &*map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    /// Floor along one pixel row, everything else air.
    struct FlatFloor {
        y: f32,
    }

    impl TileTypeSource for FlatFloor {
        fn is_tile_of_type(&self, _x: f32, y: f32, tile_type: &str) -> bool {
            tile_type == FLOOR && y >= self.y && y < self.y + 32.0
        }

        fn pixel_size(&self) -> (f32, f32) {
            (1000.0, 1000.0)
        }
    }

    fn actor() -> Actor {
        Actor::new(32.0, 32.0, 1000.0, 1000.0, Vector2 { x: 0.0, y: 0.0 })
    }

    #[test]
    fn standing_on_floor_clears_mid_air() {
        let mut a = actor();
        a.flags.set(ActorFlag::InMidAir);
        update_mid_air(&mut a, &MapPosition::new(10.0, 468.0), &FlatFloor { y: 500.0 });
        assert!(!a.in_mid_air());
    }

    #[test]
    fn above_floor_is_mid_air() {
        let mut a = actor();
        update_mid_air(&mut a, &MapPosition::new(10.0, 400.0), &FlatFloor { y: 500.0 });
        assert!(a.in_mid_air());
    }
}
