//! Simulated actors (the player and NPCs).
//!
//! An [`Actor`] carries everything the per-tick simulation needs: horizontal
//! speed, fall speed, the jump snapshot, a small flag set, the bounding box,
//! sprite-sheet animation state and the world extents used for wraparound and
//! the death check. Position lives in
//! [`MapPosition`](crate::components::mapposition::MapPosition) and is passed
//! to [`Actor::step`] by the physics system.
//!
//! # Tick order
//!
//! [`Actor::step`] runs, in this order:
//! 1. rebuild the bounding box from the current position
//! 2. accelerate or decelerate, clamp to `[0, velocity_max]`
//! 3. advance the walk/run animation
//! 4. move horizontally in the facing direction
//! 5. apply the jump arc or gravity while airborne
//! 6. wrap around the horizontal world edges
//! 7. flag the actor dead once it fell below the world

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::aabb::Aabb;

/// First frame of the walk cycle in the sprite sheet row.
pub const WALK: u8 = 0;
/// One past the last walk frame.
pub const WALK_MAX: u8 = 3;
/// First frame of the run cycle.
pub const RUN: u8 = 14;
/// One past the last run frame.
pub const RUN_MAX: u8 = 17;

pub const WALK_VELOCITY_MAX: f32 = 100.0;
pub const RUN_VELOCITY_MAX: f32 = 250.0;

/// Size of one sprite sheet cell in pixels.
pub const SPRITE_CELL: f32 = 32.0;

const DEFAULT_ACCELERATION: f32 = 400.0;
const DEFAULT_DECELERATION: f32 = 300.0;
const DEFAULT_FPS: f32 = 12.0;
/// Slack for f32 accumulation error when comparing against a frame period.
const FRAME_TIME_EPSILON: f32 = 1e-6;

/// Named bits of [`ActorFlags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActorFlag {
    /// Clear when facing right, set when facing left.
    Direction = 0,
    IsDead = 1,
    InMidAir = 2,
    InMotion = 3,
    IsJumping = 4,
}

impl ActorFlag {
    fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Compact set of [`ActorFlag`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActorFlags(u8);

impl ActorFlags {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn has(self, flag: ActorFlag) -> bool {
        self.0 & flag.mask() != 0
    }

    pub fn set(&mut self, flag: ActorFlag) {
        self.0 |= flag.mask();
    }

    pub fn clear(&mut self, flag: ActorFlag) {
        self.0 &= !flag.mask();
    }

    pub fn toggle(&mut self, flag: ActorFlag) {
        self.0 ^= flag.mask();
    }

    /// Set the flag when `on` is true, clear it otherwise.
    pub fn assign(&mut self, flag: ActorFlag, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// Horizontal facing, stored in [`ActorFlag::Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

/// Walk or run preset: frame range plus top speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gait {
    Walk,
    Run,
}

/// Sprite-sheet animation state of an actor.
///
/// Frames are indices into one row of 32x32 cells; `row_offset` selects the
/// row (in pixels) so several characters can share a sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameAnimation {
    pub frame: u8,
    pub frame_start: u8,
    /// Exclusive upper bound of the cycle.
    pub frame_end: u8,
    pub fps: f32,
    /// Seconds accumulated towards the next frame.
    pub frame_time: f32,
    pub row_offset: f32,
}

impl Default for FrameAnimation {
    fn default() -> Self {
        Self {
            frame: WALK,
            frame_start: WALK,
            frame_end: WALK_MAX,
            fps: DEFAULT_FPS,
            frame_time: 0.0,
            row_offset: 0.0,
        }
    }
}

impl FrameAnimation {
    fn tick(&mut self, dt: f32) {
        self.frame_time += dt;
        if self.fps > 0.0 && self.frame_time + FRAME_TIME_EPSILON >= 1.0 / self.fps {
            self.frame = self.frame.saturating_add(1);
            self.frame_time = 0.0;
        }
    }

    fn wrap(&mut self) {
        if self.frame >= self.frame_end || self.frame < self.frame_start {
            self.frame = self.frame_start;
        }
    }

    /// Source rectangle origin of the current frame inside the sprite sheet.
    pub fn source_origin(&self) -> Vector2 {
        Vector2 {
            x: self.frame as f32 * SPRITE_CELL,
            y: self.row_offset,
        }
    }
}

/// Gravity and jump constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorTuning {
    /// How many pixels make one meter.
    pub meter_in_pixel: f32,
    /// Gravitational acceleration in m/s².
    pub gravitation: f32,
    /// Fall speed magnitude (pixels per tick) that ends the ascent of a jump.
    pub jump_threshold: f32,
    /// Multiplier applied to the inverted gravity while ascending.
    pub jump_boost: f32,
    /// Terminal fall speed in pixels per tick.
    pub velocity_fall_max: f32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            meter_in_pixel: 32.0,
            gravitation: 9.81,
            jump_threshold: 4.0,
            jump_boost: 2.0,
            velocity_fall_max: 12.0,
        }
    }
}

/// A simulated character.
#[derive(Component, Clone, Debug)]
pub struct Actor {
    pub flags: ActorFlags,
    /// Horizontal speed in px/s, always within `[0, velocity_max]`.
    pub velocity: f32,
    pub velocity_max: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Vertical displacement per tick; negative while rising.
    pub velocity_fall: f32,
    /// Horizontal speed captured when the jump started.
    pub velocity_jump: f32,
    pub width: f32,
    pub height: f32,
    pub bb: Aabb,
    pub animation: FrameAnimation,
    pub tuning: ActorTuning,
    pub world_width: f32,
    pub world_height: f32,
    pub spawn: Vector2,
}

impl Actor {
    /// Create an idle, right-facing actor for a world of the given pixel size.
    pub fn new(width: f32, height: f32, world_width: f32, world_height: f32, spawn: Vector2) -> Self {
        Self {
            flags: ActorFlags::empty(),
            velocity: 0.0,
            velocity_max: WALK_VELOCITY_MAX,
            acceleration: DEFAULT_ACCELERATION,
            deceleration: DEFAULT_DECELERATION,
            velocity_fall: 0.0,
            velocity_jump: 0.0,
            width,
            height,
            bb: Aabb::from_rect(spawn.x, spawn.y, width, height),
            animation: FrameAnimation::default(),
            tuning: ActorTuning::default(),
            world_width,
            world_height,
            spawn,
        }
    }

    pub fn with_tuning(mut self, tuning: ActorTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Select the sprite sheet row (in pixels) used by this actor.
    pub fn with_row_offset(mut self, row_offset: f32) -> Self {
        self.animation.row_offset = row_offset;
        self
    }

    pub fn facing(&self) -> Facing {
        if self.flags.has(ActorFlag::Direction) {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.flags.assign(ActorFlag::Direction, facing == Facing::Left);
    }

    pub fn in_motion(&self) -> bool {
        self.flags.has(ActorFlag::InMotion)
    }

    pub fn in_mid_air(&self) -> bool {
        self.flags.has(ActorFlag::InMidAir)
    }

    pub fn is_dead(&self) -> bool {
        self.flags.has(ActorFlag::IsDead)
    }

    pub fn is_jumping(&self) -> bool {
        self.flags.has(ActorFlag::IsJumping)
    }

    /// Sprites face right in the sheet, so left-facing actors draw mirrored.
    pub fn flip_h(&self) -> bool {
        self.facing() == Facing::Left
    }

    /// Switch between the walk and run presets.
    pub fn set_gait(&mut self, gait: Gait) {
        let (start, end, max) = match gait {
            Gait::Walk => (WALK, WALK_MAX, WALK_VELOCITY_MAX),
            Gait::Run => (RUN, RUN_MAX, RUN_VELOCITY_MAX),
        };
        self.animation.frame_start = start;
        self.animation.frame_end = end;
        self.velocity_max = max;
    }

    /// Face `facing` and mark the actor as moving.
    ///
    /// Turning around negates the current speed; the next step clamps it so
    /// the actor stops before accelerating the other way.
    pub fn turn(&mut self, facing: Facing) {
        if self.facing() != facing {
            self.velocity = -self.velocity;
        }
        self.set_facing(facing);
        self.flags.set(ActorFlag::InMotion);
    }

    /// Start a jump if the actor stands on the ground.
    ///
    /// Returns `true` when a jump was started.
    pub fn start_jump(&mut self) -> bool {
        if self.in_mid_air() || self.is_jumping() {
            return false;
        }
        self.flags.set(ActorFlag::IsJumping);
        self.velocity_jump = self.velocity;
        true
    }

    /// Advance the actor by `dt` seconds.
    pub fn step(&mut self, position: &mut Vector2, dt: f32) {
        let dt = dt.max(0.0);

        self.bb = Aabb::from_rect(position.x, position.y, self.width, self.height);

        if self.in_motion() {
            self.velocity += self.acceleration * dt;
        } else {
            self.velocity -= self.deceleration * dt;
        }
        if self.velocity > self.velocity_max {
            self.velocity = self.velocity_max;
        }
        if self.velocity <= 0.0 {
            self.velocity = 0.0;
            self.animation.frame = self.animation.frame_start;
        }

        if self.in_motion() {
            self.animation.tick(dt);
        }
        self.animation.wrap();

        if self.velocity > 0.0 {
            match self.facing() {
                Facing::Left => position.x -= self.velocity * dt,
                Facing::Right => position.x += self.velocity * dt,
            }
        }

        if self.is_jumping() {
            self.flags.set(ActorFlag::InMidAir);
        }
        if self.in_mid_air() {
            let mut g = self.tuning.meter_in_pixel * self.tuning.gravitation;
            if self.is_jumping() {
                if self.velocity_fall.abs() < self.tuning.jump_threshold {
                    g = -(g + self.velocity_jump) * self.tuning.jump_boost;
                } else {
                    self.flags.clear(ActorFlag::IsJumping);
                }
            }
            self.velocity_fall += g * dt * dt;
            if self.velocity_fall > self.tuning.velocity_fall_max {
                self.velocity_fall = self.tuning.velocity_fall_max;
            }
            position.y += self.velocity_fall;
        } else {
            self.velocity_fall = 0.0;
            self.flags.clear(ActorFlag::IsJumping);
        }

        let half_width = self.width / 2.0;
        if position.x < -half_width {
            position.x = self.world_width - half_width;
        } else if position.x > self.world_width - half_width {
            position.x = 0.0;
        }

        if position.y > self.world_height + self.height {
            self.flags.set(ActorFlag::IsDead);
        }
    }

    /// Put a dead (or stuck) actor back at its spawn point, idle and facing right.
    pub fn respawn(&mut self, position: &mut Vector2) {
        *position = self.spawn;
        self.flags.clear(ActorFlag::IsDead);
        self.flags.clear(ActorFlag::InMotion);
        self.flags.clear(ActorFlag::Direction);
        self.flags.clear(ActorFlag::IsJumping);
        self.velocity = 0.0;
        self.velocity_fall = 0.0;
        self.velocity_jump = 0.0;
        self.animation.frame = self.animation.frame_start;
        self.animation.frame_time = 0.0;
        self.bb = Aabb::from_rect(position.x, position.y, self.width, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn actor_at(x: f32, y: f32) -> (Actor, Vector2) {
        let pos = Vector2 { x, y };
        (Actor::new(32.0, 32.0, 1600.0, 640.0, pos), pos)
    }

    // ==================== FLAGS ====================

    #[test]
    fn flags_set_clear_toggle() {
        let mut flags = ActorFlags::empty();
        assert!(!flags.has(ActorFlag::InMotion));
        flags.set(ActorFlag::InMotion);
        assert!(flags.has(ActorFlag::InMotion));
        flags.toggle(ActorFlag::Direction);
        assert!(flags.has(ActorFlag::Direction));
        flags.toggle(ActorFlag::Direction);
        assert!(!flags.has(ActorFlag::Direction));
        flags.clear(ActorFlag::InMotion);
        assert_eq!(flags, ActorFlags::empty());
    }

    #[test]
    fn flags_assign() {
        let mut flags = ActorFlags::empty();
        flags.assign(ActorFlag::InMidAir, true);
        assert!(flags.has(ActorFlag::InMidAir));
        flags.assign(ActorFlag::InMidAir, false);
        assert!(!flags.has(ActorFlag::InMidAir));
    }

    #[test]
    fn facing_maps_to_direction_bit() {
        let (mut actor, _) = actor_at(0.0, 0.0);
        assert_eq!(actor.facing(), Facing::Right);
        actor.set_facing(Facing::Left);
        assert!(actor.flags.has(ActorFlag::Direction));
        assert!(actor.flip_h());
    }

    // ==================== HORIZONTAL VELOCITY ====================

    #[test]
    fn velocity_decays_monotonically_to_zero() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.velocity = 90.0;
        let mut last = actor.velocity;
        for _ in 0..200 {
            actor.step(&mut pos, 1.0 / 60.0);
            assert!(actor.velocity <= last);
            assert!(actor.velocity >= 0.0);
            last = actor.velocity;
        }
        assert_eq!(actor.velocity, 0.0);
    }

    #[test]
    fn zero_dt_keeps_velocity() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.velocity = 50.0;
        actor.step(&mut pos, 0.0);
        assert!(approx_eq(actor.velocity, 50.0));
        assert!(approx_eq(pos.x, 100.0));
    }

    #[test]
    fn velocity_clamps_at_max_while_moving() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.flags.set(ActorFlag::InMotion);
        for _ in 0..120 {
            actor.step(&mut pos, 1.0 / 60.0);
            assert!(actor.velocity <= actor.velocity_max);
        }
        assert!(approx_eq(actor.velocity, WALK_VELOCITY_MAX));
    }

    #[test]
    fn moves_in_facing_direction() {
        let (mut actor, mut pos) = actor_at(500.0, 100.0);
        actor.velocity = 100.0;
        actor.flags.set(ActorFlag::InMotion);
        actor.step(&mut pos, 0.1);
        assert!(approx_eq(pos.x, 510.0));

        actor.set_facing(Facing::Left);
        actor.step(&mut pos, 0.1);
        assert!(approx_eq(pos.x, 500.0));
    }

    #[test]
    fn stopping_resets_frame_to_start() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.animation.frame = 2;
        actor.velocity = 1.0;
        actor.step(&mut pos, 0.5);
        assert_eq!(actor.velocity, 0.0);
        assert_eq!(actor.animation.frame, actor.animation.frame_start);
    }

    #[test]
    fn turning_around_stops_before_reversing() {
        let (mut actor, mut pos) = actor_at(500.0, 100.0);
        actor.turn(Facing::Right);
        actor.velocity = 80.0;
        actor.turn(Facing::Left);
        assert_eq!(actor.facing(), Facing::Left);
        assert!(approx_eq(actor.velocity, -80.0));
        actor.step(&mut pos, 0.01);
        assert_eq!(actor.velocity, 0.0);
        assert!(approx_eq(pos.x, 500.0));
    }

    #[test]
    fn gait_switch_changes_range_and_top_speed() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.set_gait(Gait::Run);
        assert_eq!(actor.animation.frame_start, RUN);
        assert_eq!(actor.animation.frame_end, RUN_MAX);
        assert_eq!(actor.velocity_max, RUN_VELOCITY_MAX);

        actor.flags.set(ActorFlag::InMotion);
        actor.step(&mut pos, 0.01);
        assert!(actor.animation.frame >= RUN && actor.animation.frame < RUN_MAX);

        actor.set_gait(Gait::Walk);
        actor.step(&mut pos, 0.01);
        assert!(actor.animation.frame < WALK_MAX);
    }

    // ==================== ANIMATION ====================

    #[test]
    fn animation_advances_once_frame_period_elapsed() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.animation.fps = 4.0;
        actor.flags.set(ActorFlag::InMotion);

        actor.step(&mut pos, 0.1);
        actor.step(&mut pos, 0.1);
        assert_eq!(actor.animation.frame, WALK);
        actor.step(&mut pos, 0.1);
        assert_eq!(actor.animation.frame, WALK + 1);
    }

    #[test]
    fn animation_advances_on_exact_multiple_of_frame_period() {
        // Five 50 Hz ticks add up to one 10 fps frame, but the f32 sum lands
        // just below 0.1.
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.animation.fps = 10.0;
        actor.flags.set(ActorFlag::InMotion);

        for _ in 0..4 {
            actor.step(&mut pos, 1.0 / 50.0);
        }
        assert_eq!(actor.animation.frame, WALK);
        actor.step(&mut pos, 1.0 / 50.0);
        assert_eq!(actor.animation.frame, WALK + 1);
    }

    #[test]
    fn animation_wraps_at_frame_end() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.animation.fps = 4.0;
        actor.flags.set(ActorFlag::InMotion);

        let mut seen = Vec::new();
        for _ in 0..4 {
            actor.step(&mut pos, 0.25);
            seen.push(actor.animation.frame);
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn frame_stays_in_range() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.flags.set(ActorFlag::InMotion);
        for i in 0..500 {
            actor.step(&mut pos, 0.013 * (i % 7) as f32);
            let anim = actor.animation;
            assert!(anim.frame >= anim.frame_start && anim.frame < anim.frame_end);
        }
    }

    #[test]
    fn source_origin_uses_frame_and_row() {
        let (actor, _) = actor_at(0.0, 0.0);
        let mut anim = actor.with_row_offset(64.0).animation;
        anim.frame = 2;
        let origin = anim.source_origin();
        assert!(approx_eq(origin.x, 64.0));
        assert!(approx_eq(origin.y, 64.0));
    }

    // ==================== WRAPAROUND ====================

    #[test]
    fn wraps_from_right_edge_to_zero() {
        let (mut actor, _) = actor_at(0.0, 100.0);
        let mut pos = Vector2 {
            x: actor.world_width - actor.width / 2.0 + 0.5,
            y: 100.0,
        };
        actor.step(&mut pos, 0.0);
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn wraps_from_left_edge_to_right() {
        let (mut actor, _) = actor_at(0.0, 100.0);
        let mut pos = Vector2 {
            x: -actor.width / 2.0 - 0.5,
            y: 100.0,
        };
        actor.step(&mut pos, 0.0);
        assert!(approx_eq(pos.x, actor.world_width - actor.width / 2.0));
        // Landing exactly on the right boundary does not bounce back.
        actor.step(&mut pos, 0.0);
        assert!(approx_eq(pos.x, actor.world_width - actor.width / 2.0));
    }

    // ==================== VERTICAL ====================

    #[test]
    fn grounded_actor_keeps_height_and_resets_fall() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.velocity_fall = 3.0;
        actor.step(&mut pos, 1.0 / 60.0);
        assert_eq!(actor.velocity_fall, 0.0);
        assert!(approx_eq(pos.y, 100.0));
    }

    #[test]
    fn airborne_actor_accelerates_downwards() {
        let (mut actor, mut pos) = actor_at(100.0, 100.0);
        actor.flags.set(ActorFlag::InMidAir);
        let dt = 1.0 / 60.0;
        actor.step(&mut pos, dt);
        let g = actor.tuning.meter_in_pixel * actor.tuning.gravitation;
        assert!(approx_eq(actor.velocity_fall, g * dt * dt));
        assert!(approx_eq(pos.y, 100.0 + g * dt * dt));
        let first = actor.velocity_fall;
        actor.step(&mut pos, dt);
        assert!(actor.velocity_fall > first);
    }

    #[test]
    fn fall_speed_is_capped() {
        let (mut actor, mut pos) = actor_at(100.0, -10000.0);
        actor.flags.set(ActorFlag::InMidAir);
        for _ in 0..1000 {
            actor.step(&mut pos, 0.1);
            assert!(actor.velocity_fall <= actor.tuning.velocity_fall_max);
        }
    }

    #[test]
    fn jump_rises_then_falls() {
        let (mut actor, mut pos) = actor_at(100.0, 300.0);
        assert!(actor.start_jump());
        assert!(!actor.start_jump());

        let dt = 1.0 / 60.0;
        actor.step(&mut pos, dt);
        assert!(actor.in_mid_air());
        assert!(actor.velocity_fall < 0.0);
        assert!(pos.y < 300.0);

        let mut ticks = 0;
        while actor.is_jumping() && ticks < 1000 {
            actor.step(&mut pos, dt);
            ticks += 1;
        }
        assert!(!actor.is_jumping());
        assert!(actor.velocity_fall.abs() >= actor.tuning.jump_threshold);

        let apex_wait = (0..1000).find(|_| {
            actor.step(&mut pos, dt);
            actor.velocity_fall > 0.0
        });
        assert!(apex_wait.is_some());
    }

    #[test]
    fn jump_snapshot_takes_horizontal_speed() {
        let (mut actor, _) = actor_at(100.0, 300.0);
        actor.velocity = 75.0;
        actor.start_jump();
        assert!(approx_eq(actor.velocity_jump, 75.0));
    }

    #[test]
    fn airborne_actor_cannot_jump() {
        let (mut actor, _) = actor_at(100.0, 300.0);
        actor.flags.set(ActorFlag::InMidAir);
        assert!(!actor.start_jump());
        assert!(!actor.is_jumping());
    }

    // ==================== DEATH / RESPAWN ====================

    #[test]
    fn falling_below_world_kills() {
        let (mut actor, _) = actor_at(100.0, 100.0);
        let mut pos = Vector2 {
            x: 100.0,
            y: actor.world_height + actor.height + 1.0,
        };
        actor.step(&mut pos, 1.0 / 60.0);
        assert!(actor.is_dead());
    }

    #[test]
    fn at_world_bottom_is_still_alive() {
        let (mut actor, _) = actor_at(100.0, 100.0);
        let mut pos = Vector2 {
            x: 100.0,
            y: actor.world_height + actor.height,
        };
        actor.step(&mut pos, 0.0);
        assert!(!actor.is_dead());
    }

    #[test]
    fn respawn_restores_spawn_and_clears_state() {
        let (mut actor, mut pos) = actor_at(32.0, 608.0);
        pos = Vector2 { x: 700.0, y: 9999.0 };
        actor.flags.set(ActorFlag::IsDead);
        actor.flags.set(ActorFlag::InMotion);
        actor.flags.set(ActorFlag::Direction);
        actor.velocity = 50.0;
        actor.velocity_fall = 12.0;

        actor.respawn(&mut pos);

        assert!(approx_eq(pos.x, 32.0));
        assert!(approx_eq(pos.y, 608.0));
        assert!(!actor.is_dead());
        assert!(!actor.in_motion());
        assert_eq!(actor.facing(), Facing::Right);
        assert_eq!(actor.velocity, 0.0);
        assert_eq!(actor.velocity_fall, 0.0);
        assert!(approx_eq(actor.bb.l, 32.0));
    }

    #[test]
    fn bounding_box_follows_position_before_moving() {
        let (mut actor, mut pos) = actor_at(10.0, 20.0);
        actor.velocity = 100.0;
        actor.flags.set(ActorFlag::InMotion);
        actor.step(&mut pos, 0.1);
        assert!(approx_eq(actor.bb.l, 10.0));
        assert!(approx_eq(actor.bb.t, 20.0));
        assert!(approx_eq(actor.bb.r, 42.0));
        assert!(approx_eq(actor.bb.b, 52.0));
    }
}
