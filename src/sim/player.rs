//! Player controller
//!
//! The player update is split in two halves so the session can apply
//! fall-off damage between integration and collision resolution.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Gravity, KinematicBody};
use super::collision::{Landing, resolve};
use super::platform::Platform;
use crate::input::{Action, InputState};
use crate::tuning::{PlayerTuning, WorldTuning};

/// Which way the player is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: KinematicBody,
    pub facing: Facing,
    /// Airborne because of a jump (cleared on landing)
    pub jumping: bool,
    /// Remaining invincibility ticks; invincible iff non-zero
    pub invincible_ticks: u32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            body: KinematicBody::new(pos, Vec2::new(tuning.width, tuning.height)),
            facing: Facing::Right,
            jumping: false,
            invincible_ticks: 0,
        }
    }

    #[inline]
    pub fn invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    #[inline]
    pub fn grounded(&self) -> bool {
        self.body.grounded
    }

    /// First half of the tick: input, jump, integration, horizontal clamp.
    ///
    /// Returns true if the player has fallen below the bottom of the world.
    pub fn begin_tick(
        &mut self,
        input: &InputState,
        tuning: &PlayerTuning,
        world: &WorldTuning,
    ) -> bool {
        // Right wins when both directions are held
        let vx = if input.is_held(Action::MoveRight) {
            self.facing = Facing::Right;
            tuning.speed
        } else if input.is_held(Action::MoveLeft) {
            self.facing = Facing::Left;
            -tuning.speed
        } else {
            0.0
        };

        if input.is_held(Action::Jump) && self.body.grounded {
            self.body.vel.y = -tuning.jump_power;
            self.body.grounded = false;
            self.jumping = true;
        }

        self.body.integrate(
            vx,
            Gravity {
                accel: tuning.gravity,
                max_fall: tuning.max_fall_speed,
            },
        );

        // No clamp on the top edge: jumps may leave the screen
        let max_x = (world.width - self.body.size.x).max(0.0);
        self.body.pos.x = self.body.pos.x.clamp(0.0, max_x);

        self.body.pos.y > world.height
    }

    /// Second half of the tick: land on platforms, ride movers, tick down
    /// invincibility.
    pub fn finish_tick(&mut self, platforms: &[Platform]) -> Option<Landing> {
        let was_grounded = self.body.grounded;
        let landing = resolve(&mut self.body, platforms);
        if let Some(landing) = &landing {
            if !was_grounded {
                log::debug!(
                    "Landed on platform {} at y={}",
                    landing.platform,
                    landing.surface_y
                );
            }
            landing.apply_carry(&mut self.body);
            self.jumping = false;
        }

        if self.invincible_ticks > 0 {
            self.invincible_ticks -= 1;
        }

        landing
    }

    /// Take a hit: become invincible and go back to `respawn` at rest.
    ///
    /// Returns false (and changes nothing) while invincible.
    pub fn hit(&mut self, respawn: Vec2, invincibility_ticks: u32) -> bool {
        if self.invincible() {
            return false;
        }
        self.invincible_ticks = invincibility_ticks.max(1);
        self.body.teleport(respawn);
        self.jumping = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(actions: &[Action]) -> InputState {
        let mut input = InputState::default();
        for &a in actions {
            input.set(a, true);
        }
        input
    }

    fn floor() -> Vec<Platform> {
        vec![Platform::new_static(0.0, 580.0, 1000.0, 20.0)]
    }

    fn standing_player() -> Player {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(Vec2::new(100.0, 530.0), &tuning);
        player.body.grounded = true;
        player
    }

    fn step(player: &mut Player, input: &InputState, platforms: &[Platform]) -> bool {
        let fell = player.begin_tick(input, &PlayerTuning::default(), &WorldTuning::default());
        player.finish_tick(platforms);
        fell
    }

    #[test]
    fn test_rest_is_stable() {
        let mut player = standing_player();
        let before = player.body.pos;
        step(&mut player, &InputState::default(), &floor());
        assert_eq!(player.body.pos, before);
        assert!(player.grounded());
        assert_eq!(player.body.vel.y, 0.0);
    }

    #[test]
    fn test_move_and_face() {
        let mut player = standing_player();
        step(&mut player, &held(&[Action::MoveLeft]), &floor());
        assert_eq!(player.body.pos.x, 95.0);
        assert_eq!(player.facing, Facing::Left);

        step(&mut player, &held(&[Action::MoveLeft, Action::MoveRight]), &floor());
        assert_eq!(player.body.pos.x, 100.0);
        assert_eq!(player.facing, Facing::Right);

        // Releasing keeps facing
        step(&mut player, &InputState::default(), &floor());
        assert_eq!(player.facing, Facing::Right);
        assert_eq!(player.body.vel.x, 0.0);
    }

    #[test]
    fn test_jump_arc_returns_to_floor() {
        let mut player = standing_player();
        step(&mut player, &held(&[Action::Jump]), &floor());
        assert!(player.jumping);
        assert!(!player.grounded());
        assert!(player.body.vel.y < 0.0);

        let mut ticks = 0;
        while !player.grounded() {
            step(&mut player, &InputState::default(), &floor());
            assert!(player.body.foot() <= 580.0);
            ticks += 1;
            assert!(ticks < 200, "never landed");
        }
        assert!(!player.jumping);
        assert_eq!(player.body.foot(), 580.0);
    }

    #[test]
    fn test_cannot_jump_midair() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0), &tuning);
        step(&mut player, &held(&[Action::Jump]), &floor());
        assert!(player.body.vel.y > 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_clamped_to_world_width() {
        let mut player = standing_player();
        player.body.pos.x = 2.0;
        step(&mut player, &held(&[Action::MoveLeft]), &floor());
        assert_eq!(player.body.pos.x, 0.0);

        player.body.pos.x = 958.0;
        step(&mut player, &held(&[Action::MoveRight]), &floor());
        assert_eq!(player.body.pos.x, 960.0);
    }

    #[test]
    fn test_falls_off_world() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(Vec2::new(100.0, 595.0), &tuning);
        player.body.vel.y = 10.0;
        assert!(step(&mut player, &InputState::default(), &[]));
    }

    #[test]
    fn test_hit_and_invincibility_window() {
        let mut player = standing_player();
        assert!(player.hit(Vec2::new(50.0, 100.0), 60));
        assert!(player.invincible());
        assert_eq!(player.body.pos, Vec2::new(50.0, 100.0));
        assert_eq!(player.body.vel, Vec2::ZERO);

        // Blocked while invincible
        assert!(!player.hit(Vec2::new(0.0, 0.0), 60));
        assert_eq!(player.body.pos, Vec2::new(50.0, 100.0));

        for _ in 0..59 {
            step(&mut player, &InputState::default(), &floor());
            assert!(player.invincible());
        }
        step(&mut player, &InputState::default(), &floor());
        assert!(!player.invincible());
        assert!(player.hit(Vec2::new(50.0, 100.0), 60));
    }

    #[test]
    fn test_rides_moving_platform() {
        let mut platforms = vec![Platform::new_oscillating(100.0, 580.0, 120.0, 20.0, 100.0, 2.0)];
        let mut player = standing_player();
        player.body.pos.x = 120.0;
        for _ in 0..10 {
            platforms[0].advance();
            step(&mut player, &InputState::default(), &platforms);
            assert!(player.grounded());
        }
        assert_eq!(player.body.pos.x, 140.0);
    }
}
