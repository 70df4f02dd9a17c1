//! Kinematic body shared by every moving entity
//!
//! Velocities are in pixels per tick. One integration per tick, no
//! sub-stepping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Vertical acceleration applied to airborne bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Added to vy every airborne tick
    pub accel: f32,
    /// vy is clamped to this after gravity is applied
    pub max_fall: f32,
}

/// Position/velocity/size state of a moving entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Resting on a platform surface as of the last collision pass
    pub grounded: bool,
    /// Position before this tick's move (used by the landing test)
    #[serde(default)]
    prev_pos: Vec2,
}

impl KinematicBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
            prev_pos: pos,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Bottom edge after this tick's move
    #[inline]
    pub fn foot(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Bottom edge before this tick's move
    #[inline]
    pub fn prev_foot(&self) -> f32 {
        self.prev_pos.y + self.size.y
    }

    /// Add gravity to vy (airborne bodies only). |vy| never exceeds the
    /// max fall speed afterwards, rising or falling.
    pub fn apply_gravity(&mut self, gravity: Gravity) {
        if !self.grounded {
            self.vel.y = (self.vel.y + gravity.accel).clamp(-gravity.max_fall, gravity.max_fall);
        }
    }

    /// Set horizontal velocity from intent, apply gravity, advance position.
    ///
    /// Horizontal velocity is never accumulated: whatever the caller wants
    /// this tick replaces last tick's value.
    pub fn integrate(&mut self, vx: f32, gravity: Gravity) {
        self.vel.x = vx;
        self.apply_gravity(gravity);
        self.prev_pos = self.pos;
        self.pos += self.vel;
    }

    /// Place the body at `pos`, at rest and airborne.
    pub fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev_pos = pos;
        self.vel = Vec2::ZERO;
        self.grounded = false;
    }

    /// Snap the foot onto a surface and stop vertical motion
    pub fn land_on(&mut self, surface_y: f32) {
        self.pos.y = surface_y - self.size.y;
        self.vel.y = 0.0;
        self.grounded = true;
    }
}
