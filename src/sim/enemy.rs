//! Enemies and hazards
//!
//! Enemies fall and land exactly like the player; patrols also walk back
//! and forth around their spawn x. Hazards never move.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Gravity, KinematicBody};
use super::collision::{Landing, resolve, touches};
use super::platform::{Oscillator, Platform};
use super::rect::Rect;
use crate::tuning::EnemyTuning;

/// Enemy behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    /// Walks around its spawn x
    Patrol(Oscillator),
    /// Stays put horizontally (still falls)
    Stationary,
}

/// A hostile walker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: KinematicBody,
    pub behavior: EnemyBehavior,
}

impl Enemy {
    pub fn patrol(x: f32, y: f32, tuning: &EnemyTuning) -> Self {
        Self {
            body: KinematicBody::new(Vec2::new(x, y), Vec2::new(tuning.width, tuning.height)),
            behavior: EnemyBehavior::Patrol(Oscillator::new(x, tuning.patrol_range, tuning.speed)),
        }
    }

    pub fn stationary(x: f32, y: f32, tuning: &EnemyTuning) -> Self {
        Self {
            body: KinematicBody::new(Vec2::new(x, y), Vec2::new(tuning.width, tuning.height)),
            behavior: EnemyBehavior::Stationary,
        }
    }

    /// Walk (patrols only), fall, land
    pub fn update(&mut self, platforms: &[Platform], tuning: &EnemyTuning) -> Option<Landing> {
        let vx = match &self.behavior {
            EnemyBehavior::Patrol(osc) => osc.velocity(),
            EnemyBehavior::Stationary => 0.0,
        };

        self.body.integrate(
            vx,
            Gravity {
                accel: tuning.gravity,
                max_fall: tuning.max_fall_speed,
            },
        );

        if let EnemyBehavior::Patrol(osc) = &mut self.behavior {
            osc.constrain(&mut self.body.pos.x);
        }

        resolve(&mut self.body, platforms)
    }

    /// Whether the enemy overlaps the given body
    pub fn contacts(&self, other: &KinematicBody) -> bool {
        touches(other, &self.body.rect())
    }
}

/// A static damage volume (fire)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
}

impl Hazard {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    pub fn contacts(&self, other: &KinematicBody) -> bool {
        touches(other, &self.rect)
    }
}
