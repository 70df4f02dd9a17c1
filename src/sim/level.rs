//! Level aggregate
//!
//! A level is built fresh for every load and owns all of its entities.
//! Nothing in here points back into the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enemy::{Enemy, Hazard};
use super::pickup::{Collectible, all_collected};
use super::platform::Platform;
use super::rect::Rect;

/// Reasons a level is refused at load time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    /// Without a platform the player would fall forever
    #[error("level {level} has no platforms")]
    NoPlatforms { level: u32 },

    #[error("level {level} has invalid geometry: {reason}")]
    InvalidGeometry { level: u32, reason: String },
}

/// The entity set of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based level number
    pub number: u32,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    /// Where the player appears when the level starts
    pub start: Vec2,
    /// Where the player reappears after taking damage
    pub respawn: Vec2,
}

impl Level {
    pub fn new(number: u32, start: Vec2, respawn: Vec2) -> Self {
        Self {
            number,
            platforms: Vec::new(),
            enemies: Vec::new(),
            hazards: Vec::new(),
            collectibles: Vec::new(),
            start,
            respawn,
        }
    }

    /// Every collectible has been picked up
    pub fn is_complete(&self) -> bool {
        all_collected(&self.collectibles)
    }

    /// Refuse levels the simulation cannot run sensibly
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms { level: self.number });
        }

        let rects = self
            .platforms
            .iter()
            .map(|p| ("platform", p.rect))
            .chain(self.hazards.iter().map(|h| ("hazard", h.rect)))
            .chain(self.collectibles.iter().map(|c| ("collectible", c.rect)))
            .chain(self.enemies.iter().map(|e| ("enemy", e.body.rect())));

        for (i, (what, rect)) in rects.enumerate() {
            if !valid_rect(&rect) {
                return Err(LevelError::InvalidGeometry {
                    level: self.number,
                    reason: format!("{what} #{i} has size {}x{}", rect.size.x, rect.size.y),
                });
            }
        }
        Ok(())
    }
}

fn valid_rect(rect: &Rect) -> bool {
    rect.pos.is_finite() && rect.size.is_finite() && rect.size.x > 0.0 && rect.size.y > 0.0
}
