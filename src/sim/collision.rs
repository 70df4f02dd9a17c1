//! Collision resolution against one-sided platforms
//!
//! Platforms are only solid from above. A body passes through sides and
//! undersides freely and can only be stopped by falling onto a top surface.

use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::platform::Platform;
use super::rect::Rect;

/// Result of a successful landing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    /// Index of the platform landed on (platform iteration order)
    pub platform: usize,
    /// Surface y the foot was snapped to
    pub surface_y: f32,
    /// Horizontal displacement of the platform this tick
    pub carry_dx: f32,
}

impl Landing {
    /// Shift a rider by the platform's movement this tick
    pub fn apply_carry(&self, body: &mut KinematicBody) {
        body.pos.x += self.carry_dx;
    }
}

/// Check whether a body crosses a platform's top surface this tick.
///
/// All must hold:
/// - horizontal overlap
/// - foot at or above the surface before this tick's vertical move
/// - foot at or below the surface after it
/// - moving down or resting (vy >= 0)
#[inline]
pub fn lands_on(body: &KinematicBody, platform: &Platform) -> bool {
    let surface = platform.surface();
    body.vel.y >= 0.0
        && body.rect().overlaps_x(&platform.rect)
        && body.prev_foot() <= surface
        && body.foot() >= surface
}

/// Resolve a body against the platform set.
///
/// Clears `grounded`, then snaps the body onto the first platform (in
/// iteration order) it lands on. Carry is not applied here; riders that
/// should move with the platform call [`Landing::apply_carry`].
pub fn resolve(body: &mut KinematicBody, platforms: &[Platform]) -> Option<Landing> {
    body.grounded = false;

    let (index, platform) = platforms
        .iter()
        .enumerate()
        .find(|(_, p)| lands_on(body, p))?;

    let surface_y = platform.surface();
    body.land_on(surface_y);

    Some(Landing {
        platform: index,
        surface_y,
        carry_dx: platform.last_dx,
    })
}

/// Plain AABB contact test between a body and a static volume
#[inline]
pub fn touches(body: &KinematicBody, volume: &Rect) -> bool {
    body.rect().overlaps(volume)
}
