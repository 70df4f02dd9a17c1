//! Platforms and the shared back-and-forth oscillator
//!
//! Oscillating platforms and patrol enemies both swing around an origin x
//! with a fixed per-tick step, so they share [`Oscillator`].

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Horizontal back-and-forth motion around an origin.
///
/// Invariant: after [`Oscillator::constrain`], x stays within
/// `[origin - amplitude, origin + amplitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    pub origin: f32,
    pub amplitude: f32,
    /// Unsigned distance moved per tick
    pub step: f32,
    /// +1.0 (right) or -1.0 (left)
    pub direction: f32,
}

impl Oscillator {
    /// Start at `origin`, heading right
    pub fn new(origin: f32, amplitude: f32, step: f32) -> Self {
        Self {
            origin,
            amplitude,
            step,
            direction: 1.0,
        }
    }

    /// Signed displacement for this tick
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.step * self.direction
    }

    /// Clamp `x` into range and turn back toward the origin once a bound is
    /// reached or exceeded. Returns true if the direction flipped.
    pub fn constrain(&mut self, x: &mut f32) -> bool {
        let deviation = *x - self.origin;
        if deviation.abs() < self.amplitude {
            return false;
        }
        let side = if deviation >= 0.0 { 1.0 } else { -1.0 };
        *x = self.origin + side * self.amplitude;
        let flipped = self.direction == side;
        self.direction = -side;
        flipped
    }

    /// Move `x` one step and constrain it. Returns the actual displacement.
    pub fn advance(&mut self, x: &mut f32) -> f32 {
        let before = *x;
        *x += self.velocity();
        self.constrain(x);
        *x - before
    }
}

/// Platform behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    Oscillating(Oscillator),
}

/// A one-sided (top surface only) platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
    /// Horizontal displacement applied this tick (carried onto riders)
    #[serde(default)]
    pub last_dx: f32,
}

impl Platform {
    pub fn new_static(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind: PlatformKind::Static,
            last_dx: 0.0,
        }
    }

    /// Oscillating platform whose origin is its starting x
    pub fn new_oscillating(x: f32, y: f32, w: f32, h: f32, amplitude: f32, step: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind: PlatformKind::Oscillating(Oscillator::new(x, amplitude, step)),
            last_dx: 0.0,
        }
    }

    /// Top surface y
    #[inline]
    pub fn surface(&self) -> f32 {
        self.rect.top()
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.kind, PlatformKind::Oscillating(_))
    }

    /// Advance one tick (no-op for static platforms)
    pub fn advance(&mut self) {
        self.last_dx = match &mut self.kind {
            PlatformKind::Static => 0.0,
            PlatformKind::Oscillating(osc) => osc.advance(&mut self.rect.pos.x),
        };
    }
}
