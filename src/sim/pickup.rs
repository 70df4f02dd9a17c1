//! Collectibles and the level-completion predicate

use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::collision::touches;
use super::rect::Rect;

/// Spin added to a collectible every tick (radians, render-only)
pub const SPIN_PER_TICK: f32 = 0.05;

/// A coin. `collected` only ever goes from false to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    collected: bool,
    /// Cosmetic rotation, never affects gameplay
    #[serde(default)]
    pub spin: f32,
}

impl Collectible {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            collected: false,
            spin: 0.0,
        }
    }

    #[inline]
    pub fn collected(&self) -> bool {
        self.collected
    }

    /// Advance the cosmetic spin
    pub fn update(&mut self) {
        if !self.collected {
            self.spin = (self.spin + SPIN_PER_TICK) % std::f32::consts::TAU;
        }
    }

    /// Collect on first overlap. Returns true only on the collecting tick.
    pub fn try_collect(&mut self, body: &KinematicBody) -> bool {
        if self.collected || !touches(body, &self.rect) {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Level completion: every collectible collected (vacuously true when empty)
pub fn all_collected(collectibles: &[Collectible]) -> bool {
    collectibles.iter().all(Collectible::collected)
}

/// Number of collectibles still out there
pub fn remaining(collectibles: &[Collectible]) -> usize {
    collectibles.iter().filter(|c| !c.collected).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32) -> KinematicBody {
        KinematicBody::new(Vec2::new(x, y), Vec2::new(40.0, 50.0))
    }

    #[test]
    fn test_collect_once() {
        let mut coin = Collectible::new(250.0, 440.0, 30.0, 30.0);
        assert!(!coin.try_collect(&body_at(0.0, 0.0)));
        assert!(!coin.collected());

        let player = body_at(240.0, 430.0);
        assert!(coin.try_collect(&player));
        assert!(coin.collected());
        // Idempotent afterwards
        assert!(!coin.try_collect(&player));
        assert!(coin.collected());
    }

    #[test]
    fn test_completion_predicate() {
        assert!(all_collected(&[]));

        let mut coins = vec![
            Collectible::new(0.0, 0.0, 30.0, 30.0),
            Collectible::new(100.0, 0.0, 30.0, 30.0),
        ];
        assert!(!all_collected(&coins));
        assert_eq!(remaining(&coins), 2);

        coins[0].try_collect(&body_at(0.0, 0.0));
        assert!(!all_collected(&coins));
        coins[1].try_collect(&body_at(100.0, 0.0));
        assert!(all_collected(&coins));
        assert_eq!(remaining(&coins), 0);

        coins.push(Collectible::new(500.0, 0.0, 30.0, 30.0));
        assert!(!all_collected(&coins));
    }

    proptest! {
        #[test]
        fn prop_complete_iff_all_flags(flags in proptest::collection::vec(any::<bool>(), 0..20)) {
            let mut coins: Vec<Collectible> = flags
                .iter()
                .enumerate()
                .map(|(i, _)| Collectible::new(i as f32 * 100.0, 0.0, 30.0, 30.0))
                .collect();
            for (coin, &take) in coins.iter_mut().zip(&flags) {
                if take {
                    let grab = body_at(coin.rect.pos.x, 0.0);
                    coin.try_collect(&grab);
                }
            }
            prop_assert_eq!(all_collected(&coins), flags.iter().all(|&f| f));
        }
    }
}
