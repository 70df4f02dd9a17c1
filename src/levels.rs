//! Level loading
//!
//! [`LevelLoader`] is the seam between the session and level data. The
//! built-in campaign reproduces the fifteen stock levels; anything outside
//! `1..=LEVEL_COUNT` loads level 1.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::LEVEL_COUNT;
use crate::sim::{Collectible, Enemy, Hazard, Level, Platform};
use crate::tuning::Tuning;

/// Source of levels
pub trait LevelLoader {
    /// Build a fresh entity set for `number` (falls back to level 1)
    fn load(&self, number: u32) -> Level;

    /// Number of levels in the campaign
    fn level_count(&self) -> u32;

    /// Level that follows `number`, wrapping to 1 after the last
    fn next_level(&self, number: u32) -> u32 {
        if number >= self.level_count() { 1 } else { number + 1 }
    }
}

/// Platform entry: x, y, width, oscillating
type PlatformDef = (f32, f32, f32, bool);
/// Enemy entry: x, y, patrols
type EnemyDef = (f32, f32, bool);

const P: bool = true;
const S: bool = false;

struct LevelDef {
    platforms: &'static [PlatformDef],
    coins: &'static [(f32, f32)],
    enemies: &'static [EnemyDef],
    fires: &'static [(f32, f32)],
}

/// Where the player appears when a level starts
const START: Vec2 = Vec2::new(50.0, 400.0);
/// Where the player reappears after damage
const RESPAWN: Vec2 = Vec2::new(50.0, 100.0);
/// Top of the fire row on the ground floor
const FIRE_Y: f32 = 530.0;

#[rustfmt::skip]
const LEVELS: [LevelDef; LEVEL_COUNT as usize] = [
    // 1: learning to jump
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (200.0, 480.0, 150.0, S), (450.0, 400.0, 150.0, S), (700.0, 320.0, 150.0, S)],
        coins: &[(250.0, 440.0), (500.0, 360.0), (750.0, 280.0)],
        enemies: &[],
        fires: &[],
    },
    // 2: moving platforms
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (150.0, 480.0, 120.0, S), (400.0, 420.0, 120.0, P), (650.0, 350.0, 120.0, S)],
        coins: &[(200.0, 440.0), (450.0, 380.0), (700.0, 310.0), (400.0, 540.0)],
        enemies: &[],
        fires: &[],
    },
    // 3: first enemy
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (150.0, 480.0, 150.0, S), (400.0, 400.0, 200.0, S), (700.0, 320.0, 150.0, S)],
        coins: &[(200.0, 440.0), (500.0, 360.0), (750.0, 280.0), (800.0, 540.0)],
        enemies: &[(420.0, 360.0, P)],
        fires: &[],
    },
    // 4: first fire
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (180.0, 480.0, 140.0, S), (420.0, 400.0, 140.0, S), (660.0, 320.0, 140.0, S)],
        coins: &[(230.0, 440.0), (470.0, 360.0), (710.0, 280.0), (150.0, 540.0), (900.0, 540.0)],
        enemies: &[],
        fires: &[(350.0, FIRE_Y), (590.0, FIRE_Y)],
    },
    // 5: balance
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (120.0, 480.0, 100.0, S), (300.0, 420.0, 100.0, P), (500.0, 360.0, 100.0, S), (680.0, 300.0, 100.0, P), (350.0, 200.0, 120.0, S)],
        coins: &[(160.0, 440.0), (340.0, 380.0), (540.0, 320.0), (720.0, 260.0), (390.0, 160.0)],
        enemies: &[(510.0, 320.0, S)],
        fires: &[],
    },
    // 6: speed
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (100.0, 500.0, 120.0, P), (320.0, 440.0, 120.0, P), (540.0, 380.0, 120.0, P), (760.0, 320.0, 120.0, S), (200.0, 220.0, 150.0, S)],
        coins: &[(140.0, 460.0), (360.0, 400.0), (580.0, 340.0), (800.0, 280.0), (250.0, 180.0), (50.0, 540.0)],
        enemies: &[(770.0, 280.0, P)],
        fires: &[(450.0, FIRE_Y)],
    },
    // 7: narrow ledges
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (150.0, 480.0, 90.0, S), (320.0, 420.0, 90.0, S), (490.0, 360.0, 90.0, S), (660.0, 300.0, 90.0, S), (400.0, 200.0, 120.0, P), (150.0, 140.0, 100.0, S)],
        coins: &[(180.0, 440.0), (350.0, 380.0), (520.0, 320.0), (690.0, 260.0), (440.0, 160.0), (180.0, 100.0)],
        enemies: &[(330.0, 380.0, P), (670.0, 260.0, S)],
        fires: &[(250.0, FIRE_Y), (580.0, FIRE_Y)],
    },
    // 8: towers
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (100.0, 480.0, 100.0, S), (100.0, 380.0, 100.0, S), (100.0, 280.0, 100.0, S), (300.0, 400.0, 120.0, P), (550.0, 320.0, 100.0, S), (750.0, 240.0, 120.0, S), (450.0, 160.0, 150.0, S)],
        coins: &[(140.0, 440.0), (140.0, 340.0), (140.0, 240.0), (340.0, 360.0), (590.0, 280.0), (790.0, 200.0), (500.0, 120.0)],
        enemies: &[(560.0, 280.0, P), (760.0, 200.0, P)],
        fires: &[(220.0, FIRE_Y), (650.0, FIRE_Y)],
    },
    // 9: maze
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (80.0, 500.0, 100.0, S), (250.0, 450.0, 100.0, P), (420.0, 400.0, 100.0, S), (590.0, 350.0, 100.0, P), (200.0, 300.0, 100.0, S), (400.0, 250.0, 100.0, P), (650.0, 200.0, 100.0, S), (300.0, 150.0, 140.0, S)],
        coins: &[(120.0, 460.0), (290.0, 410.0), (460.0, 360.0), (630.0, 310.0), (240.0, 260.0), (440.0, 210.0), (690.0, 160.0), (340.0, 110.0)],
        enemies: &[(260.0, 410.0, P), (430.0, 360.0, S), (600.0, 310.0, P)],
        fires: &[(150.0, FIRE_Y), (500.0, FIRE_Y), (750.0, FIRE_Y)],
    },
    // 10: the big challenge
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (90.0, 520.0, 80.0, P), (240.0, 470.0, 80.0, P), (390.0, 420.0, 80.0, P), (540.0, 370.0, 80.0, P), (690.0, 320.0, 90.0, S), (150.0, 270.0, 90.0, P), (350.0, 220.0, 90.0, S), (550.0, 170.0, 90.0, P), (250.0, 120.0, 120.0, S)],
        coins: &[(120.0, 480.0), (270.0, 430.0), (420.0, 380.0), (570.0, 330.0), (720.0, 280.0), (180.0, 230.0), (380.0, 180.0), (580.0, 130.0), (290.0, 80.0)],
        enemies: &[(250.0, 430.0, P), (400.0, 380.0, P), (700.0, 280.0, S), (360.0, 180.0, P)],
        fires: &[(500.0, FIRE_Y), (800.0, FIRE_Y)],
    },
    // 11: fire hell
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (120.0, 500.0, 100.0, S), (320.0, 440.0, 100.0, P), (520.0, 380.0, 100.0, S), (720.0, 320.0, 100.0, P), (200.0, 260.0, 100.0, S), (450.0, 200.0, 100.0, P), (650.0, 140.0, 100.0, S)],
        coins: &[(160.0, 460.0), (360.0, 400.0), (560.0, 340.0), (760.0, 280.0), (240.0, 220.0), (490.0, 160.0), (690.0, 100.0), (50.0, 540.0), (950.0, 540.0)],
        enemies: &[(330.0, 400.0, P), (530.0, 340.0, P), (730.0, 280.0, P)],
        fires: &[(80.0, FIRE_Y), (240.0, FIRE_Y), (400.0, FIRE_Y), (560.0, FIRE_Y), (720.0, FIRE_Y), (880.0, FIRE_Y)],
    },
    // 12: impossible jumps
    LevelDef {
        platforms: &[(0.0, 580.0, 120.0, S), (200.0, 520.0, 70.0, P), (350.0, 470.0, 70.0, P), (500.0, 420.0, 70.0, P), (650.0, 370.0, 70.0, P), (800.0, 320.0, 100.0, S), (150.0, 270.0, 80.0, P), (350.0, 220.0, 80.0, P), (550.0, 170.0, 80.0, P), (350.0, 100.0, 150.0, S)],
        coins: &[(220.0, 480.0), (370.0, 430.0), (520.0, 380.0), (670.0, 330.0), (830.0, 280.0), (180.0, 230.0), (380.0, 180.0), (580.0, 130.0), (400.0, 60.0), (60.0, 540.0)],
        enemies: &[(210.0, 480.0, P), (360.0, 430.0, P), (510.0, 380.0, P), (810.0, 280.0, S)],
        fires: &[(280.0, FIRE_Y), (430.0, FIRE_Y), (580.0, FIRE_Y), (730.0, FIRE_Y)],
    },
    // 13: race against time
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (100.0, 510.0, 90.0, P), (250.0, 460.0, 90.0, P), (400.0, 410.0, 90.0, P), (550.0, 360.0, 90.0, P), (700.0, 310.0, 90.0, P), (200.0, 240.0, 90.0, P), (400.0, 180.0, 90.0, P), (600.0, 120.0, 90.0, P), (350.0, 60.0, 130.0, S)],
        coins: &[(130.0, 470.0), (280.0, 420.0), (430.0, 370.0), (580.0, 320.0), (730.0, 270.0), (230.0, 200.0), (430.0, 140.0), (630.0, 80.0), (390.0, 20.0), (900.0, 540.0)],
        enemies: &[(110.0, 470.0, P), (260.0, 420.0, P), (410.0, 370.0, P), (560.0, 320.0, P), (710.0, 270.0, P)],
        fires: &[(350.0, FIRE_Y), (650.0, FIRE_Y)],
    },
    // 14: chaos (coins are scattered at load time)
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (80.0, 520.0, 80.0, P), (220.0, 480.0, 70.0, P), (350.0, 440.0, 80.0, P), (490.0, 400.0, 70.0, P), (630.0, 360.0, 80.0, P), (770.0, 320.0, 90.0, S), (150.0, 280.0, 80.0, P), (320.0, 240.0, 70.0, P), (500.0, 200.0, 80.0, P), (680.0, 160.0, 70.0, P), (300.0, 100.0, 120.0, S)],
        coins: &[],
        enemies: &[(90.0, 480.0, P), (230.0, 440.0, P), (360.0, 400.0, P), (500.0, 360.0, P), (640.0, 320.0, P), (780.0, 280.0, S)],
        fires: &[(140.0, FIRE_Y), (280.0, FIRE_Y), (420.0, FIRE_Y), (560.0, FIRE_Y), (700.0, FIRE_Y), (840.0, FIRE_Y)],
    },
    // 15: the legendary finale (coin and fire rows are generated)
    LevelDef {
        platforms: &[(0.0, 580.0, 1000.0, S), (70.0, 530.0, 60.0, P), (190.0, 490.0, 60.0, P), (310.0, 450.0, 60.0, P), (430.0, 410.0, 60.0, P), (550.0, 370.0, 60.0, P), (670.0, 330.0, 60.0, P), (790.0, 290.0, 80.0, S), (120.0, 250.0, 70.0, P), (270.0, 210.0, 70.0, P), (420.0, 170.0, 70.0, P), (570.0, 130.0, 70.0, P), (720.0, 90.0, 70.0, P), (350.0, 40.0, 150.0, S)],
        coins: &[],
        enemies: &[(80.0, 490.0, P), (200.0, 450.0, P), (320.0, 410.0, P), (440.0, 370.0, P), (560.0, 330.0, P), (680.0, 290.0, P), (800.0, 250.0, S)],
        fires: &[],
    },
];

/// The stock fifteen-level campaign
#[derive(Debug, Clone)]
pub struct BuiltinLevels {
    tuning: Tuning,
    /// Seed for levels with scattered pickups
    seed: u64,
}

impl Default for BuiltinLevels {
    fn default() -> Self {
        Self::new(Tuning::default(), 0)
    }
}

impl BuiltinLevels {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self { tuning, seed }
    }

    fn build(&self, number: u32, def: &LevelDef) -> Level {
        let t = &self.tuning;
        let mut level = Level::new(number, START, RESPAWN);

        level.platforms = def
            .platforms
            .iter()
            .map(|&(x, y, w, moving)| {
                if moving {
                    Platform::new_oscillating(
                        x,
                        y,
                        w,
                        t.platform.height,
                        t.platform.move_range,
                        t.platform.move_speed,
                    )
                } else {
                    Platform::new_static(x, y, w, t.platform.height)
                }
            })
            .collect();

        level.enemies = def
            .enemies
            .iter()
            .map(|&(x, y, patrols)| {
                if patrols {
                    Enemy::patrol(x, y, &t.enemy)
                } else {
                    Enemy::stationary(x, y, &t.enemy)
                }
            })
            .collect();

        let mut coins: Vec<(f32, f32)> = def.coins.to_vec();
        let mut fires: Vec<(f32, f32)> = def.fires.to_vec();
        match number {
            14 => {
                // Per-level stream so reloading gives the same layout
                let mut rng = Pcg32::seed_from_u64(self.seed ^ u64::from(number));
                coins.extend((0..12).map(|i| {
                    let x = 100.0 + i as f32 * 75.0;
                    let y = 80.0 + rng.random::<f32>() * 400.0;
                    (x, y)
                }));
            }
            15 => {
                coins.extend((0..15).map(|i| (80.0 + i as f32 * 60.0, 50.0 + (i % 3) as f32 * 150.0)));
                fires.extend((0..10).map(|i| (i as f32 * 100.0 + 30.0, FIRE_Y)));
            }
            _ => {}
        }

        level.collectibles = coins
            .into_iter()
            .map(|(x, y)| Collectible::new(x, y, t.coin.width, t.coin.height))
            .collect();
        level.hazards = fires
            .into_iter()
            .map(|(x, y)| Hazard::new(x, y, t.hazard.width, t.hazard.height))
            .collect();

        level
    }
}

impl LevelLoader for BuiltinLevels {
    fn load(&self, number: u32) -> Level {
        let number = if (1..=LEVEL_COUNT).contains(&number) {
            number
        } else {
            log::warn!("Level {number} does not exist, loading level 1");
            1
        };
        self.build(number, &LEVELS[(number - 1) as usize])
    }

    fn level_count(&self) -> u32 {
        LEVEL_COUNT
    }
}
