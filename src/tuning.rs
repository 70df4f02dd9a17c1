//! Gameplay tuning
//!
//! Every physics and scoring constant lives here so a run can be replayed
//! with a different balance by loading a JSON document. Missing fields fall
//! back to the stock values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

/// Player physics and damage rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (pixels per tick)
    pub speed: f32,
    /// Initial upward velocity of a jump (pixels per tick)
    pub jump_power: f32,
    /// Downward acceleration (pixels per tick²)
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Ticks of invincibility granted after taking damage
    pub invincibility_ticks: u32,
    pub start_lives: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 50.0,
            speed: 5.0,
            jump_power: 15.0,
            gravity: 0.6,
            max_fall_speed: 15.0,
            invincibility_ticks: 60,
            start_lives: 3,
        }
    }
}

/// Enemy physics and patrol behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Max deviation from the spawn x before a patrol turns around
    pub patrol_range: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 40.0,
            speed: 2.0,
            patrol_range: 150.0,
            gravity: 0.6,
            max_fall_speed: 15.0,
        }
    }
}

/// Collectible size and value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinTuning {
    pub width: f32,
    pub height: f32,
    pub points: u64,
}

impl Default for CoinTuning {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 30.0,
            points: 10,
        }
    }
}

/// Platform thickness and oscillation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformTuning {
    pub height: f32,
    /// Horizontal step per tick of an oscillating platform
    pub move_speed: f32,
    /// Amplitude of an oscillating platform around its origin
    pub move_range: f32,
}

impl Default for PlatformTuning {
    fn default() -> Self {
        Self {
            height: 20.0,
            move_speed: 2.0,
            move_range: 100.0,
        }
    }
}

/// Hazard (fire) size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 50.0,
        }
    }
}

/// Complete gameplay tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub coin: CoinTuning,
    pub platform: PlatformTuning,
    pub hazard: HazardTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning: {e}");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("player.max_fall_speed", self.player.max_fall_speed)?;
        non_negative("player.speed", self.player.speed)?;
        non_negative("player.jump_power", self.player.jump_power)?;
        non_negative("player.gravity", self.player.gravity)?;
        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        positive("enemy.max_fall_speed", self.enemy.max_fall_speed)?;
        non_negative("enemy.speed", self.enemy.speed)?;
        non_negative("enemy.patrol_range", self.enemy.patrol_range)?;
        non_negative("enemy.gravity", self.enemy.gravity)?;
        positive("coin.width", self.coin.width)?;
        positive("coin.height", self.coin.height)?;
        positive("platform.height", self.platform.height)?;
        non_negative("platform.move_speed", self.platform.move_speed)?;
        non_negative("platform.move_range", self.platform.move_range)?;
        positive("hazard.width", self.hazard.width)?;
        positive("hazard.height", self.hazard.height)?;

        if self.player.start_lives == 0 {
            return Err(TuningError::Invalid {
                field: "player.start_lives",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.player.jump_power > self.player.max_fall_speed {
            return Err(TuningError::Invalid {
                field: "player.jump_power",
                reason: format!(
                    "exceeds player.max_fall_speed ({})",
                    self.player.max_fall_speed
                ),
            });
        }
        if self.player.width > self.world.width {
            return Err(TuningError::Invalid {
                field: "player.width",
                reason: format!("wider than the world ({})", self.world.width),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be > 0, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be >= 0, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_game() {
        let t = Tuning::default();
        assert_eq!(t.world.width, 1000.0);
        assert_eq!(t.player.jump_power, 15.0);
        assert_eq!(t.player.invincibility_ticks, 60);
        assert_eq!(t.coin.points, 10);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "player": { "speed": 7.5 } }"#).unwrap();
        assert_eq!(t.player.speed, 7.5);
        assert_eq!(t.player.jump_power, 15.0);
        assert_eq!(t.enemy, EnemyTuning::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "player": { "width": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "player.width",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "player": { "start_lives": 0 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_jump_faster_than_max_fall() {
        let err = Tuning::from_json(r#"{ "player": { "jump_power": 25, "max_fall_speed": 15 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "player.jump_power",
                ..
            }
        ));

        // Equal is the stock balance
        assert!(Tuning::from_json(r#"{ "player": { "jump_power": 15, "max_fall_speed": 15 } }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_json_export_reloads() {
        let mut t = Tuning::default();
        t.enemy.patrol_range = 90.0;
        let json = t.to_json().unwrap();
        assert!(json.contains("\"patrol_range\": 90.0"));
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = Tuning::load_or_default("/definitely/not/here.json");
        assert_eq!(t, Tuning::default());
    }
}
