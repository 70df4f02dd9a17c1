//! Session state and transitions
//!
//! Everything the simulation mutates lives in [`Session`]. The tick function
//! takes it by `&mut` and nothing else holds onto it between ticks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::level::{Level, LevelError};
use super::player::Player;
use crate::summary::RunSummary;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, no run in progress
    #[default]
    Menu,
    /// Ticks are being processed
    Playing,
    /// Ticks stopped by the player (or focus loss)
    Paused,
    /// Out of lives
    GameOver,
    /// All collectibles taken, waiting for the next level
    LevelComplete,
}

/// What hurt the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCause {
    FellOff,
    Hazard,
    Enemy,
}

/// Gameplay events recorded during a tick (for audio/HUD consumers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { index: usize, score: u64 },
    PlayerDamaged { cause: DamageCause, lives: u32 },
    LevelComplete(RunSummary),
    GameOver(RunSummary),
}

/// Rejected session operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error("cannot {action} while {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: GamePhase,
    },
}

/// Complete game session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Gameplay constants for this run
    pub tuning: Tuning,
    /// Active level (discarded on transition)
    pub level: Level,
    pub player: Player,
    pub score: u64,
    pub lives: u32,
    /// Simulation tick counter for the current level
    pub time_ticks: u64,
    /// Wall-clock seconds played on the current level (1 Hz clock)
    pub elapsed_secs: u64,
    pub phase: GamePhase,
    /// Summary captured on the last terminal transition
    pub summary: Option<RunSummary>,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Create a session sitting on the menu with `level` loaded
    pub fn new(tuning: Tuning, level: Level) -> Result<Self, SessionError> {
        level.validate()?;
        let player = Player::new(level.start, &tuning.player);
        let lives = tuning.player.start_lives;
        Ok(Self {
            tuning,
            level,
            player,
            score: 0,
            lives,
            time_ticks: 0,
            elapsed_secs: 0,
            phase: GamePhase::Menu,
            summary: None,
            events: Vec::new(),
        })
    }

    /// Current 1-based level number
    pub fn level_number(&self) -> u32 {
        self.level.number
    }

    /// Begin a fresh run on `level`: score, lives and clock reset
    pub fn start(&mut self, level: Level) -> Result<(), SessionError> {
        self.load_level(level)?;
        self.score = 0;
        self.lives = self.tuning.player.start_lives;
        self.phase = GamePhase::Playing;
        log::info!(
            "Run started on level {} with {} lives",
            self.level.number,
            self.lives
        );
        Ok(())
    }

    /// Playing -> Paused
    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.expect_phase("pause", GamePhase::Playing)?;
        self.phase = GamePhase::Paused;
        log::info!("Paused at tick {}", self.time_ticks);
        Ok(())
    }

    /// Paused -> Playing
    pub fn resume(&mut self) -> Result<(), SessionError> {
        self.expect_phase("resume", GamePhase::Paused)?;
        self.phase = GamePhase::Playing;
        log::info!("Resumed at tick {}", self.time_ticks);
        Ok(())
    }

    /// LevelComplete -> Playing on `level`; score and lives carry over
    pub fn advance_level(&mut self, level: Level) -> Result<(), SessionError> {
        self.expect_phase("advance level", GamePhase::LevelComplete)?;
        self.load_level(level)?;
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Any -> Menu
    pub fn quit(&mut self) {
        if self.phase != GamePhase::Menu {
            log::info!("Quit to menu from {:?}", self.phase);
        }
        self.phase = GamePhase::Menu;
    }

    /// Swap in a new level and place the player at its start point
    fn load_level(&mut self, level: Level) -> Result<(), SessionError> {
        level.validate()?;
        log::info!(
            "Loaded level {}: {} platforms, {} coins, {} enemies, {} hazards",
            level.number,
            level.platforms.len(),
            level.collectibles.len(),
            level.enemies.len(),
            level.hazards.len()
        );
        self.player = Player::new(level.start, &self.tuning.player);
        self.level = level;
        self.time_ticks = 0;
        self.elapsed_secs = 0;
        self.summary = None;
        Ok(())
    }

    fn expect_phase(&self, action: &'static str, phase: GamePhase) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    /// One tick of the 1 Hz clock (only counts while playing)
    pub fn tick_clock(&mut self) {
        if self.phase == GamePhase::Playing {
            self.elapsed_secs += 1;
        }
    }

    /// Hurt the player unless invincible. Returns true if damage was dealt.
    ///
    /// Reaching zero lives ends the run.
    pub fn damage_player(&mut self, cause: DamageCause) -> bool {
        let respawn = self.level.respawn;
        if !self
            .player
            .hit(respawn, self.tuning.player.invincibility_ticks)
        {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        log::debug!("Player hit ({cause:?}), {} lives left", self.lives);
        self.events.push(GameEvent::PlayerDamaged {
            cause,
            lives: self.lives,
        });

        if self.lives == 0 {
            self.game_over();
        }
        true
    }

    fn game_over(&mut self) {
        let summary = self.run_summary();
        self.phase = GamePhase::GameOver;
        self.summary = Some(summary);
        self.events.push(GameEvent::GameOver(summary));
        log::info!(
            "Game over on level {}: score {} in {} ({} stars)",
            summary.level,
            summary.score,
            summary.time(),
            summary.stars
        );
    }

    /// Playing -> LevelComplete
    pub(crate) fn complete_level(&mut self) {
        let summary = self.run_summary();
        self.phase = GamePhase::LevelComplete;
        self.summary = Some(summary);
        self.events.push(GameEvent::LevelComplete(summary));
        log::info!(
            "Level {} complete: score {} in {} ({} stars)",
            summary.level,
            summary.score,
            summary.time(),
            summary.stars
        );
    }

    /// Score/level/time snapshot
    pub fn run_summary(&self) -> RunSummary {
        RunSummary::new(self.score, self.level.number, self.elapsed_secs)
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
