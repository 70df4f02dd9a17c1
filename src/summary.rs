//! End-of-level and end-of-run reporting
//!
//! Star ratings and the `m:ss` clock shown on the level-complete and
//! game-over screens.

use serde::{Deserialize, Serialize};

/// Score needed for each star (ascending)
pub const STAR_THRESHOLDS: [u64; 3] = [30, 60, 100];

/// Stars earned for a score (0-3)
pub fn star_rating(score: u64) -> u8 {
    STAR_THRESHOLDS.iter().filter(|&&t| score >= t).count() as u8
}

/// Format elapsed seconds as `m:ss`
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Snapshot shown when a level is cleared or the run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    /// Level being played when the summary was taken
    pub level: u32,
    pub elapsed_secs: u64,
    pub stars: u8,
}

impl RunSummary {
    pub fn new(score: u64, level: u32, elapsed_secs: u64) -> Self {
        Self {
            score,
            level,
            elapsed_secs,
            stars: star_rating(score),
        }
    }

    /// Elapsed time as `m:ss`
    pub fn time(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    /// Star string for display (e.g. "★★☆")
    pub fn stars_display(&self) -> String {
        (0..3)
            .map(|i| if i < self.stars { '★' } else { '☆' })
            .collect()
    }
}
