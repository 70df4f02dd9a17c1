//! Ninja Run - a 2D side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `levels`: Level loading and the built-in campaign
//! - `platform`: Scheduling shell and renderer seam
//! - `input`: Logical input actions
//! - `tuning`: Data-driven game balance
//! - `summary`: Star rating and end-of-run reporting

pub mod game;
pub mod input;
pub mod levels;
pub mod platform;
pub mod sim;
pub mod summary;
pub mod tuning;

pub use game::Game;
pub use input::{Action, InputState};
pub use levels::{BuiltinLevels, LevelLoader};
pub use summary::{RunSummary, format_elapsed, star_rating};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of levels in the built-in campaign
    pub const LEVEL_COUNT: u32 = 15;
}
