//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, velocities in pixels per tick
//! - Stable iteration order (entity vectors are never reordered)
//! - No rendering, wall clock or platform dependencies

pub mod body;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod pickup;
pub mod platform;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use body::{Gravity, KinematicBody};
pub use collision::{Landing, lands_on, resolve, touches};
pub use enemy::{Enemy, EnemyBehavior, Hazard};
pub use level::{Level, LevelError};
pub use pickup::{Collectible, all_collected};
pub use platform::{Oscillator, Platform, PlatformKind};
pub use player::{Facing, Player};
pub use rect::Rect;
pub use state::{DamageCause, GameEvent, GamePhase, Session, SessionError};
pub use tick::tick;
