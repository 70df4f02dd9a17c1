//! Platform abstraction layer
//!
//! The pieces that sit between the simulation and whatever hosts it:
//! - Fixed-rate tick scheduling and the 1 Hz elapsed-time clock
//! - The read-only renderer seam

pub mod render;
pub mod scheduler;

pub use render::{LogRenderer, Renderer};
pub use scheduler::{Scheduler, Steps};
