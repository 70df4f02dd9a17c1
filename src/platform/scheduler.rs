//! Fixed-rate tick scheduling
//!
//! Turns variable frame times into a whole number of simulation ticks plus
//! whole seconds for the elapsed-time clock. A stopped scheduler produces
//! nothing at all: pausing means ticks are not invoked, not that they run
//! and do nothing.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Largest frame delta accepted (seconds); longer hitches are dropped
const MAX_FRAME_DT: f32 = 0.1;

/// Work owed for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steps {
    /// Simulation ticks to run
    pub ticks: u32,
    /// Elapsed-time clock ticks (whole seconds)
    pub seconds: u32,
}

/// Fixed-timestep accumulator with an independent 1 Hz clock
#[derive(Debug, Clone)]
pub struct Scheduler {
    dt: f32,
    accumulator: f32,
    clock_accumulator: f32,
    running: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl Scheduler {
    /// Scheduler with a fixed tick length of `dt` seconds (starts stopped)
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            clock_accumulator: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop scheduling and drop any partial time
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
        self.clock_accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add a frame's worth of time. Returns the ticks and seconds owed.
    pub fn advance(&mut self, frame_dt: f32) -> Steps {
        if !self.running {
            return Steps::default();
        }

        // NaN would poison both accumulators for good
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;
        self.clock_accumulator += frame_dt;

        let mut steps = Steps::default();
        while self.accumulator >= self.dt && steps.ticks < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps.ticks += 1;
        }
        // Cap to prevent spiral of death
        if steps.ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.dt);
        }

        while self.clock_accumulator >= 1.0 {
            self.clock_accumulator -= 1.0;
            steps.seconds += 1;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_produces_nothing() {
        let mut s = Scheduler::default();
        assert_eq!(s.advance(1.0), Steps::default());
    }

    #[test]
    fn test_one_tick_per_frame_at_tick_rate() {
        let mut s = Scheduler::new(0.0625);
        s.start();
        assert_eq!(s.advance(0.0625).ticks, 1);
        assert_eq!(s.advance(0.03125).ticks, 0);
        assert_eq!(s.advance(0.03125).ticks, 1);
    }

    #[test]
    fn test_substeps_capped() {
        let mut s = Scheduler::new(0.001);
        s.start();
        assert_eq!(s.advance(0.1).ticks, MAX_SUBSTEPS);
        // Leftover is capped at one tick
        assert_eq!(s.advance(0.0).ticks, 1);
        assert_eq!(s.advance(0.0).ticks, 0);
    }

    #[test]
    fn test_clock_counts_whole_seconds() {
        let mut s = Scheduler::new(0.05);
        s.start();
        let mut seconds = 0;
        // 25 frames of 0.1s = 2.5s
        for _ in 0..25 {
            seconds += s.advance(0.1).seconds;
        }
        assert_eq!(seconds, 2);
    }

    #[test]
    fn test_non_finite_frame_dt_ignored() {
        let mut s = Scheduler::new(0.0625);
        s.start();
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(s.advance(bad), Steps::default());
        }
        assert!(s.is_running());
        assert_eq!(s.advance(0.0625).ticks, 1);

        let mut seconds = 0;
        for _ in 0..16 {
            seconds += s.advance(0.0625).seconds;
        }
        assert_eq!(seconds, 1);
    }

    #[test]
    fn test_stop_discards_partial_time() {
        let mut s = Scheduler::new(0.125);
        s.start();
        s.advance(0.1);
        s.stop();
        assert!(!s.is_running());
        s.start();
        assert_eq!(s.advance(0.1).ticks, 0);
        assert_eq!(s.advance(0.05).ticks, 1);
    }
}
