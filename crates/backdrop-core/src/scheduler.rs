//! Fixed-rate gate between the display's refresh callback and the simulation.
//!
//! The display runtime calls back once per refresh at whatever cadence the
//! hardware provides; the simulation advances at a constant 60 Hz logical
//! rate. The scheduler accumulates wall-clock time and answers, per display
//! callback, whether this frame performs a step + render or is skipped.

use instant::Duration;

use crate::constants::SIM_STEP_SECS;

pub struct FrameScheduler {
    accumulator: f64,
    step_interval: f64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            step_interval: SIM_STEP_SECS,
        }
    }

    /// Feed the elapsed time since the previous display callback.
    ///
    /// Returns true when one simulation step and one render should run.
    /// At most one step per callback: if several intervals elapsed at once
    /// (a tab stall, a dropped frame burst) the backlog is discarded and only
    /// the sub-interval remainder carries over.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.accumulator += dt.as_secs_f64();
        if self.accumulator < self.step_interval {
            return false;
        }
        self.accumulator %= self.step_interval;
        true
    }

    pub fn accumulator_secs(&self) -> f64 {
        self.accumulator
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
