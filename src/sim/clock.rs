//! Fixed-timestep accumulator
//!
//! Hosts report wall-clock frame time; the simulation only ever advances in
//! whole [`SIM_DT`] ticks.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed elapsed frame time, return how many ticks to run now
    ///
    /// Long frames are clamped and at most [`MAX_SUBSTEPS`] ticks run per call,
    /// so a stalled host cannot spiral.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS && self.accumulator >= self.dt {
            log::trace!("Dropping {:.4}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }
}
