//! Frame clock: turns host frame timestamps into fixed simulation steps

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, SIM_DT_MS};

/// Fixed-timestep accumulator fed by `requestAnimationFrame` timestamps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame at `now_ms` and return how many steps of
    /// [`SIM_DT_MS`] to run
    ///
    /// The very first frame runs one step. Clock jumps backwards add no time;
    /// stalls (background tabs) count as at most [`MAX_FRAME_MS`].
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let frame = match self.last_time {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => SIM_DT_MS as f64,
        };
        self.last_time = Some(now_ms);
        if !frame.is_finite() {
            return 0;
        }
        self.accumulator += frame;

        let step = SIM_DT_MS as f64;
        let mut steps = 0;
        while self.accumulator >= step && steps < MAX_SUBSTEPS {
            self.accumulator -= step;
            steps += 1;
        }
        // Drop whatever the substep cap could not absorb
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(step);
        }
        steps
    }
}
