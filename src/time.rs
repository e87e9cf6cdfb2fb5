//! Fixed/variable timestep decoupling
//!
//! Frames arrive at whatever rate the host renders, physics wants a
//! constant period. `FixedTimestep` banks frame time and pays it out in
//! whole fixed steps, carrying the remainder to the next frame.

/// Accumulator that converts variable frame deltas into fixed steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Fixed step period in seconds
    step: f32,
    /// Cap on banked time per frame, bounds catch-up after a stall
    max_frame: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// The conventional 50 Hz physics step.
    pub const DEFAULT_STEP: f32 = 0.02;

    pub fn new(step: f32) -> Self {
        Self {
            step,
            max_frame: 0.25,
            accumulator: 0.0,
        }
    }

    /// Bank a frame's delta and return the number of whole fixed steps
    /// now due. Negative deltas bank nothing.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.max(0.0).min(self.max_frame);
        self.accumulator += dt;

        let steps = (self.accumulator / self.step) as u32;
        self.accumulator -= steps as f32 * self.step;
        steps
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
