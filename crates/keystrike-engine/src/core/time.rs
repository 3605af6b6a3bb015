/// Fixed timestep accumulator.
/// Effect decay constants are defined per reference frame, so the host's
/// variable refresh rate is folded into whole fixed steps here.
pub struct FixedTimestep {
    /// Length of one fixed step in seconds.
    dt: f32,
    /// Frame time not yet consumed by a step.
    accumulator: f32,
    /// Upper bound on steps returned by a single `accumulate` call.
    max_steps: u32,
}

impl FixedTimestep {
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add host frame time. Returns how many fixed steps to run now.
    /// A long stall (tab in background) is clamped to `max_steps` so the
    /// game never tries to replay seconds of effects in one frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Drop any partial step, e.g. after a reset.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Fraction of the next step already accumulated (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}
