/// Turns variable browser frame deltas into a whole number of fixed steps.
///
/// Long stalls (a backgrounded tab) are clamped to `max_steps` so the
/// confetti and long-press timers never try to catch up in one burst.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    max_steps: u32,
    pending: f32,
}

impl FixedTimestep {
    pub const DEFAULT_MAX_STEPS: u32 = 8;

    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, Self::DEFAULT_MAX_STEPS)
    }

    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps: max_steps.max(1),
            pending: 0.0,
        }
    }

    /// Bank `frame_dt` seconds and return how many steps are due.
    /// Negative or non-finite deltas are ignored.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.pending = (self.pending + frame_dt).min(self.dt * self.max_steps as f32);
        }
        let steps = (self.pending / self.dt) as u32;
        self.pending -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}
