//! Frame timing

use std::time::Instant;

/// Measures wall-clock time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since creation). Not capped.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// `tick` with an explicit timestamp
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        delta.as_secs_f32()
    }

    /// Forget elapsed time, e.g. right before the first frame
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn last(&self) -> Instant {
        self.last
    }
}
