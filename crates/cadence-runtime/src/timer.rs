//! Wall-clock frame timer

use std::time::{Duration, Instant};

/// Measures raw wall time between frames for [`crate::Clock::advance`]
#[derive(Debug, Clone)]
pub struct FrameTimer {
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self {
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous tick. The first tick returns zero.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            return Duration::ZERO;
        }

        let elapsed = now.duration_since(self.last_instant);
        self.last_instant = now;
        elapsed
    }

    /// Time since the previous tick without consuming it
    pub fn peek(&self) -> Duration {
        if self.first_tick {
            Duration::ZERO
        } else {
            self.last_instant.elapsed()
        }
    }
}
