//! Rolling average of recent frame deltas

/// Number of samples kept by [`SmoothingWindow`]
pub const SMOOTHING_SAMPLES: usize = 5;

/// Fixed-capacity ring of recent raw frame deltas.
///
/// The running sum is maintained incrementally: the slot about to be
/// overwritten is subtracted before the new sample is stored.
#[derive(Debug, Clone, Default)]
pub struct SmoothingWindow {
    samples: [f64; SMOOTHING_SAMPLES],
    sum: f64,
    cursor: usize,
    count: usize,
}

impl SmoothingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample, evicting the oldest once the window is full
    pub fn push(&mut self, sample: f64) {
        self.sum -= self.samples[self.cursor];
        self.samples[self.cursor] = sample;
        self.sum += sample;
        self.cursor = (self.cursor + 1) % SMOOTHING_SAMPLES;
        if self.count < SMOOTHING_SAMPLES {
            self.count += 1;
        }
    }

    /// Mean of the valid samples, 0 when empty
    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }

    /// Number of valid samples (saturates at capacity)
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
