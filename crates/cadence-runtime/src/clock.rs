//! Frame clock with time scaling, smoothing and a fixed-timestep accumulator

use std::time::Duration;

use cadence_core::{CadenceError, Result};

use crate::config::ClockSettings;
use crate::smoothing::SmoothingWindow;

/// Default fixed timestep (50 Hz)
pub const DEFAULT_FIXED_DELTA_TIME: f64 = 1.0 / 50.0;
/// Default clamp on raw frame deltas (no less than ~3 FPS)
pub const DEFAULT_MAX_DELTA_TIME: f64 = 1.0 / 3.0;

/// Tracks game time for a frame loop.
///
/// Advance it exactly once per frame with [`Clock::advance`] or
/// [`Clock::update`]. Raw deltas are clamped to `max_delta_time`, scaled by
/// `time_scale`, and fed into a fixed-step accumulator that is drained in
/// whole steps before the call returns.
#[derive(Debug, Clone)]
pub struct Clock {
    time_scale: f64,
    max_delta_time: f64,

    time: f64,
    unscaled_time: f64,
    delta_time: f64,
    unscaled_delta_time: f64,

    fixed_delta_time: f64,
    fixed_time: f64,
    fixed_accumulator: f64,
    fixed_frame_count: u64,
    fixed_steps_this_frame: u64,

    frame_count: u64,
    smoothing: SmoothingWindow,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: DEFAULT_MAX_DELTA_TIME,
            time: 0.0,
            unscaled_time: 0.0,
            delta_time: 0.0,
            unscaled_delta_time: 0.0,
            fixed_delta_time: DEFAULT_FIXED_DELTA_TIME,
            fixed_time: 0.0,
            fixed_accumulator: 0.0,
            fixed_frame_count: 0,
            fixed_steps_this_frame: 0,
            frame_count: 0,
            smoothing: SmoothingWindow::new(),
        }
    }
}

impl Clock {
    /// Create a clock with a 50 Hz fixed step and a 1/3 s delta clamp
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock with a custom fixed rate
    pub fn with_fixed_rate(hz: f64) -> Result<Self> {
        let mut clock = Self::default();
        clock.set_fixed_rate(hz)?;
        Ok(clock)
    }

    /// Create a clock from loaded settings, validating every field
    pub fn from_settings(settings: &ClockSettings) -> Result<Self> {
        let mut clock = Self::default();
        clock.set_fixed_rate(settings.fixed_rate)?;
        clock.set_max_delta_time(settings.max_delta_time)?;
        clock.set_time_scale(settings.time_scale)?;
        Ok(clock)
    }

    /// Advance the clock by one frame of `raw` wall time
    pub fn advance(&mut self, raw: Duration) {
        self.step(raw.as_secs_f64());
    }

    /// Advance the clock by one frame of `raw_seconds` wall time.
    ///
    /// Negative or NaN input is rejected and leaves the clock untouched.
    pub fn update(&mut self, raw_seconds: f64) -> Result<()> {
        if raw_seconds.is_nan() || raw_seconds < 0.0 {
            log::warn!("rejected frame delta {raw_seconds}");
            return Err(CadenceError::InvalidDelta(raw_seconds));
        }
        self.step(raw_seconds);
        Ok(())
    }

    fn step(&mut self, raw_seconds: f64) {
        let raw = raw_seconds.min(self.max_delta_time);

        self.unscaled_delta_time = raw;
        self.unscaled_time += raw;

        let scaled = raw * self.time_scale;
        self.delta_time = scaled;
        self.time += scaled;

        self.smoothing.push(raw);

        self.fixed_accumulator += scaled;
        let mut steps: u64 = 0;
        while self.fixed_accumulator >= self.fixed_delta_time {
            self.fixed_time += self.fixed_delta_time;
            self.fixed_accumulator -= self.fixed_delta_time;
            self.fixed_frame_count += 1;
            steps += 1;
        }
        self.fixed_steps_this_frame = steps;

        self.frame_count += 1;
    }

    /// Zero all accumulators and counters and restore `time_scale` to 1.
    ///
    /// The configured fixed step and delta clamp are kept.
    pub fn reset(&mut self) {
        *self = Self {
            max_delta_time: self.max_delta_time,
            fixed_delta_time: self.fixed_delta_time,
            ..Self::default()
        };
        log::debug!("clock reset");
    }

    // --- Configuration ---

    /// Set the fixed step length in seconds; must be finite and positive
    pub fn set_fixed_delta_time(&mut self, seconds: f64) -> Result<()> {
        if !(seconds > 0.0 && seconds.is_finite()) {
            log::warn!("rejected fixed delta time {seconds}");
            return Err(CadenceError::InvalidFixedDelta(seconds));
        }
        self.fixed_delta_time = seconds;
        log::debug!("fixed delta time set to {seconds}s");
        Ok(())
    }

    /// Set the fixed step as a rate; stores `1 / hz` as the fixed delta
    pub fn set_fixed_rate(&mut self, hz: f64) -> Result<()> {
        if !(hz > 0.0 && hz.is_finite()) {
            log::warn!("rejected fixed rate {hz}");
            return Err(CadenceError::InvalidFixedRate(hz));
        }
        self.fixed_delta_time = 1.0 / hz;
        log::debug!("fixed rate set to {hz}Hz");
        Ok(())
    }

    /// Set the time multiplier; 0 pauses scaled time
    pub fn set_time_scale(&mut self, scale: f64) -> Result<()> {
        if !(scale >= 0.0 && scale.is_finite()) {
            log::warn!("rejected time scale {scale}");
            return Err(CadenceError::InvalidTimeScale(scale));
        }
        self.time_scale = scale;
        Ok(())
    }

    /// Set the clamp applied to raw frame deltas
    pub fn set_max_delta_time(&mut self, seconds: f64) -> Result<()> {
        if !(seconds > 0.0 && seconds.is_finite()) {
            log::warn!("rejected max delta time {seconds}");
            return Err(CadenceError::InvalidMaxDelta(seconds));
        }
        self.max_delta_time = seconds;
        Ok(())
    }

    // --- Query methods ---

    /// Scaled seconds since reset
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Unscaled seconds since reset
    pub fn unscaled_time(&self) -> f64 {
        self.unscaled_time
    }

    /// Scaled delta of the last frame
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Clamped raw delta of the last frame
    pub fn unscaled_delta_time(&self) -> f64 {
        self.unscaled_delta_time
    }

    /// Current time multiplier
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Upper bound on a raw frame delta
    pub fn max_delta_time(&self) -> f64 {
        self.max_delta_time
    }

    /// Fixed step length in seconds
    pub fn fixed_delta_time(&self) -> f64 {
        self.fixed_delta_time
    }

    /// Fixed steps per second
    pub fn fixed_rate(&self) -> f64 {
        1.0 / self.fixed_delta_time
    }

    /// Scaled time consumed by fixed steps
    pub fn fixed_time(&self) -> f64 {
        self.fixed_time
    }

    /// Scaled time not yet consumed by a fixed step
    pub fn fixed_accumulator(&self) -> f64 {
        self.fixed_accumulator
    }

    /// Fixed steps run since reset
    pub fn fixed_frame_count(&self) -> u64 {
        self.fixed_frame_count
    }

    /// Fixed steps drained by the last update
    pub fn fixed_steps_this_frame(&self) -> u64 {
        self.fixed_steps_this_frame
    }

    /// Whether the last update drained at least one fixed step
    pub fn fixed_updated_this_frame(&self) -> bool {
        self.fixed_steps_this_frame > 0
    }

    /// Interpolation fraction between the last and next fixed step
    pub fn fixed_alpha(&self) -> f64 {
        self.fixed_accumulator / self.fixed_delta_time
    }

    /// Frames advanced since reset
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Mean raw delta over the smoothing window
    pub fn smooth_delta_time(&self) -> f64 {
        self.smoothing.average()
    }

    /// Instantaneous frames per second, 0 before the first non-zero frame
    pub fn fps(&self) -> f64 {
        if self.unscaled_delta_time > 0.0 {
            1.0 / self.unscaled_delta_time
        } else {
            0.0
        }
    }

    /// Frames per second from the smoothed delta, 0 while the window is empty
    pub fn smooth_fps(&self) -> f64 {
        let smoothed = self.smooth_delta_time();
        if smoothed > 0.0 {
            1.0 / smoothed
        } else {
            0.0
        }
    }
}
