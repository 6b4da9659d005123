//! Per-frame driver tying the clock and input state together

use std::time::Duration;

use cadence_core::Result;

use crate::action::ActionMap;
use crate::clock::Clock;
use crate::config::RuntimeConfig;
use crate::event::InputEvent;
use crate::input::InputState;
use crate::system::FrameSystem;

/// Read-only view of the frame state handed to systems
#[derive(Clone, Copy)]
pub struct FrameView<'a> {
    pub clock: &'a Clock,
    pub input: &'a InputState,
    pub actions: &'a ActionMap,
}

impl FrameView<'_> {
    pub fn action_pressed(&self, action: &str) -> bool {
        self.actions.pressed(self.input, action)
    }

    pub fn action_just_pressed(&self, action: &str) -> bool {
        self.actions.just_pressed(self.input, action)
    }
}

/// Owns one clock and one input state and advances them in frame order:
/// clock, input frame boundary, then the frame's events.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    pub clock: Clock,
    pub input: InputState,
    pub actions: ActionMap,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let clock = Clock::from_settings(&config.clock)?;
        let actions = config
            .input
            .as_ref()
            .map(ActionMap::from_config)
            .unwrap_or_default();
        Ok(Self {
            clock,
            input: InputState::new(),
            actions,
        })
    }

    /// Advance time by `raw` and apply this frame's events
    pub fn begin_frame<I>(&mut self, raw: Duration, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.clock.advance(raw);
        self.apply_input(events);
    }

    /// Advance time by `raw_seconds` and apply this frame's events.
    ///
    /// Stalls of any length, `inf` included, are clamped by the clock.
    /// Negative or NaN deltas are rejected before input is touched.
    pub fn begin_frame_secs<I>(&mut self, raw_seconds: f64, events: I) -> Result<()>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.clock.update(raw_seconds)?;
        self.apply_input(events);
        Ok(())
    }

    fn apply_input<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.input.update();
        for event in events {
            self.input.process_event(&event);
        }
        log::trace!(
            "frame {} dt {:.5}s fixed steps {}",
            self.clock.frame_count(),
            self.clock.delta_time(),
            self.clock.fixed_steps_this_frame()
        );
    }

    /// Begin a frame, then run `system`'s fixed steps followed by its update
    pub fn run_frame<I, S>(&mut self, raw: Duration, events: I, system: &mut S) -> Result<()>
    where
        I: IntoIterator<Item = InputEvent>,
        S: FrameSystem + ?Sized,
    {
        self.begin_frame(raw, events);

        let view = self.view();
        let fixed_dt = self.clock.fixed_delta_time();
        for _ in 0..self.clock.fixed_steps_this_frame() {
            system.fixed_update(&view, fixed_dt)?;
        }
        system.update(&view, self.clock.delta_time())
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            clock: &self.clock,
            input: &self.input,
            actions: &self.actions,
        }
    }

    /// Reset clock and input to their zero state; bindings are kept
    pub fn reset(&mut self) {
        self.clock.reset();
        self.input.reset();
    }
}
