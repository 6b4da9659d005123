//! Cadence Runtime - Per-frame time and input state
//!
//! Provides the frame loop building blocks:
//! - `Clock`: scaled/unscaled time, delta clamping, FPS smoothing and a
//!   fixed-timestep accumulator
//! - `InputState`: edge-triggered keyboard and mouse tracking driven by
//!   `InputEvent`s, with a `KeyMap` translating platform key codes
//! - `ActionMap`: named actions bound to keys and mouse buttons
//! - `FrameLoop` / `FrameSystem`: fixed per-frame update ordering

mod action;
mod clock;
mod config;
mod edge;
mod event;
mod frame;
mod input;
mod key;
mod keymap;
mod mouse;
mod smoothing;
mod system;
mod timer;

pub use action::ActionMap;
pub use clock::{Clock, DEFAULT_FIXED_DELTA_TIME, DEFAULT_MAX_DELTA_TIME};
pub use config::{ActionConfig, ClockSettings, InputConfig, RuntimeConfig};
pub use edge::EdgeTable;
pub use event::{raw_button_ordinal, InputEvent};
pub use frame::{FrameLoop, FrameView};
pub use input::InputState;
pub use key::Key;
pub use keymap::KeyMap;
pub use mouse::MouseButton;
pub use smoothing::{SmoothingWindow, SMOOTHING_SAMPLES};
pub use system::FrameSystem;
pub use timer::FrameTimer;

/// Platform key code type carried by [`InputEvent`]
pub use winit::keyboard::KeyCode;
