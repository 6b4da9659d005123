//! Device events consumed by the input state

use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A low-level device event in platform terms.
///
/// Key events carry the platform key code and mouse button events the raw
/// platform ordinal; both are translated when the event is processed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    KeyDown {
        code: KeyCode,
        #[serde(default)]
        repeat: bool,
    },
    KeyUp {
        code: KeyCode,
    },
    MouseButtonDown {
        button: u32,
    },
    MouseButtonUp {
        button: u32,
    },
    /// Absolute pointer position in window pixels
    MouseMotion {
        x: f32,
        y: f32,
    },
    MouseWheel {
        x: f32,
        y: f32,
    },
}

impl InputEvent {
    /// Convert a winit window event.
    ///
    /// Returns `None` for events that carry no input state (resize, focus,
    /// redraw, ...) and for keys without a physical code.
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown {
                        code,
                        repeat: event.repeat,
                    },
                    ElementState::Released => InputEvent::KeyUp { code },
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = raw_button_ordinal(*button);
                Some(match state {
                    ElementState::Pressed => InputEvent::MouseButtonDown { button },
                    ElementState::Released => InputEvent::MouseButtonUp { button },
                })
            }
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMotion {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                Some(InputEvent::MouseWheel { x, y })
            }
            _ => None,
        }
    }
}

/// Platform ordinal for a winit button (1 left, 2 middle, 3 right, 4/5 side)
pub fn raw_button_ordinal(button: winit::event::MouseButton) -> u32 {
    use winit::event::MouseButton as W;
    match button {
        W::Left => 1,
        W::Middle => 2,
        W::Right => 3,
        W::Back => 4,
        W::Forward => 5,
        // Past the side buttons; resolves to no canonical button
        W::Other(n) => 6 + u32::from(n),
    }
}
