//! Translation table from platform key codes to canonical keys

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use crate::key::Key;

/// Immutable lookup from platform key codes to [`Key`].
///
/// Built explicitly and handed to [`crate::InputState`] at construction.
/// Codes without an entry resolve to `None` and their events are dropped.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    table: HashMap<KeyCode, Key>,
}

impl KeyMap {
    /// An empty map that resolves nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every physical key that has a canonical counterpart
    pub fn standard() -> Self {
        use KeyCode as C;
        [
            (C::Space, Key::Space),
            (C::Quote, Key::Apostrophe),
            (C::Comma, Key::Comma),
            (C::Minus, Key::Minus),
            (C::Period, Key::Period),
            (C::Slash, Key::Slash),
            (C::Digit0, Key::Alpha0),
            (C::Digit1, Key::Alpha1),
            (C::Digit2, Key::Alpha2),
            (C::Digit3, Key::Alpha3),
            (C::Digit4, Key::Alpha4),
            (C::Digit5, Key::Alpha5),
            (C::Digit6, Key::Alpha6),
            (C::Digit7, Key::Alpha7),
            (C::Digit8, Key::Alpha8),
            (C::Digit9, Key::Alpha9),
            (C::Semicolon, Key::Semicolon),
            (C::Equal, Key::Equal),
            (C::KeyA, Key::A),
            (C::KeyB, Key::B),
            (C::KeyC, Key::C),
            (C::KeyD, Key::D),
            (C::KeyE, Key::E),
            (C::KeyF, Key::F),
            (C::KeyG, Key::G),
            (C::KeyH, Key::H),
            (C::KeyI, Key::I),
            (C::KeyJ, Key::J),
            (C::KeyK, Key::K),
            (C::KeyL, Key::L),
            (C::KeyM, Key::M),
            (C::KeyN, Key::N),
            (C::KeyO, Key::O),
            (C::KeyP, Key::P),
            (C::KeyQ, Key::Q),
            (C::KeyR, Key::R),
            (C::KeyS, Key::S),
            (C::KeyT, Key::T),
            (C::KeyU, Key::U),
            (C::KeyV, Key::V),
            (C::KeyW, Key::W),
            (C::KeyX, Key::X),
            (C::KeyY, Key::Y),
            (C::KeyZ, Key::Z),
            (C::BracketLeft, Key::LeftBracket),
            (C::Backslash, Key::Backslash),
            (C::BracketRight, Key::RightBracket),
            (C::Backquote, Key::GraveAccent),
            (C::Escape, Key::Escape),
            (C::Enter, Key::Enter),
            (C::Tab, Key::Tab),
            (C::Backspace, Key::Backspace),
            (C::Insert, Key::Insert),
            (C::Delete, Key::Delete),
            (C::ArrowUp, Key::Up),
            (C::ArrowDown, Key::Down),
            (C::ArrowLeft, Key::Left),
            (C::ArrowRight, Key::Right),
            (C::PageUp, Key::PageUp),
            (C::PageDown, Key::PageDown),
            (C::Home, Key::Home),
            (C::End, Key::End),
            (C::CapsLock, Key::CapsLock),
            (C::ScrollLock, Key::ScrollLock),
            (C::NumLock, Key::NumLock),
            (C::PrintScreen, Key::PrintScreen),
            (C::Pause, Key::Pause),
            (C::F1, Key::F1),
            (C::F2, Key::F2),
            (C::F3, Key::F3),
            (C::F4, Key::F4),
            (C::F5, Key::F5),
            (C::F6, Key::F6),
            (C::F7, Key::F7),
            (C::F8, Key::F8),
            (C::F9, Key::F9),
            (C::F10, Key::F10),
            (C::F11, Key::F11),
            (C::F12, Key::F12),
            (C::F13, Key::F13),
            (C::F14, Key::F14),
            (C::F15, Key::F15),
            (C::F16, Key::F16),
            (C::F17, Key::F17),
            (C::F18, Key::F18),
            (C::F19, Key::F19),
            (C::F20, Key::F20),
            (C::F21, Key::F21),
            (C::F22, Key::F22),
            (C::F23, Key::F23),
            (C::F24, Key::F24),
            (C::F25, Key::F25),
            (C::Numpad0, Key::Numpad0),
            (C::Numpad1, Key::Numpad1),
            (C::Numpad2, Key::Numpad2),
            (C::Numpad3, Key::Numpad3),
            (C::Numpad4, Key::Numpad4),
            (C::Numpad5, Key::Numpad5),
            (C::Numpad6, Key::Numpad6),
            (C::Numpad7, Key::Numpad7),
            (C::Numpad8, Key::Numpad8),
            (C::Numpad9, Key::Numpad9),
            (C::NumpadDecimal, Key::NumpadDecimal),
            (C::NumpadDivide, Key::NumpadDivide),
            (C::NumpadMultiply, Key::NumpadMultiply),
            (C::NumpadSubtract, Key::NumpadSubtract),
            (C::NumpadAdd, Key::NumpadAdd),
            (C::NumpadEnter, Key::NumpadEnter),
            (C::NumpadEqual, Key::NumpadEqual),
            (C::ShiftLeft, Key::LeftShift),
            (C::ControlLeft, Key::LeftControl),
            (C::AltLeft, Key::LeftAlt),
            (C::SuperLeft, Key::LeftSuper),
            (C::ShiftRight, Key::RightShift),
            (C::ControlRight, Key::RightControl),
            (C::AltRight, Key::RightAlt),
            (C::SuperRight, Key::RightSuper),
            (C::ContextMenu, Key::Menu),
        ]
        .into_iter()
        .collect()
    }

    /// Add or replace one entry
    pub fn with(mut self, code: KeyCode, key: Key) -> Self {
        self.table.insert(code, key);
        self
    }

    /// Canonical key for a platform code, if any
    #[inline]
    pub fn resolve(&self, code: KeyCode) -> Option<Key> {
        self.table.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeyCode, Key)> + '_ {
        self.table.iter().map(|(code, key)| (*code, *key))
    }
}

impl FromIterator<(KeyCode, Key)> for KeyMap {
    fn from_iter<I: IntoIterator<Item = (KeyCode, Key)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}
