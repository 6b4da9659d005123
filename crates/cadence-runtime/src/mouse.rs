//! Canonical mouse button identifiers

use serde::{Deserialize, Serialize};

/// A canonical mouse button; the discriminant is the table index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    X1 = 3,
    X2 = 4,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::X1,
        MouseButton::X2,
    ];

    /// Number of supported buttons
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<MouseButton> {
        Self::ALL.get(index).copied()
    }

    /// Resolve a platform button ordinal.
    ///
    /// Ordinals are 1-based in platform order: 1 left, 2 middle, 3 right,
    /// 4 and 5 the side buttons. Anything else has no canonical button.
    pub fn from_raw(ordinal: u32) -> Option<MouseButton> {
        match ordinal {
            1 => Some(MouseButton::Left),
            2 => Some(MouseButton::Middle),
            3 => Some(MouseButton::Right),
            4 => Some(MouseButton::X1),
            5 => Some(MouseButton::X2),
            _ => None,
        }
    }

    /// Platform ordinal for this button, the inverse of [`MouseButton::from_raw`]
    pub fn to_raw(self) -> u32 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::X1 => 4,
            MouseButton::X2 => 5,
        }
    }
}
