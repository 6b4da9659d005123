//! Canonical key identifiers

use serde::{Deserialize, Serialize};

/// A canonical keyboard key.
///
/// Declaration order is the dense index used by the input tables. Platform
/// codes with no canonical key resolve to `None` in [`crate::KeyMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    Space,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,

    Alpha0,
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Alpha9,

    Semicolon,
    Equal,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,

    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,

    Up,
    Down,
    Left,
    Right,

    PageUp,
    PageDown,
    Home,
    End,

    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,

    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadDecimal,
    NumpadDivide,
    NumpadMultiply,
    NumpadSubtract,
    NumpadAdd,
    NumpadEnter,
    NumpadEqual,

    LeftShift,
    LeftControl,
    LeftAlt,
    LeftSuper,
    RightShift,
    RightControl,
    RightAlt,
    RightSuper,

    Menu,
}

impl Key {
    /// Every key, in index order
    #[rustfmt::skip]
    pub const ALL: [Key; 118] = {
        use Key::*;
        [
            Space, Apostrophe, Comma, Minus, Period, Slash,
            Alpha0, Alpha1, Alpha2, Alpha3, Alpha4, Alpha5, Alpha6, Alpha7, Alpha8, Alpha9,
            Semicolon, Equal,
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
            LeftBracket, Backslash, RightBracket, GraveAccent,
            Escape, Enter, Tab, Backspace, Insert, Delete,
            Up, Down, Left, Right,
            PageUp, PageDown, Home, End,
            CapsLock, ScrollLock, NumLock, PrintScreen, Pause,
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18,
            F19, F20, F21, F22, F23, F24, F25,
            Numpad0, Numpad1, Numpad2, Numpad3, Numpad4, Numpad5, Numpad6, Numpad7, Numpad8,
            Numpad9, NumpadDecimal, NumpadDivide, NumpadMultiply, NumpadSubtract, NumpadAdd,
            NumpadEnter, NumpadEqual,
            LeftShift, LeftControl, LeftAlt, LeftSuper, RightShift, RightControl, RightAlt,
            RightSuper,
            Menu,
        ]
    };

    /// Number of canonical keys
    pub const COUNT: usize = Self::ALL.len();

    /// Dense table index
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key at a dense table index, `None` when out of range
    pub fn from_index(index: usize) -> Option<Key> {
        Self::ALL.get(index).copied()
    }

    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::LeftShift
                | Key::LeftControl
                | Key::LeftAlt
                | Key::LeftSuper
                | Key::RightShift
                | Key::RightControl
                | Key::RightAlt
                | Key::RightSuper
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i, "{key:?} out of order");
        }
        assert_eq!(Key::Menu.index(), Key::COUNT - 1);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Key::from_index(0), Some(Key::Space));
        assert_eq!(Key::from_index(Key::A.index()), Some(Key::A));
        assert_eq!(Key::from_index(Key::COUNT), None);
    }

    #[test]
    fn test_group_layout() {
        assert_eq!(Key::Alpha9.index() - Key::Alpha0.index(), 9);
        assert_eq!(Key::Z.index() - Key::A.index(), 25);
        assert_eq!(Key::F25.index() - Key::F1.index(), 24);
    }

    #[test]
    fn test_serde_uses_variant_names() {
        #[derive(Deserialize)]
        struct Holder {
            keys: Vec<Key>,
        }
        let holder: Holder = toml::from_str(r#"keys = ["Space", "W", "LeftShift"]"#).unwrap();
        assert_eq!(holder.keys, vec![Key::Space, Key::W, Key::LeftShift]);
        assert!(Key::LeftShift.is_modifier());
        assert!(!Key::W.is_modifier());
    }
}
