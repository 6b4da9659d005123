//! Input state management

use cadence_core::Vec2;

use crate::edge::EdgeTable;
use crate::event::InputEvent;
use crate::key::Key;
use crate::keymap::KeyMap;
use crate::mouse::MouseButton;

/// Tracks keyboard and mouse input state per frame.
///
/// Call [`InputState::update`] once at the start of each frame, then feed
/// that frame's events through [`InputState::process_event`]. Queries are
/// pure reads and return `false` for out-of-range identifiers.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: EdgeTable<{ Key::COUNT }>,
    mouse_buttons: EdgeTable<{ MouseButton::COUNT }>,

    /// Current pointer position in window pixels
    mouse_position: Vec2,
    /// Pointer position at the previous frame boundary
    last_mouse_position: Vec2,
    /// Movement between the last two frame boundaries
    mouse_delta: Vec2,
    /// Last wheel sample this frame
    mouse_scroll_delta: Vec2,

    key_map: KeyMap,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Input state translating codes with [`KeyMap::standard`]
    pub fn new() -> Self {
        Self::with_key_map(KeyMap::standard())
    }

    /// Input state translating codes with a caller-supplied table
    pub fn with_key_map(key_map: KeyMap) -> Self {
        Self {
            keys: EdgeTable::new(),
            mouse_buttons: EdgeTable::new(),
            mouse_position: Vec2::ZERO,
            last_mouse_position: Vec2::ZERO,
            mouse_delta: Vec2::ZERO,
            mouse_scroll_delta: Vec2::ZERO,
            key_map,
        }
    }

    /// Table used to resolve platform key codes
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Frame boundary: clear last frame's edges and derive the mouse delta
    pub fn update(&mut self) {
        self.keys.begin_frame();
        self.mouse_buttons.begin_frame();

        self.mouse_delta = self.mouse_position - self.last_mouse_position;
        self.last_mouse_position = self.mouse_position;
        self.mouse_scroll_delta = Vec2::ZERO;
    }

    /// Apply one device event
    pub fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { code, repeat } => {
                if repeat {
                    return;
                }
                match self.key_map.resolve(code) {
                    Some(key) => self.process_key_down(key),
                    None => log::trace!("ignoring unmapped key code {code:?}"),
                }
            }
            InputEvent::KeyUp { code } => match self.key_map.resolve(code) {
                Some(key) => self.process_key_up(key),
                None => log::trace!("ignoring unmapped key code {code:?}"),
            },
            InputEvent::MouseButtonDown { button } => match MouseButton::from_raw(button) {
                Some(button) => self.process_mouse_button_down(button),
                None => log::trace!("ignoring mouse button ordinal {button}"),
            },
            InputEvent::MouseButtonUp { button } => match MouseButton::from_raw(button) {
                Some(button) => self.process_mouse_button_up(button),
                None => log::trace!("ignoring mouse button ordinal {button}"),
            },
            InputEvent::MouseMotion { x, y } => self.process_mouse_move(Vec2::new(x, y)),
            InputEvent::MouseWheel { x, y } => self.process_mouse_wheel(Vec2::new(x, y)),
        }
    }

    /// Process a key press on a canonical key
    pub fn process_key_down(&mut self, key: Key) {
        self.keys.press(key.index());
    }

    /// Process a key release on a canonical key
    pub fn process_key_up(&mut self, key: Key) {
        self.keys.release(key.index());
    }

    /// Process a mouse button press
    pub fn process_mouse_button_down(&mut self, button: MouseButton) {
        self.mouse_buttons.press(button.index());
    }

    /// Process a mouse button release
    pub fn process_mouse_button_up(&mut self, button: MouseButton) {
        self.mouse_buttons.release(button.index());
    }

    /// Overwrite the pointer position; the delta is derived at the next frame boundary
    pub fn process_mouse_move(&mut self, position: Vec2) {
        self.mouse_position = position;
    }

    /// Overwrite the scroll delta; the last wheel event in a frame wins
    pub fn process_mouse_wheel(&mut self, scroll: Vec2) {
        self.mouse_scroll_delta = scroll;
    }

    /// Zero every table, dirty list and pointer value
    pub fn reset(&mut self) {
        self.keys.reset();
        self.mouse_buttons.reset();
        self.mouse_position = Vec2::ZERO;
        self.last_mouse_position = Vec2::ZERO;
        self.mouse_delta = Vec2::ZERO;
        self.mouse_scroll_delta = Vec2::ZERO;
        log::debug!("input state reset");
    }

    // --- Query methods ---

    /// Is a key currently held down?
    pub fn key(&self, key: Key) -> bool {
        self.keys.held(key.index())
    }

    /// Was a key pressed this frame?
    pub fn key_down(&self, key: Key) -> bool {
        self.keys.pressed(key.index())
    }

    /// Was a key released this frame?
    pub fn key_up(&self, key: Key) -> bool {
        self.keys.released(key.index())
    }

    /// Is the key at `index` held? False when out of range
    pub fn key_index(&self, index: usize) -> bool {
        self.keys.held(index)
    }

    /// Was the key at `index` pressed this frame?
    pub fn key_index_down(&self, index: usize) -> bool {
        self.keys.pressed(index)
    }

    /// Was the key at `index` released this frame?
    pub fn key_index_up(&self, index: usize) -> bool {
        self.keys.released(index)
    }

    /// Was any key pressed since the last frame boundary?
    pub fn any_key_down(&self) -> bool {
        self.keys.any_down()
    }

    /// Key presses since the last frame boundary
    pub fn any_key_down_count(&self) -> u32 {
        self.keys.any_down_count()
    }

    /// Is any key currently held?
    pub fn any_key_held(&self) -> bool {
        self.keys.any_held()
    }

    /// Keys currently held, in index order
    pub fn held_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.held_indices().filter_map(Key::from_index)
    }

    /// Keys pressed this frame, in event order
    pub fn keys_just_pressed(&self) -> impl Iterator<Item = Key> + '_ {
        self.changed_keys()
            .filter(|&index| self.keys.pressed(index))
            .filter_map(Key::from_index)
    }

    /// Keys released this frame, in event order
    pub fn keys_just_released(&self) -> impl Iterator<Item = Key> + '_ {
        self.changed_keys()
            .filter(|&index| self.keys.released(index))
            .filter_map(Key::from_index)
    }

    /// Dirty key indices with repeats removed, first occurrence kept
    fn changed_keys(&self) -> impl Iterator<Item = usize> + '_ {
        let mut seen = [false; Key::COUNT];
        self.keys
            .dirty()
            .iter()
            .copied()
            .filter(move |&index| !std::mem::replace(&mut seen[index], true))
    }

    /// Is a mouse button currently held?
    pub fn mouse_button(&self, button: MouseButton) -> bool {
        self.mouse_buttons.held(button.index())
    }

    /// Was a mouse button pressed this frame?
    pub fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.pressed(button.index())
    }

    /// Was a mouse button released this frame?
    pub fn mouse_button_up(&self, button: MouseButton) -> bool {
        self.mouse_buttons.released(button.index())
    }

    /// Is the button at `index` held? False when out of range
    pub fn mouse_button_index(&self, index: usize) -> bool {
        self.mouse_buttons.held(index)
    }

    /// Was the button at `index` pressed this frame?
    pub fn mouse_button_index_down(&self, index: usize) -> bool {
        self.mouse_buttons.pressed(index)
    }

    /// Was the button at `index` released this frame?
    pub fn mouse_button_index_up(&self, index: usize) -> bool {
        self.mouse_buttons.released(index)
    }

    /// Was any mouse button pressed since the last frame boundary?
    pub fn any_mouse_button_down(&self) -> bool {
        self.mouse_buttons.any_down()
    }

    /// Is any mouse button currently held?
    pub fn any_mouse_button_held(&self) -> bool {
        self.mouse_buttons.any_held()
    }

    /// Get the current mouse position
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Mouse position at the last frame boundary
    pub fn last_mouse_position(&self) -> Vec2 {
        self.last_mouse_position
    }

    /// Get the mouse movement delta this frame
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Get the scroll wheel delta this frame
    pub fn mouse_scroll_delta(&self) -> Vec2 {
        self.mouse_scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn key_down(code: KeyCode) -> InputEvent {
        InputEvent::KeyDown {
            code,
            repeat: false,
        }
    }

    fn key_up(code: KeyCode) -> InputEvent {
        InputEvent::KeyUp { code }
    }

    #[test]
    fn test_initial_state() {
        let input = InputState::new();
        for key in Key::ALL {
            assert!(!input.key(key));
            assert!(!input.key_down(key));
            assert!(!input.key_up(key));
        }
        for button in MouseButton::ALL {
            assert!(!input.mouse_button(button));
        }
        assert!(!input.any_key_down());
        assert_eq!(input.mouse_position(), Vec2::ZERO);
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_key_transitions() {
        let mut input = InputState::new();

        input.update();
        input.process_event(&key_down(KeyCode::KeyW));
        assert!(input.key(Key::W));
        assert!(input.key_down(Key::W));
        assert!(input.any_key_down());

        // Next frame clears the press edge
        input.update();
        assert!(input.key(Key::W));
        assert!(!input.key_down(Key::W));
        assert!(!input.any_key_down());
        assert!(input.any_key_held());

        input.process_event(&key_up(KeyCode::KeyW));
        assert!(!input.key(Key::W));
        assert!(input.key_up(Key::W));

        input.update();
        assert!(!input.key_up(Key::W));
    }

    #[test]
    fn test_key_down_lasts_exactly_one_frame() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::Space));
        assert!(input.key_down(Key::Space));

        for _ in 0..3 {
            input.update();
            assert!(!input.key_down(Key::Space));
            assert!(input.key(Key::Space));
        }
    }

    #[test]
    fn test_repeat_never_triggers_press() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::KeyA));
        input.update();

        input.process_event(&InputEvent::KeyDown {
            code: KeyCode::KeyA,
            repeat: true,
        });
        assert!(!input.key_down(Key::A));
        assert!(input.key(Key::A));

        // A repeat with no prior press is ignored entirely
        input.process_event(&InputEvent::KeyDown {
            code: KeyCode::KeyB,
            repeat: true,
        });
        assert!(!input.key(Key::B));
    }

    #[test]
    fn test_duplicate_down_is_idempotent() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::KeyD));
        input.process_event(&key_down(KeyCode::KeyD));
        assert_eq!(input.any_key_down_count(), 1);
        assert_eq!(input.keys_just_pressed().collect::<Vec<_>>(), vec![Key::D]);
    }

    #[test]
    fn test_just_pressed_lists_each_key_once() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::KeyA));
        input.process_event(&key_up(KeyCode::KeyA));
        input.process_event(&key_down(KeyCode::KeyA));
        input.process_event(&key_down(KeyCode::KeyB));
        assert_eq!(input.keys_just_pressed().collect::<Vec<_>>(), vec![Key::A, Key::B]);
        assert_eq!(input.keys_just_released().collect::<Vec<_>>(), vec![Key::A]);
    }

    #[test]
    fn test_heavy_toggling_reports_each_key_once() {
        let mut input = InputState::new();
        input.update();
        for _ in 0..50_000 {
            input.process_key_down(Key::Q);
            input.process_key_up(Key::Q);
            input.process_key_down(Key::E);
            input.process_key_up(Key::E);
        }
        input.process_key_down(Key::Q);

        assert_eq!(input.keys_just_pressed().collect::<Vec<_>>(), vec![Key::Q, Key::E]);
        assert_eq!(input.keys_just_released().collect::<Vec<_>>(), vec![Key::Q, Key::E]);
        assert_eq!(input.any_key_down_count(), 100_001);

        input.update();
        assert_eq!(input.keys_just_pressed().count(), 0);
        assert!(input.key(Key::Q));
    }

    #[test]
    fn test_up_without_down_is_noop() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_up(KeyCode::KeyQ));
        assert!(!input.key_up(Key::Q));
        assert_eq!(input.keys_just_released().count(), 0);
    }

    #[test]
    fn test_unmapped_codes_are_ignored() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::F30));
        assert!(!input.any_key_down());
        assert_eq!(input.held_keys().count(), 0);
    }

    #[test]
    fn test_release_mid_frame_still_counts_as_any_down() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::KeyE));
        input.process_event(&key_up(KeyCode::KeyE));
        assert!(input.any_key_down());
        assert!(input.key_down(Key::E));
        assert!(input.key_up(Key::E));
        assert!(!input.key(Key::E));

        input.update();
        assert!(!input.any_key_down());
        assert!(!input.key_down(Key::E));
        assert!(!input.key_up(Key::E));
    }

    #[test]
    fn test_untouched_keys_stay_clear() {
        let mut input = InputState::new();
        for frame in 0..10 {
            input.update();
            if frame % 2 == 0 {
                input.process_event(&key_down(KeyCode::KeyJ));
            } else {
                input.process_event(&key_up(KeyCode::KeyJ));
            }
            for key in Key::ALL.iter().filter(|&&k| k != Key::J) {
                assert!(!input.key_down(*key));
                assert!(!input.key_up(*key));
            }
        }
    }

    #[test]
    fn test_custom_key_map() {
        let map = KeyMap::new().with(KeyCode::KeyZ, Key::Y);
        let mut input = InputState::with_key_map(map);
        input.update();
        input.process_event(&key_down(KeyCode::KeyZ));
        input.process_event(&key_down(KeyCode::KeyY));
        assert!(input.key(Key::Y));
        assert!(!input.key(Key::Z));
        assert_eq!(input.key_map().len(), 1);
    }

    #[test]
    fn test_key_index_queries() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::Enter));
        assert!(input.key_index(Key::Enter.index()));
        assert!(input.key_index_down(Key::Enter.index()));
        assert!(!input.key_index_up(Key::Enter.index()));
        assert!(!input.key_index(Key::COUNT));
        assert!(!input.key_index_down(usize::MAX));
    }

    #[test]
    fn test_mouse_buttons() {
        let mut input = InputState::new();
        input.update();

        input.process_event(&InputEvent::MouseButtonDown { button: 1 });
        assert!(input.mouse_button(MouseButton::Left));
        assert!(input.mouse_button_down(MouseButton::Left));
        assert!(input.mouse_button_index(0));
        assert!(input.any_mouse_button_down());

        input.process_event(&InputEvent::MouseButtonDown { button: 3 });
        assert!(input.mouse_button(MouseButton::Right));
        assert!(input.mouse_button_index_down(1));

        input.update();
        assert!(!input.mouse_button_down(MouseButton::Left));
        assert!(!input.any_mouse_button_down());
        assert!(input.any_mouse_button_held());

        input.process_event(&InputEvent::MouseButtonUp { button: 1 });
        assert!(!input.mouse_button(MouseButton::Left));
        assert!(input.mouse_button_up(MouseButton::Left));
        assert!(input.mouse_button_index_up(0));
    }

    #[test]
    fn test_out_of_range_mouse_buttons_dropped() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&InputEvent::MouseButtonDown { button: 0 });
        input.process_event(&InputEvent::MouseButtonDown { button: 9 });
        assert!(!input.any_mouse_button_down());
        assert!(!input.mouse_button_index(5));
    }

    #[test]
    fn test_mouse_delta() {
        let mut input = InputState::new();

        input.process_event(&InputEvent::MouseMotion { x: 10.0, y: 10.0 });
        input.update();
        input.process_event(&InputEvent::MouseMotion { x: 13.0, y: 14.0 });
        input.update();
        assert_eq!(input.mouse_delta(), Vec2::new(3.0, 4.0));
        assert_eq!(input.last_mouse_position(), Vec2::new(13.0, 14.0));

        input.update();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_motion_overwrites_position() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&InputEvent::MouseMotion { x: 5.0, y: 5.0 });
        input.process_event(&InputEvent::MouseMotion { x: 8.0, y: 1.0 });
        assert_eq!(input.mouse_position(), Vec2::new(8.0, 1.0));

        input.update();
        assert_eq!(input.mouse_delta(), Vec2::new(8.0, 1.0));
    }

    #[test]
    fn test_scroll_last_event_wins_and_resets() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&InputEvent::MouseWheel { x: 0.0, y: 1.0 });
        input.process_event(&InputEvent::MouseWheel { x: 0.0, y: 3.0 });
        assert_eq!(input.mouse_scroll_delta(), Vec2::new(0.0, 3.0));

        input.update();
        assert_eq!(input.mouse_scroll_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.update();
        input.process_event(&key_down(KeyCode::KeyW));
        input.process_event(&InputEvent::MouseButtonDown { button: 2 });
        input.process_event(&InputEvent::MouseMotion { x: 4.0, y: 4.0 });
        input.process_event(&InputEvent::MouseWheel { x: 1.0, y: 1.0 });

        input.reset();

        assert!(!input.key(Key::W));
        assert!(!input.key_down(Key::W));
        assert!(!input.any_key_down());
        assert!(!input.mouse_button(MouseButton::Middle));
        assert_eq!(input.mouse_position(), Vec2::ZERO);
        assert_eq!(input.last_mouse_position(), Vec2::ZERO);
        assert_eq!(input.mouse_scroll_delta(), Vec2::ZERO);

        input.update();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }
}
