//! Named actions bound to keys and mouse buttons

use std::collections::BTreeMap;

use crate::config::{ActionConfig, InputConfig};
use crate::input::InputState;
use crate::key::Key;
use crate::mouse::MouseButton;

/// Maps action names to key and mouse button bindings.
///
/// Queries read an [`InputState`]; an action is active when any of its
/// bindings is.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionMap {
    actions: BTreeMap<String, ActionConfig>,
}

impl Default for ActionMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind_keys("move_forward", vec![Key::W, Key::Up]);
        map.bind_keys("move_backward", vec![Key::S, Key::Down]);
        map.bind_keys("move_left", vec![Key::A, Key::Left]);
        map.bind_keys("move_right", vec![Key::D, Key::Right]);
        map.bind_keys("jump", vec![Key::Space]);
        map.bind_keys("interact", vec![Key::E]);
        map.bind_keys("sprint", vec![Key::LeftShift]);
        map.bind_mouse_buttons("fire", vec![MouseButton::Left]);
        map
    }
}

impl ActionMap {
    /// A map with no actions
    pub fn empty() -> Self {
        Self {
            actions: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            actions: config.actions.clone(),
        }
    }

    pub fn to_config(&self) -> InputConfig {
        InputConfig {
            actions: self.actions.clone(),
        }
    }

    /// Bind an action to one or more keys, replacing its previous keys
    pub fn bind_keys(&mut self, action: impl Into<String>, keys: Vec<Key>) {
        self.actions.entry(action.into()).or_default().keys = keys;
    }

    /// Bind an action to one or more mouse buttons, replacing its previous buttons
    pub fn bind_mouse_buttons(&mut self, action: impl Into<String>, buttons: Vec<MouseButton>) {
        self.actions.entry(action.into()).or_default().mouse_buttons = buttons;
    }

    /// Remove an action and all its bindings
    pub fn unbind(&mut self, action: &str) -> Option<ActionConfig> {
        self.actions.remove(action)
    }

    pub fn bindings(&self, action: &str) -> Option<&ActionConfig> {
        self.actions.get(action)
    }

    /// Is an action currently held? (any bound key or mouse button is down)
    pub fn pressed(&self, input: &InputState, action: &str) -> bool {
        self.any_binding(action, |key| input.key(key), |btn| input.mouse_button(btn))
    }

    /// Was an action just pressed this frame?
    pub fn just_pressed(&self, input: &InputState, action: &str) -> bool {
        self.any_binding(
            action,
            |key| input.key_down(key),
            |btn| input.mouse_button_down(btn),
        )
    }

    /// Was an action just released this frame?
    pub fn just_released(&self, input: &InputState, action: &str) -> bool {
        self.any_binding(
            action,
            |key| input.key_up(key),
            |btn| input.mouse_button_up(btn),
        )
    }

    /// All actions that were just pressed this frame, sorted by name
    pub fn actions_just_pressed(&self, input: &InputState) -> Vec<String> {
        self.actions
            .keys()
            .filter(|action| self.just_pressed(input, action))
            .cloned()
            .collect()
    }

    /// All registered action names, sorted
    pub fn action_names(&self) -> Vec<String> {
        self.actions.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn any_binding(
        &self,
        action: &str,
        key_test: impl Fn(Key) -> bool,
        button_test: impl Fn(MouseButton) -> bool,
    ) -> bool {
        self.actions
            .get(action)
            .map(|bindings| {
                bindings.keys.iter().any(|&key| key_test(key))
                    || bindings.mouse_buttons.iter().any(|&btn| button_test(btn))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let actions = ActionMap::default();
        let mut input = InputState::new();

        assert!(!actions.pressed(&input, "move_forward"));

        input.update();
        input.process_key_down(Key::W);
        assert!(actions.pressed(&input, "move_forward"));
        assert!(actions.just_pressed(&input, "move_forward"));

        input.update();
        assert!(actions.pressed(&input, "move_forward"));
        assert!(!actions.just_pressed(&input, "move_forward"));
    }

    #[test]
    fn test_custom_binding() {
        let mut actions = ActionMap::empty();
        actions.bind_keys("fire", vec![Key::F, Key::LeftControl]);
        let mut input = InputState::new();

        input.process_key_down(Key::F);
        assert!(actions.pressed(&input, "fire"));

        input.process_key_up(Key::F);
        assert!(actions.just_released(&input, "fire"));
        input.process_key_down(Key::LeftControl);
        assert!(actions.pressed(&input, "fire"));
    }

    #[test]
    fn test_mouse_binding() {
        let actions = ActionMap::default();
        let mut input = InputState::new();
        input.update();
        input.process_mouse_button_down(MouseButton::Left);
        assert!(actions.pressed(&input, "fire"));
        assert_eq!(actions.actions_just_pressed(&input), vec!["fire".to_string()]);
    }

    #[test]
    fn test_unknown_action_is_inactive() {
        let actions = ActionMap::default();
        let mut input = InputState::new();
        input.process_key_down(Key::W);
        assert!(!actions.pressed(&input, "teleport"));
        assert!(!actions.just_pressed(&input, "teleport"));
    }

    #[test]
    fn test_actions_just_pressed_sorted() {
        let actions = ActionMap::default();
        let mut input = InputState::new();
        input.update();
        input.process_key_down(Key::Space);
        input.process_key_down(Key::E);
        input.process_key_down(Key::W);
        assert_eq!(
            actions.actions_just_pressed(&input),
            vec!["interact", "jump", "move_forward"]
        );
    }

    #[test]
    fn test_unbind_and_names() {
        let mut actions = ActionMap::empty();
        actions.bind_keys("b", vec![Key::B]);
        actions.bind_keys("a", vec![Key::A]);
        assert_eq!(actions.action_names(), vec!["a", "b"]);

        assert!(actions.unbind("a").is_some());
        assert!(actions.unbind("a").is_none());
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_config_round_trip() {
        let actions = ActionMap::default();
        let restored = ActionMap::from_config(&actions.to_config());
        assert_eq!(restored, actions);
        assert_eq!(
            restored.bindings("fire").unwrap().mouse_buttons,
            vec![MouseButton::Left]
        );
    }
}
