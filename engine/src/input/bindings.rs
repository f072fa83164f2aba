//! Input Bindings Module
//!
//! Maps physical keys to scene actions, allowing key remapping without
//! touching the event loop.

use std::collections::HashMap;

use super::KeyCode;

/// Logical actions the splash scene responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneAction {
    /// Restart the fall cycle (default: R)
    Reset,
    /// Toggle wireframe rendering (default: W)
    ToggleWireframe,
    /// Close the window (default: Escape)
    Exit,
}

impl SceneAction {
    pub fn description(self) -> &'static str {
        match self {
            SceneAction::Reset => "reset animation",
            SceneAction::ToggleWireframe => "toggle wireframe mode",
            SceneAction::Exit => "exit",
        }
    }
}

/// Bidirectional key <-> action map. Each key and each action has at most
/// one binding.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, SceneAction>,
    action_to_key: HashMap<SceneAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Default bindings:
    /// - R = Reset
    /// - W = ToggleWireframe
    /// - Escape = Exit
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::R, SceneAction::Reset);
        bindings.bind(KeyCode::W, SceneAction::ToggleWireframe);
        bindings.bind(KeyCode::Escape, SceneAction::Exit);

        bindings
    }

    /// Bind a key to an action, dropping any previous binding of either.
    pub fn bind(&mut self, key: KeyCode, action: SceneAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    pub fn get_action(&self, key: KeyCode) -> Option<SceneAction> {
        self.key_to_action.get(&key).copied()
    }

    pub fn get_key(&self, action: SceneAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// `(key, action)` pairs in a stable order, for printing controls.
    pub fn help_lines(&self) -> Vec<String> {
        [SceneAction::Reset, SceneAction::ToggleWireframe, SceneAction::Exit]
            .into_iter()
            .filter_map(|action| {
                self.get_key(action)
                    .map(|key| format!("Press {} to {}", key.label(), action.description()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_action(KeyCode::R), Some(SceneAction::Reset));
        assert_eq!(bindings.get_action(KeyCode::W), Some(SceneAction::ToggleWireframe));
        assert_eq!(bindings.get_action(KeyCode::Escape), Some(SceneAction::Exit));
        assert_eq!(bindings.get_action(KeyCode::Unknown), None);
    }

    #[test]
    fn test_rebind_key() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::W, SceneAction::Reset);

        // R and the old W action should no longer be bound
        assert_eq!(bindings.get_action(KeyCode::R), None);
        assert_eq!(bindings.get_action(KeyCode::W), Some(SceneAction::Reset));
        assert_eq!(bindings.get_key(SceneAction::Reset), Some(KeyCode::W));
        assert_eq!(bindings.get_key(SceneAction::ToggleWireframe), None);
    }

    #[test]
    fn test_every_known_key_is_bound() {
        let bindings = KeyBindings::new();
        for key in KeyCode::ALL {
            assert!(bindings.get_action(key).is_some(), "{:?} has no action", key);
        }
    }

    #[test]
    fn test_help_lines() {
        let lines = KeyBindings::new().help_lines();
        assert_eq!(
            lines,
            vec![
                "Press R to reset animation".to_string(),
                "Press W to toggle wireframe mode".to_string(),
                "Press ESC to exit".to_string(),
            ]
        );
    }
}
