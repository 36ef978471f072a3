//! Keyboard mapping
//!
//! Key events arrive asynchronously; the simulation only ever polls the
//! resulting `InputState`. Codes follow `KeyboardEvent.code`.

use crate::sim::{InputSource, InputState};

/// Session-level actions bound to buttons and shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    TogglePause,
    Restart,
}

/// Held-key state fed by key down/up events
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    state: InputState,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns the control action bound to it, if any.
    /// Autorepeated presses only refresh held keys and never trigger controls.
    pub fn key_down(&mut self, code: &str, repeat: bool) -> Option<ControlAction> {
        self.set_key(code, true);
        if repeat {
            return None;
        }
        control_for(code)
    }

    pub fn key_up(&mut self, code: &str) {
        self.set_key(code, false);
    }

    /// Release everything (e.g. when the page loses focus)
    pub fn clear(&mut self) {
        self.state = InputState::default();
    }

    /// Whether the browser default action for `code` should be suppressed
    pub fn captures(code: &str) -> bool {
        matches!(code, "Space" | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight")
    }

    fn set_key(&mut self, code: &str, pressed: bool) {
        match code {
            "ArrowLeft" | "KeyA" => self.state.left = pressed,
            "ArrowRight" | "KeyD" => self.state.right = pressed,
            "ArrowUp" | "KeyW" | "Space" => self.state.up = pressed,
            _ => {}
        }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&self) -> InputState {
        self.state
    }
}

fn control_for(code: &str) -> Option<ControlAction> {
    match code {
        "KeyS" => Some(ControlAction::Start),
        "KeyP" | "Escape" => Some(ControlAction::TogglePause),
        "KeyR" => Some(ControlAction::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.key_down("ArrowLeft", false), None);
        assert_eq!(input.key_down("KeyW", false), None);
        assert_eq!(
            input.poll(),
            InputState {
                left: true,
                right: false,
                up: true
            }
        );

        input.key_up("ArrowLeft");
        input.key_down("KeyD", false);
        input.key_up("KeyW");
        assert_eq!(input.poll(), InputState::right());
    }

    #[test]
    fn test_space_jumps() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.key_down("Space", false), None);
        assert!(input.poll().up);
        assert!(KeyboardInput::captures("Space"));
        assert!(!KeyboardInput::captures("KeyR"));
    }

    #[test]
    fn test_control_shortcuts() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.key_down("KeyS", false), Some(ControlAction::Start));
        assert_eq!(input.key_down("KeyP", false), Some(ControlAction::TogglePause));
        assert_eq!(input.key_down("Escape", false), Some(ControlAction::TogglePause));
        assert_eq!(input.key_down("KeyR", false), Some(ControlAction::Restart));
        assert_eq!(input.poll(), InputState::default());
    }

    #[test]
    fn test_autorepeat_ignores_shortcuts() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.key_down("KeyP", false), Some(ControlAction::TogglePause));
        for _ in 0..5 {
            assert_eq!(input.key_down("KeyP", true), None);
            assert_eq!(input.key_down("Escape", true), None);
        }
        // Held movement keys stay held through repeats
        assert_eq!(input.key_down("ArrowLeft", true), None);
        assert_eq!(input.poll(), InputState::left());
    }

    #[test]
    fn test_clear_releases_all() {
        let mut input = KeyboardInput::new();
        input.key_down("KeyA", false);
        input.key_down("Space", false);
        input.clear();
        assert_eq!(input.poll(), InputState::default());
    }
}
