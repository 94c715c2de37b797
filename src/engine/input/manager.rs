// Input manager - turns winit key events into player and global actions

use super::action::InputSource;
use super::config::{InputConfigManager, InputEvent};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Routes key presses through the configured key maps
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfigManager,
}

impl InputManager {
    pub fn new(num_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(num_players),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&self, event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        self.process_key(code, event.state, event.repeat)
    }

    /// Only presses count. Held player keys keep re-requesting their action
    /// so a held arrow keeps walking; global toggles ignore auto-repeat.
    pub fn process_key(
        &self,
        code: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        match self.config.route(InputSource::key(code))? {
            InputEvent::Global(_) if repeat => None,
            event => Some(event),
        }
    }

    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{Action, GlobalAction};

    #[test]
    fn test_press_routes_to_player() {
        let manager = InputManager::new(2);
        assert_eq!(
            manager.process_key(KeyCode::KeyD, ElementState::Pressed, false),
            Some(InputEvent::Player(1, Action::MoveRight))
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let manager = InputManager::new(2);
        assert_eq!(
            manager.process_key(KeyCode::KeyD, ElementState::Released, false),
            None
        );
    }

    #[test]
    fn test_repeat_only_for_player_actions() {
        let manager = InputManager::new(2);
        assert_eq!(
            manager.process_key(KeyCode::ArrowLeft, ElementState::Pressed, true),
            Some(InputEvent::Player(0, Action::MoveLeft))
        );
        assert_eq!(
            manager.process_key(KeyCode::KeyZ, ElementState::Pressed, true),
            None
        );
        assert_eq!(
            manager.process_key(KeyCode::KeyZ, ElementState::Pressed, false),
            Some(InputEvent::Global(GlobalAction::TogglePause))
        );
    }

    #[test]
    fn test_unbound_key() {
        let manager = InputManager::new(2);
        assert_eq!(
            manager.process_key(KeyCode::F12, ElementState::Pressed, false),
            None
        );
    }
}
