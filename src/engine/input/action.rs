// Input action definitions and default key maps

use winit::keyboard::KeyCode;

/// Per-player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    PunchLeft,
    PunchRight,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::PunchLeft,
        Action::PunchRight,
    ];
}

/// Actions that affect the whole simulation rather than one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalAction {
    TogglePause,
    HideBoxes,
    ShowAbsoluteBoxes,
    ShowRelativeBoxes,
    ToggleReferenceFrame,
    BoxWorld,
    CylinderWorld,
    Unbounded,
    /// Switch clips between linear and ease-in/out interpolation
    ToggleEasing,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default bindings for Player 1: arrows to move and jump, `/` and right
/// Shift to punch
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::Slash), Action::PunchLeft),
        (InputSource::key(KeyCode::ShiftRight), Action::PunchRight),
    ]
}

/// Default bindings for Player 2: A/D/W to move and jump, Q and E to punch
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::KeyQ), Action::PunchLeft),
        (InputSource::key(KeyCode::KeyE), Action::PunchRight),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, GlobalAction)> {
    vec![
        (InputSource::key(KeyCode::KeyZ), GlobalAction::TogglePause),
        (InputSource::key(KeyCode::KeyN), GlobalAction::HideBoxes),
        (InputSource::key(KeyCode::KeyL), GlobalAction::ShowAbsoluteBoxes),
        (InputSource::key(KeyCode::KeyR), GlobalAction::ShowRelativeBoxes),
        (InputSource::key(KeyCode::KeyF), GlobalAction::ToggleReferenceFrame),
        (InputSource::key(KeyCode::KeyB), GlobalAction::BoxWorld),
        (InputSource::key(KeyCode::KeyC), GlobalAction::CylinderWorld),
        (InputSource::key(KeyCode::KeyU), GlobalAction::Unbounded),
        (InputSource::key(KeyCode::KeyI), GlobalAction::ToggleEasing),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_each_player_binds_every_action() {
        for bindings in [default_p1_bindings(), default_p2_bindings()] {
            let actions: HashSet<Action> = bindings.iter().map(|(_, a)| *a).collect();
            assert_eq!(actions, HashSet::from(Action::ALL));
        }
    }

    #[test]
    fn test_no_key_is_shared() {
        let mut seen = HashSet::new();
        let sources = default_p1_bindings()
            .into_iter()
            .map(|(s, _)| s)
            .chain(default_p2_bindings().into_iter().map(|(s, _)| s))
            .chain(global_bindings().into_iter().map(|(s, _)| s));
        for source in sources {
            assert!(seen.insert(source), "Duplicate input source {:?}", source);
        }
    }
}
