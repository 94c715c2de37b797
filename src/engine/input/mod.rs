// Input handling
//
// Keyboard input for two players sharing one keyboard, plus a handful of
// global display and simulation toggles.
//
// - `action`: player and global actions with their default key maps
// - `config`: per-player key maps, remapping and routing
// - `manager`: turns winit key events into routed actions
//
// ## Usage Example
//
// ```rust
// let input = InputManager::new(2);
//
// // In the event loop
// match input.process_keyboard_event(&key_event) {
//     Some(InputEvent::Player(player, action)) => { /* forward to the bout */ }
//     Some(InputEvent::Global(action)) => { /* flip a display or edge setting */ }
//     None => {}
// }
// ```

pub mod action;
pub mod config;
pub mod manager;

// Re-export commonly used types
pub use action::{Action, GlobalAction};
pub use config::InputEvent;
pub use manager::InputManager;
