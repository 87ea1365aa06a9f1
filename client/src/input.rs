//! Keyboard mapping.

use eframe::egui::{Event, Key};
use game::prelude::Direction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Turn the snake.
    Turn(Direction),

    /// Start the game over.
    Restart,

    /// Close the window.
    Quit,
}

/// Return the action bound to `key`, if any.
pub fn key_action(key: Key) -> Option<KeyAction> {
    let action = match key {
        Key::ArrowUp | Key::W => KeyAction::Turn(Direction::Up),
        Key::ArrowDown | Key::S => KeyAction::Turn(Direction::Down),
        Key::ArrowLeft | Key::A => KeyAction::Turn(Direction::Left),
        Key::ArrowRight | Key::D => KeyAction::Turn(Direction::Right),
        Key::R => KeyAction::Restart,
        Key::Escape => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Collect keys pressed down during a frame, in the order they came.
pub fn pressed_keys(events: &[Event]) -> Vec<Key> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key, pressed: true, ..
            } => Some(*key),
            _ => None,
        })
        .collect()
}
