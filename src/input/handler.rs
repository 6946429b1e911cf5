use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Vec2;

/// A directional steering event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Translate a steering press into a new head velocity.
    ///
    /// Anti-reversal policy: input along the axis already in motion keeps
    /// the current component (pressing Down while moving Up keeps moving
    /// Up), while the other axis is always zeroed. This is the only guard
    /// against an instant 180-degree turn into the neck segment.
    pub fn steer(self, current: Vec2) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, if current.y != 0 { current.y } else { -1 }),
            Direction::Down => Vec2::new(0, if current.y != 0 { current.y } else { 1 }),
            Direction::Left => Vec2::new(if current.x != 0 { current.x } else { -1 }, 0),
            Direction::Right => Vec2::new(if current.x != 0 { current.x } else { 1 }, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
