//! Keyboard bindings
//!
//! Keys are identified by their DOM `KeyboardEvent.key` names. Matching is
//! exact, so `"W"` (shift held) is not the same key as `"w"`.

use crate::{InputState, Side};

/// Vertical direction a movement key pushes its paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the paddle speed (canvas Y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Key names bound to each paddle's movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".to_string(),
            left_down: "s".to_string(),
            right_up: "ArrowUp".to_string(),
            right_down: "ArrowDown".to_string(),
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up which paddle and direction a key controls
    pub fn resolve(&self, key: &str) -> Option<(Side, Direction)> {
        if key == self.left_up {
            Some((Side::Left, Direction::Up))
        } else if key == self.left_down {
            Some((Side::Left, Direction::Down))
        } else if key == self.right_up {
            Some((Side::Right, Direction::Up))
        } else if key == self.right_down {
            Some((Side::Right, Direction::Down))
        } else {
            None
        }
    }
}

impl InputState {
    /// Handle key down event. Returns `false` for keys that are not bound.
    pub fn key_down(&mut self, bindings: &KeyBindings, key: &str, paddle_speed: f32) -> bool {
        match bindings.resolve(key) {
            Some((side, dir)) => {
                self.set_speed(side, dir.sign() * paddle_speed);
                true
            }
            None => false,
        }
    }

    /// Handle key up event. Releasing either of a paddle's keys stops it.
    pub fn key_up(&mut self, bindings: &KeyBindings, key: &str) -> bool {
        match bindings.resolve(key) {
            Some((side, _)) => {
                self.set_speed(side, 0.0);
                true
            }
            None => false,
        }
    }
}
