//! Logical input actions
//!
//! The external input layer maps physical keys to [`Action`]s and updates
//! the held-state before each tick. The simulation only ever sees
//! [`InputState`].

use serde::{Deserialize, Serialize};

/// A logical game action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    PauseToggle,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::PauseToggle,
    ];

    /// Map a DOM `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Action::MoveLeft),
            "ArrowRight" => Some(Action::MoveRight),
            " " | "Spacebar" => Some(Action::Jump),
            "Escape" => Some(Action::PauseToggle),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Action::MoveLeft => 1 << 0,
            Action::MoveRight => 1 << 1,
            Action::Jump => 1 << 2,
            Action::PauseToggle => 1 << 3,
        }
    }
}

/// Held-state of every action for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    bits: u8,
}

impl InputState {
    pub fn is_held(&self, action: Action) -> bool {
        self.bits & action.bit() != 0
    }

    pub fn set(&mut self, action: Action, held: bool) {
        if held {
            self.bits |= action.bit();
        } else {
            self.bits &= !action.bit();
        }
    }

    /// Builder-style variant of [`InputState::set`]
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    /// Apply a key event; returns false for unmapped keys
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.set(action, pressed);
                true
            }
            None => false,
        }
    }

    /// Release everything (used when focus is lost)
    pub fn clear(&mut self) {
        self.bits = 0;
    }
}
