//! Keyboard bindings
//!
//! Hosts translate their native key events into key names (`"w"`, `"up"`, ...)
//! and look them up here. Nothing in this module touches an input device.

use serde::{Deserialize, Serialize};

use crate::sim::{Arena, Direction, Side};

/// One key mapped to a competitor's heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub side: Side,
    pub direction: Direction,
}

impl KeyBinding {
    pub fn new(key: &str, side: Side, direction: Direction) -> Self {
        Self {
            key: key.to_string(),
            side,
            direction,
        }
    }
}

/// Key name lookup table for both competitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub bindings: Vec<KeyBinding>,
}

impl Default for KeyBindings {
    /// `w`/`a`/`s`/`d` for competitor A, arrow keys for competitor B
    fn default() -> Self {
        use Direction::*;
        Self {
            bindings: vec![
                KeyBinding::new("w", Side::A, Up),
                KeyBinding::new("s", Side::A, Down),
                KeyBinding::new("a", Side::A, Left),
                KeyBinding::new("d", Side::A, Right),
                KeyBinding::new("up", Side::B, Up),
                KeyBinding::new("down", Side::B, Down),
                KeyBinding::new("left", Side::B, Left),
                KeyBinding::new("right", Side::B, Right),
            ],
        }
    }
}

impl KeyBindings {
    /// Resolve a key name (case-insensitive); unbound keys yield `None`
    pub fn lookup(&self, key: &str) -> Option<(Side, Direction)> {
        self.bindings
            .iter()
            .find(|b| b.key.eq_ignore_ascii_case(key))
            .map(|b| (b.side, b.direction))
    }

    /// Apply a key-down event to the arena
    ///
    /// Returns whether a competitor changed heading.
    pub fn handle_key(&self, arena: &mut Arena, key: &str) -> bool {
        match self.lookup(key) {
            Some((side, direction)) => arena.set_direction(side, direction),
            None => {
                log::trace!("Ignoring unbound key {:?}", key);
                false
            }
        }
    }
}
