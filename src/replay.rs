//! Scripted key-press replays
//!
//! A replay is a list of key presses stamped with the tick they occur on. The
//! simulation is deterministic, so the same script against the same settings
//! always produces the same rounds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controls::KeyBindings;
use crate::sim::{Arena, RoundOutcome};

/// A key pressed just before the given tick runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub tick: u64,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Total ticks to simulate
    pub ticks: u64,
    /// Presses in any order; ties keep their listed order
    #[serde(default)]
    pub presses: Vec<KeyPress>,
}

/// A round that ended during a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayEvent {
    /// Zero-based tick on which the round ended
    pub tick: u64,
    pub outcome: RoundOutcome,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(script) => Some(script),
            Err(e) => {
                log::warn!("Invalid replay script: {}", e);
                None
            }
        }
    }

    pub fn load(path: &Path) -> Option<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Drive the arena through the script, returning every round that ended
    pub fn run(&self, arena: &mut Arena, keys: &KeyBindings, dt: f32) -> Vec<ReplayEvent> {
        let mut presses: Vec<&KeyPress> = self.presses.iter().collect();
        presses.sort_by_key(|p| p.tick);
        let mut pending = presses.into_iter().peekable();

        let mut events = Vec::new();
        for tick in 0..self.ticks {
            while let Some(press) = pending.next_if(|p| p.tick <= tick) {
                keys.handle_key(arena, &press.key);
            }
            if let Some(outcome) = arena.update(dt) {
                events.push(ReplayEvent { tick, outcome });
            }
        }
        events
    }
}
