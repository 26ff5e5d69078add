//! Game settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;
use crate::controls::KeyBindings;
use crate::sim::{ArenaConfig, Bounds};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Play-field width
    pub arena_width: f32,
    /// Play-field height, including the status bar
    pub arena_height: f32,
    /// Height reserved at the top for the score display
    pub status_bar_height: f32,
    /// Head edge as a fraction of the smaller arena dimension
    pub head_size_fraction: f32,

    // === Competitors ===
    pub color_a: Color,
    pub color_b: Color,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_rate: f32,

    // === Controls ===
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            status_bar_height: STATUS_BAR_HEIGHT,
            head_size_fraction: HEAD_SIZE_FRACTION,

            color_a: [0.2, 0.9, 0.3, 1.0],
            color_b: [0.2, 0.5, 1.0, 1.0],

            tick_rate: 1.0 / SIM_DT,

            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Bounds for the configured window; the status bar sits along the top edge
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.arena_width,
            self.arena_height,
            self.arena_height - self.status_bar_height,
        )
    }

    pub fn arena_config(&self) -> ArenaConfig {
        ArenaConfig {
            bounds: self.bounds(),
            head_size_fraction: self.head_size_fraction,
            color_a: self.color_a,
            color_b: self.color_b,
        }
    }

    /// Fixed timestep derived from the tick rate
    pub fn tick_dt(&self) -> f32 {
        if self.tick_rate > 0.0 {
            1.0 / self.tick_rate
        } else {
            SIM_DT
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Invalid settings: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string_pretty(self).ok()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Some(settings) = Self::from_json(&json) {
                log::info!("Loaded settings from {}", path.display());
                return settings;
            }
        } else {
            log::warn!("Could not read {}", path.display());
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as JSON; returns whether the file was written
    pub fn save(&self, path: &Path) -> bool {
        let Some(json) = self.to_json() else {
            return false;
        };
        match std::fs::write(path, json) {
            Ok(()) => {
                log::info!("Settings saved to {}", path.display());
                true
            }
            Err(e) => {
                log::warn!("Could not save settings to {}: {}", path.display(), e);
                false
            }
        }
    }
}
