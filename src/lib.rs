//! Simply Snakes - a two-player continuous-space snakes game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, rounds)
//! - `controls`: Key name to competitor/direction bindings
//! - `settings`: Data-driven arena and session configuration
//! - `replay`: Deterministic scripted key-press runs

pub mod controls;
pub mod replay;
pub mod settings;
pub mod sim;

pub use controls::KeyBindings;
pub use settings::Settings;

/// RGBA display color, passed through to renderers untouched
pub type Color = [f32; 4];

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the accumulator (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Arena dimension at which a head moves one unit per tick
    pub const SPEED_REFERENCE: f32 = 250.0;
    /// Floor for the speed scale when the arena has no area
    pub const SPEED_SCALE_EPSILON: f32 = 1e-4;
    /// Overlap required on each axis before two boxes count as colliding
    pub const COLLISION_MARGIN: f32 = 1.0;

    /// Default play-field size
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Height reserved for the score bar at the top
    pub const STATUS_BAR_HEIGHT: f32 = 40.0;
    /// Head edge as a fraction of the smaller arena dimension
    pub const HEAD_SIZE_FRACTION: f32 = 0.02;
}
