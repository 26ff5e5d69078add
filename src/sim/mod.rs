//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable update order (competitor A, then B)
//! - No rendering or platform dependencies

pub mod arena;
pub mod clock;
pub mod competitor;
pub mod input;
pub mod rect;
pub mod snapshot;
pub mod trail;

pub use arena::{Arena, ArenaConfig, Bounds, RoundOutcome};
pub use clock::FixedStep;
pub use competitor::{Collision, Competitor, Direction, Side, speed_scale};
pub use input::{DirectionLatch, InputLatches};
pub use rect::Rect;
pub use snapshot::{ArenaSnapshot, CompetitorView, TrailView};
pub use trail::{TrailId, TrailList, TrailSegment};
