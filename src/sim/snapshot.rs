//! Render-facing view of the arena
//!
//! Plain data, detached from the simulation, so a renderer can hold it across
//! frames or ship it elsewhere as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Bounds};
use super::competitor::{Direction, Side};
use super::rect::Rect;
use crate::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorView {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub score: u32,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailView {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub bounds: Bounds,
    pub round: u32,
    pub time_ticks: u64,
    pub a: CompetitorView,
    pub b: CompetitorView,
    /// Every trail segment, in creation order
    pub trails: Vec<TrailView>,
}

impl ArenaSnapshot {
    pub fn capture(arena: &Arena) -> Self {
        let view = |side| {
            let c = arena.competitor(side);
            CompetitorView {
                pos: c.pos,
                size: c.size,
                color: c.color,
                score: c.score,
                direction: c.direction,
            }
        };
        Self {
            bounds: *arena.bounds(),
            round: arena.round(),
            time_ticks: arena.time_ticks(),
            a: view(Side::A),
            b: view(Side::B),
            trails: arena
                .trails()
                .as_slice()
                .iter()
                .map(|s| TrailView {
                    rect: s.rect,
                    color: s.color,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string_pretty(self).ok()
    }
}
