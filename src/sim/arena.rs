//! The play field: both competitors, every trail segment, and the round loop

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::competitor::{Collision, Competitor, Direction, Side};
use super::snapshot::ArenaSnapshot;
use super::trail::TrailList;
use crate::Color;

/// Live play-field extent
///
/// Re-read on every tick, so a host resize takes effect mid-round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    /// Lower edge of the status bar; heads reaching it have left the arena
    pub status_bar_y: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, status_bar_y: f32) -> Self {
        Self {
            width,
            height,
            status_bar_y,
        }
    }

    /// Round-start head centers: a third and two thirds across, vertically centered
    pub fn spawn_centers(&self) -> (Vec2, Vec2) {
        let y = self.height / 2.0;
        (
            Vec2::new(self.width / 3.0, y),
            Vec2::new(self.width * 2.0 / 3.0, y),
        )
    }
}

/// Construction-time arena parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub bounds: Bounds,
    /// Head edge length as a fraction of the smaller arena dimension
    pub head_size_fraction: f32,
    pub color_a: Color,
    pub color_b: Color,
}

impl ArenaConfig {
    /// Head size is fixed from the bounds given at construction
    pub fn head_size(&self) -> Vec2 {
        let side = self.bounds.width.min(self.bounds.height) * self.head_size_fraction;
        Vec2::splat(side.max(f32::EPSILON))
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Competitor whose move ended the round
    pub loser: Side,
    pub cause: Collision,
}

impl RoundOutcome {
    pub fn winner(&self) -> Side {
        self.loser.other()
    }
}

/// Owns both competitors and the trail list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    bounds: Bounds,
    a: Competitor,
    b: Competitor,
    trails: TrailList,
    /// Completed rounds this session
    round: u32,
    /// Ticks simulated this session
    time_ticks: u64,
    /// Host-reported time, in seconds, summed over ticks
    elapsed: f64,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        let size = config.head_size();
        let mut arena = Self {
            bounds: config.bounds,
            a: Competitor::new(size, config.color_a),
            b: Competitor::new(size, config.color_b),
            trails: TrailList::new(),
            round: 0,
            time_ticks: 0,
            elapsed: 0.0,
        };
        arena.place_competitors();
        arena
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Replace the play-field extent (host window resize)
    ///
    /// Head sizes keep the value computed at construction.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            log::debug!(
                "Arena resized: {}x{} -> {}x{} (status bar at {})",
                self.bounds.width,
                self.bounds.height,
                bounds.width,
                bounds.height,
                bounds.status_bar_y
            );
            self.bounds = bounds;
        }
    }

    pub fn competitor(&self, side: Side) -> &Competitor {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn trails(&self) -> &TrailList {
        &self.trails
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.a.score, self.b.score)
    }

    /// Apply a directional intent; effective from the next tick
    ///
    /// Returns whether the heading changed.
    pub fn set_direction(&mut self, side: Side, direction: Direction) -> bool {
        let competitor = match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        };
        let changed = competitor.set_direction(direction, &mut self.trails);
        if changed {
            log::debug!(
                "Competitor {:?} turned {:?} ({} trail segments)",
                side,
                direction,
                self.trails.len()
            );
        }
        changed
    }

    /// Raw `(dx, dy)` form of [`Arena::set_direction`]; non-unit values are ignored
    pub fn set_direction_xy(&mut self, side: Side, dx: f32, dy: f32) -> bool {
        Direction::from_xy(dx, dy).is_some_and(|dir| self.set_direction(side, dir))
    }

    /// Advance the simulation by one fixed tick
    ///
    /// Competitor A always moves first. If A's move ends the round, B gets the
    /// point and does not move this tick.
    pub fn update(&mut self, dt: f32) -> Option<RoundOutcome> {
        self.time_ticks += 1;
        self.elapsed += f64::from(dt);

        let outcome = self
            .advance(Side::A)
            .or_else(|| self.advance(Side::B))?;

        let winner = match outcome.winner() {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        };
        winner.score += 1;

        log::info!(
            "Round {} over: {:?} hit {:?}, score {}-{}",
            self.round + 1,
            outcome.loser,
            outcome.cause,
            self.a.score,
            self.b.score
        );
        self.round += 1;
        self.reset();
        Some(outcome)
    }

    fn advance(&mut self, side: Side) -> Option<RoundOutcome> {
        let (mover, other) = match side {
            Side::A => (&mut self.a, &self.b),
            Side::B => (&mut self.b, &self.a),
        };
        let cause = mover.advance(other, &self.bounds, &mut self.trails)?;
        log::trace!("{:?} collided at {:?}: {:?}", side, mover.pos, cause);
        Some(RoundOutcome { loser: side, cause })
    }

    /// Start a fresh round: re-center both heads, stop them, drop every trail
    ///
    /// Scores are kept for the whole session.
    pub fn reset(&mut self) {
        self.place_competitors();
        self.trails.clear();
    }

    fn place_competitors(&mut self) {
        let (center_a, center_b) = self.bounds.spawn_centers();
        self.a.respawn(center_a);
        self.b.respawn(center_b);
    }

    /// Read-only view of everything a renderer needs
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot::capture(self)
    }
}
