//! Competitors: the two player-controlled snake heads

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Bounds;
use super::rect::Rect;
use super::trail::{TrailId, TrailList, TrailSegment};
use crate::Color;
use crate::consts::*;

/// Which of the two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Heading of a competitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Not moving; only at construction and after a reset
    #[default]
    Idle,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this heading
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Idle => Vec2::ZERO,
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Idle => Direction::Idle,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Map a raw `(dx, dy)` intent onto a heading
    ///
    /// Only the five unit values are meaningful; anything else yields `None`.
    pub fn from_xy(dx: f32, dy: f32) -> Option<Direction> {
        match (dx, dy) {
            (0.0, 0.0) => Some(Direction::Idle),
            (0.0, 1.0) => Some(Direction::Up),
            (0.0, -1.0) => Some(Direction::Down),
            (-1.0, 0.0) => Some(Direction::Left),
            (1.0, 0.0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// What ended a competitor's move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Left, right or bottom arena edge
    Wall,
    /// Reserved status bar area at the top of the arena
    StatusBar,
    /// Ran into the other competitor's head
    HeadOn,
    /// Ran into a trail segment (either competitor's)
    Trail(TrailId),
}

/// Resolution-independent movement per tick
///
/// One unit per tick at a [`SPEED_REFERENCE`]-sized arena. Degenerate bounds
/// clamp to [`SPEED_SCALE_EPSILON`] instead of producing zero or NaN.
pub fn speed_scale(bounds: &Bounds) -> f32 {
    // f32::max also discards NaN
    (bounds.width.min(bounds.height) / SPEED_REFERENCE).max(SPEED_SCALE_EPSILON)
}

/// A snake head
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    /// Bottom-left corner of the head
    pub pos: Vec2,
    /// Head size, always positive
    pub size: Vec2,
    pub direction: Direction,
    pub score: u32,
    pub color: Color,
    /// Segment currently growing behind the head
    pub trail: Option<TrailId>,
}

impl Competitor {
    pub fn new(size: Vec2, color: Color) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
            direction: Direction::Idle,
            score: 0,
            color,
            trail: None,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Place the head so that its center sits at `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Put the competitor back into its round-start state
    ///
    /// The score is kept; it spans the whole session.
    pub fn respawn(&mut self, center: Vec2) {
        self.set_center(center);
        self.direction = Direction::Idle;
        self.trail = None;
    }

    /// Turn to a new heading
    ///
    /// Idle, the current heading and its exact opposite are rejected as no-ops.
    /// An accepted turn freezes the live trail segment and appends a new one of
    /// zero length at the head's trailing edge, so it grows from nothing as the
    /// head moves away. Returns whether the heading changed.
    pub fn set_direction(&mut self, direction: Direction, trails: &mut TrailList) -> bool {
        if direction == self.direction || direction == self.direction.opposite() {
            return false;
        }

        let mut rect = self.rect();
        match direction {
            Direction::Idle => return false,
            Direction::Right => rect.width = 0.0,
            Direction::Left => {
                rect.x = rect.right();
                rect.width = 0.0;
            }
            Direction::Up => rect.height = 0.0,
            Direction::Down => {
                rect.y = rect.top();
                rect.height = 0.0;
            }
        }
        self.direction = direction;
        self.trail = Some(trails.push(TrailSegment::new(rect, self.color)));
        true
    }

    /// Move one tick and report what the head ran into, if anything
    ///
    /// Checks run in a fixed order: arena edges, the other head, then every
    /// trail segment. A head-on hit also earns this competitor a point. Nothing
    /// is rolled back on collision; the caller resets the round.
    pub fn advance(
        &mut self,
        other: &Competitor,
        bounds: &Bounds,
        trails: &mut TrailList,
    ) -> Option<Collision> {
        let scale = speed_scale(bounds);
        let step = self.direction.vector() * scale;

        self.pos += step;
        if let Some(segment) = self.trail.and_then(|id| trails.get_mut(id)) {
            segment.grow(step.x, step.y);
        }

        let head = self.rect();
        if head.right() >= bounds.width || head.x <= 0.0 || head.y <= 0.0 {
            return Some(Collision::Wall);
        }
        if head.top() >= bounds.status_bar_y {
            return Some(Collision::StatusBar);
        }
        if head.collides(&other.rect()) {
            self.score += 1;
            return Some(Collision::HeadOn);
        }
        trails.first_hit(&head).map(Collision::Trail)
    }
}
