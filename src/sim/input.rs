//! Hand-off of directional intents from an input thread to the tick loop
//!
//! A host that reads the keyboard on the same thread as the tick loop can call
//! [`Arena::set_direction`] directly. When input arrives on another thread, each
//! competitor gets a [`DirectionLatch`]: the input side overwrites it, the tick
//! side drains it once per tick. Only the latest intent survives.

use std::sync::atomic::{AtomicU8, Ordering};

use super::arena::Arena;
use super::competitor::{Direction, Side};

const EMPTY: u8 = 0;

fn encode(direction: Direction) -> u8 {
    match direction {
        Direction::Idle => EMPTY,
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Left => 3,
        Direction::Right => 4,
    }
}

fn decode(raw: u8) -> Option<Direction> {
    match raw {
        1 => Some(Direction::Up),
        2 => Some(Direction::Down),
        3 => Some(Direction::Left),
        4 => Some(Direction::Right),
        _ => None,
    }
}

/// Last-write-wins slot for one pending direction
#[derive(Debug, Default)]
pub struct DirectionLatch {
    pending: AtomicU8,
}

impl DirectionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intent, replacing any not yet applied
    ///
    /// Idle is never a valid intent and clears the slot.
    pub fn store(&self, direction: Direction) {
        self.pending.store(encode(direction), Ordering::Release);
    }

    /// Take the pending intent, leaving the slot empty
    pub fn take(&self) -> Option<Direction> {
        decode(self.pending.swap(EMPTY, Ordering::AcqRel))
    }
}

/// One latch per competitor, shareable with the input thread behind an `Arc`
#[derive(Debug, Default)]
pub struct InputLatches {
    pub a: DirectionLatch,
    pub b: DirectionLatch,
}

impl InputLatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&self, side: Side) -> &DirectionLatch {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Apply pending intents to the arena; call once before each tick
    pub fn apply(&self, arena: &mut Arena) {
        for side in [Side::A, Side::B] {
            if let Some(direction) = self.latch(side).take() {
                arena.set_direction(side, direction);
            }
        }
    }
}
