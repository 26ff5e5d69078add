//! Trail segments left behind the competitors
//!
//! Every accepted turn starts a new segment. Only the owner's newest segment
//! keeps growing; older ones are frozen obstacles until the round resets.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::Color;

/// Handle to a segment in a [`TrailList`]
///
/// Handles are plain indices and are invalidated when the list is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrailId(pub u32);

/// One straight stretch of trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    pub rect: Rect,
    pub color: Color,
}

impl TrailSegment {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    /// Extend the leading edge; the trailing edge stays where the heading began
    pub fn grow(&mut self, dx: f32, dy: f32) {
        self.rect.width += dx;
        self.rect.height += dy;
    }
}

/// Ordered collection of every trail segment in the current round
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailList {
    segments: Vec<TrailSegment>,
}

impl TrailList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment and return its handle
    pub fn push(&mut self, segment: TrailSegment) -> TrailId {
        let id = TrailId(self.segments.len() as u32);
        self.segments.push(segment);
        id
    }

    pub fn get(&self, id: TrailId) -> Option<&TrailSegment> {
        self.segments.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: TrailId) -> Option<&mut TrailSegment> {
        self.segments.get_mut(id.0 as usize)
    }

    /// Segments with their handles, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (TrailId, &TrailSegment)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| (TrailId(i as u32), s))
    }

    /// First segment (in insertion order) the given box collides with
    pub fn first_hit(&self, rect: &Rect) -> Option<TrailId> {
        self.iter()
            .find(|(_, segment)| rect.collides(&segment.rect))
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn as_slice(&self) -> &[TrailSegment] {
        &self.segments
    }
}
