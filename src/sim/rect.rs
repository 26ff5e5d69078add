//! Axis-aligned rectangles with signed size
//!
//! A rectangle is anchored at its reference corner `(x, y)` and extends by
//! `width`/`height`. Negative sizes extend left/down from the corner instead of
//! right/up. Trails grow in the direction of travel, so a trail heading left or
//! down carries a negative size for its whole life and collision must honor it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::COLLISION_MARGIN;

/// A positioned, signed-size 2D box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// `x + width`; less than `x` when width is negative
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// `y + height`; less than `y` when height is negative
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Horizontal extent as `(low, high)` regardless of the width's sign
    #[inline]
    pub fn x_span(&self) -> (f32, f32) {
        forward_span(self.x, self.width)
    }

    /// Vertical extent as `(low, high)` regardless of the height's sign
    #[inline]
    pub fn y_span(&self) -> (f32, f32) {
        forward_span(self.y, self.height)
    }

    /// Same region described with non-negative width and height
    pub fn normalized(&self) -> Self {
        let (x0, x1) = self.x_span();
        let (y0, y1) = self.y_span();
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// AABB overlap with a tolerance margin
    ///
    /// On each axis, each box must reach at least [`COLLISION_MARGIN`] past the
    /// other's near edge. Boxes sharing an edge never collide; a head drawn
    /// right next to a wall or trail is still clear of it.
    pub fn collides(&self, other: &Rect) -> bool {
        spans_overlap(self.x_span(), other.x_span()) && spans_overlap(self.y_span(), other.y_span())
    }
}

#[inline]
fn forward_span(origin: f32, size: f32) -> (f32, f32) {
    if size >= 0.0 {
        (origin, origin + size)
    } else {
        (origin + size, origin)
    }
}

#[inline]
fn spans_overlap((a_lo, a_hi): (f32, f32), (b_lo, b_hi): (f32, f32)) -> bool {
    a_hi >= b_lo + COLLISION_MARGIN && a_lo <= b_hi - COLLISION_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.collides(&b));
        assert!(b.collides(&a));
    }

    #[test]
    fn test_edge_adjacent_boxes_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x = 10 line
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.collides(&b));
        // Shares the y = 10 line
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.collides(&c));
    }

    #[test]
    fn test_sub_margin_overlap_is_ignored() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.5, 0.0, 10.0, 10.0);
        assert!(!a.collides(&b));

        let c = Rect::new(8.5, 0.0, 10.0, 10.0);
        assert!(a.collides(&c));
    }

    #[test]
    fn test_negative_width_other() {
        // Occupies x in [0, 10]
        let trail = Rect::new(10.0, 0.0, -10.0, 5.0);
        let inside = Rect::new(4.0, 1.0, 2.0, 2.0);
        let left_of = Rect::new(-3.0, 1.0, 3.0, 2.0);
        let right_of = Rect::new(10.0, 1.0, 3.0, 2.0);
        assert!(trail.collides(&inside));
        assert!(inside.collides(&trail));
        assert!(!left_of.collides(&trail));
        assert!(!right_of.collides(&trail));
    }

    #[test]
    fn test_negative_height_other() {
        // Occupies y in [0, 10]
        let trail = Rect::new(0.0, 10.0, 5.0, -10.0);
        let inside = Rect::new(1.0, 4.0, 2.0, 2.0);
        let above = Rect::new(1.0, 10.0, 2.0, 3.0);
        let below = Rect::new(1.0, -3.0, 2.0, 3.0);
        assert!(inside.collides(&trail));
        assert!(!above.collides(&trail));
        assert!(!below.collides(&trail));
    }

    #[test]
    fn test_both_operands_negative() {
        // x in [0, 10], y in [0, 10]
        let a = Rect::new(10.0, 10.0, -10.0, -10.0);
        // x in [5, 15], y in [5, 15]
        let b = Rect::new(15.0, 15.0, -10.0, -10.0);
        // x in [10, 20], y in [0, 10]: touches a on x = 10
        let c = Rect::new(20.0, 10.0, -10.0, -10.0);
        assert!(a.collides(&b));
        assert!(!a.collides(&c));
    }

    #[test]
    fn test_zero_length_trail_behind_head() {
        // Head moving right with a freshly created trail at its left edge
        let head = Rect::new(100.0, 100.0, 5.0, 5.0);
        let trail = Rect::new(100.0, 100.0, 0.0, 5.0);
        assert!(!head.collides(&trail));

        // Head moving left: trail starts at its right edge, grows negative
        let trail = Rect::new(105.0, 100.0, 0.0, 5.0);
        assert!(!head.collides(&trail));
    }

    #[test]
    fn test_normalized_keeps_region() {
        let r = Rect::new(10.0, 20.0, -4.0, -6.0);
        let n = r.normalized();
        assert_eq!(n, Rect::new(6.0, 14.0, 4.0, 6.0));
        assert_eq!(r.x_span(), n.x_span());
        assert_eq!(r.y_span(), n.y_span());
    }

    fn coord() -> impl Strategy<Value = f32> {
        (-200i32..200).prop_map(|v| v as f32 * 0.5)
    }

    fn extent() -> impl Strategy<Value = f32> {
        (-60i32..60).prop_map(|v| v as f32 * 0.5)
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (coord(), coord(), extent(), extent()).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    /// Describe the same region from the opposite corner on each flipped axis
    fn flip(r: Rect, flip_x: bool, flip_y: bool) -> Rect {
        let (x, width) = if flip_x {
            (r.x + r.width, -r.width)
        } else {
            (r.x, r.width)
        };
        let (y, height) = if flip_y {
            (r.y + r.height, -r.height)
        } else {
            (r.y, r.height)
        };
        Rect::new(x, y, width, height)
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(a.collides(&b), b.collides(&a));
        }

        #[test]
        fn prop_sign_of_size_does_not_change_region(
            a in rect(),
            b in rect(),
            fx in any::<bool>(),
            fy in any::<bool>()
        ) {
            let flipped = flip(a, fx, fy);
            prop_assert_eq!(a.collides(&b), flipped.collides(&b));
            prop_assert_eq!(a.normalized().collides(&b), a.collides(&b));
        }

        #[test]
        fn prop_edge_adjacent_never_collides(a in rect(), h in 1i32..40, w in 1i32..40) {
            let a = a.normalized();
            let neighbour = Rect::new(a.right(), a.y, w as f32, h as f32);
            prop_assert!(!a.collides(&neighbour));
        }

        #[test]
        fn prop_deep_overlap_collides(x in coord(), y in coord(), w in 4i32..40, h in 4i32..40) {
            let a = Rect::new(x, y, w as f32, h as f32);
            // Shifted so the overlap exceeds the margin on both axes
            let b = Rect::new(x + 1.5, y + 1.5, w as f32, h as f32);
            prop_assert!(a.collides(&b));
        }
    }
}
