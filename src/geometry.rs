//! Footprint geometry for rotated rectangular items measured in inches.
//!
//! Items are anchored at their *unrotated* top-left corner and rotate about
//! their own center, so the axis-aligned rectangle they occupy grows by an
//! inset on each side. Every function here is total over finite input.

use crate::model::{Dimensions, Position, Room};

/// Point in room space (inches from the west and north walls).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in room space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn depth(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Whether the rectangle lies inside `[0, width] x [0, depth]`, allowing
    /// `tolerance` of floating point slack on every wall.
    pub fn within_room(&self, room: &Room, tolerance: f64) -> bool {
        self.left >= -tolerance
            && self.top >= -tolerance
            && self.right <= room.width + tolerance
            && self.bottom <= room.depth + tolerance
    }
}

/// Per-axis inset between the unrotated box and its rotated bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundsOffset {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Anything occupying floor space: furniture and fixtures alike.
pub trait Footprint {
    fn dimensions(&self) -> &Dimensions;
    fn position(&self) -> &Position;

    fn footprint_rect(&self) -> Rect {
        let dims = self.dimensions();
        let pos = self.position();
        axis_aligned_rect(pos.x, pos.y, dims.width, dims.depth, pos.rotation)
    }

    fn bounds_offset(&self) -> BoundsOffset {
        let dims = self.dimensions();
        rotated_bounds_offset(dims.width, dims.depth, self.position().rotation)
    }
}

/// Map any rotation in degrees into `[0, 360)`.
pub fn normalize_rotation(rotation: f64) -> f64 {
    let normalized = rotation.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

pub fn rotated_bounds_offset(width: f64, depth: f64, rotation: f64) -> BoundsOffset {
    let radians = normalize_rotation(rotation).to_radians();
    let cos = radians.cos().abs();
    let sin = radians.sin().abs();
    let bounds_width = width * cos + depth * sin;
    let bounds_depth = width * sin + depth * cos;

    BoundsOffset {
        offset_x: (bounds_width - width) / 2.0,
        offset_y: (bounds_depth - depth) / 2.0,
    }
}

pub fn axis_aligned_rect(x: f64, y: f64, width: f64, depth: f64, rotation: f64) -> Rect {
    let BoundsOffset { offset_x, offset_y } = rotated_bounds_offset(width, depth, rotation);

    Rect {
        left: x - offset_x,
        right: x + width + offset_x,
        top: y - offset_y,
        bottom: y + depth + offset_y,
    }
}

/// Whether two 1D intervals intersect once each is inflated by `gap`.
pub fn ranges_overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64, gap: f64) -> bool {
    a_start <= b_end + gap && a_end >= b_start - gap
}

/// Clamp into `[min, max]`, swapping the bounds first when they are inverted.
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    let lower = min.min(max);
    let upper = min.max(max);
    value.max(lower).min(upper)
}

/// Constrain an unrotated anchor so the item's rotated bounds stay in the room.
pub fn clamp_position(x: f64, y: f64, item: &impl Footprint, room: &Room) -> Point {
    let dims = item.dimensions();
    let BoundsOffset { offset_x, offset_y } = item.bounds_offset();

    Point {
        x: clamp_value(x, offset_x, room.width - dims.width - offset_x),
        y: clamp_value(y, offset_y, room.depth - dims.depth - offset_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FurnitureItem, FurnitureKind};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn room() -> Room {
        Room::new(100.0, 100.0, 96.0)
    }

    fn item(width: f64, depth: f64, rotation: f64) -> FurnitureItem {
        FurnitureItem::new(
            "box",
            "Box",
            FurnitureKind::Table,
            Dimensions::new(width, depth, 10.0),
            Position::new(0.0, 0.0, rotation),
        )
    }

    #[test]
    fn normalize_rotation_wraps_negative_and_large_values() {
        assert_eq!(normalize_rotation(-40.0), 320.0);
        assert_eq!(normalize_rotation(720.0), 0.0);
        assert_eq!(normalize_rotation(450.0), 90.0);
    }

    #[test]
    fn unrotated_item_has_no_offset() {
        let offset = rotated_bounds_offset(30.0, 72.0, 0.0);
        assert_eq!(offset, BoundsOffset::default());
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let offset = rotated_bounds_offset(30.0, 70.0, 90.0);
        assert!((offset.offset_x - 20.0).abs() < EPSILON);
        assert!((offset.offset_y + 20.0).abs() < EPSILON);

        let rect = axis_aligned_rect(50.0, 50.0, 30.0, 70.0, 90.0);
        assert!((rect.width() - 70.0).abs() < EPSILON);
        assert!((rect.depth() - 30.0).abs() < EPSILON);
    }

    #[test]
    fn ranges_overlap_honours_gap() {
        assert!(ranges_overlap(0.0, 10.0, 10.0, 20.0, 0.0));
        assert!(!ranges_overlap(0.0, 10.0, 12.0, 20.0, 0.0));
        assert!(ranges_overlap(0.0, 10.0, 12.0, 20.0, 3.0));
    }

    #[test]
    fn clamp_value_normalizes_inverted_bounds() {
        assert_eq!(clamp_value(5.0, 10.0, 0.0), 5.0);
        assert_eq!(clamp_value(-5.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp_value(50.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn clamp_pulls_item_back_inside_room() {
        let item = item(10.0, 10.0, 0.0);
        assert_eq!(clamp_position(-5.0, -5.0, &item, &room()), Point::new(0.0, 0.0));
        assert_eq!(clamp_position(95.0, 200.0, &item, &room()), Point::new(90.0, 90.0));
    }

    #[test]
    fn oversized_item_clamps_deterministically() {
        let item = item(120.0, 10.0, 0.0);
        // valid x range is inverted: [0, -20]
        let first = clamp_position(30.0, 0.0, &item, &room());
        let second = clamp_position(-50.0, 0.0, &item, &room());
        assert_eq!(first.x, 0.0);
        assert_eq!(second.x, -20.0);
    }

    #[test]
    fn footprint_rect_matches_free_function() {
        let mut chair = item(28.0, 32.0, -40.0);
        chair.position.x = 8.0;
        chair.position.y = 158.0;
        assert_eq!(
            chair.footprint_rect(),
            axis_aligned_rect(8.0, 158.0, 28.0, 32.0, -40.0)
        );
    }

    #[test]
    fn rect_contains_point_on_edges() {
        let rect = axis_aligned_rect(0.0, 0.0, 10.0, 10.0, 0.0);
        assert!(rect.contains_point(Point::new(10.0, 0.0)));
        assert!(!rect.contains_point(Point::new(10.5, 0.0)));
    }

    proptest! {
        #[test]
        fn clamp_is_idempotent(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            width in 1.0f64..150.0,
            depth in 1.0f64..150.0,
            rotation in -720.0f64..720.0,
        ) {
            let item = item(width, depth, rotation);
            let once = clamp_position(x, y, &item, &room());
            let twice = clamp_position(once.x, once.y, &item, &room());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn rotation_offsets_are_symmetric(
            width in 1.0f64..200.0,
            depth in 1.0f64..200.0,
            rotation in -360.0f64..360.0,
        ) {
            let base = rotated_bounds_offset(width, depth, rotation);
            let flipped = rotated_bounds_offset(width, depth, rotation + 180.0);
            let mirrored = rotated_bounds_offset(width, depth, -rotation);
            prop_assert!((base.offset_x - flipped.offset_x).abs() < 1e-6);
            prop_assert!((base.offset_y - flipped.offset_y).abs() < 1e-6);
            prop_assert!((base.offset_x - mirrored.offset_x).abs() < 1e-6);
            prop_assert!((base.offset_y - mirrored.offset_y).abs() < 1e-6);
        }

        #[test]
        fn clamped_items_fit_the_room(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            width in 1.0f64..60.0,
            depth in 1.0f64..60.0,
            rotation in -360.0f64..360.0,
        ) {
            let item = item(width, depth, rotation);
            let clamped = clamp_position(x, y, &item, &room());
            let rect = axis_aligned_rect(clamped.x, clamped.y, width, depth, rotation);
            prop_assert!(rect.within_room(&room(), 1e-6));
        }
    }
}
