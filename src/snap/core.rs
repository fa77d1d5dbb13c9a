use crate::geometry::{BoundsOffset, Footprint, Point, Rect, axis_aligned_rect, clamp_position, ranges_overlap};
use crate::model::{Fixture, FurnitureItem, Room};

use super::SnapConfig;

/// Which cascade stage moved an axis away from its clamped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapStage {
    Free,
    Wall,
    Edge,
    Grid,
}

impl SnapStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapStage::Free => "free",
            SnapStage::Wall => "wall",
            SnapStage::Edge => "edge",
            SnapStage::Grid => "grid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    pub position: Point,
    pub x: SnapStage,
    pub y: SnapStage,
}

/// Candidate targets gathered for a single axis.
#[derive(Debug, Default)]
struct AxisTargets {
    walls: [f64; 2],
    edges: Vec<f64>,
    grid: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SnapResolver {
    config: SnapConfig,
}

impl SnapResolver {
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Resolve the final position for `item` dropped at raw `(x, y)`.
    ///
    /// `furniture` may include the moving item; entries sharing its id are
    /// skipped as snap targets.
    pub fn resolve(
        &self,
        x: f64,
        y: f64,
        item: &FurnitureItem,
        furniture: &[FurnitureItem],
        fixtures: &[Fixture],
        room: &Room,
    ) -> SnapOutcome {
        let config = &self.config;
        let width = item.dimensions.width;
        let depth = item.dimensions.depth;
        let rotation = item.position.rotation;
        let BoundsOffset { offset_x, offset_y } = item.bounds_offset();

        let clamped = clamp_position(x, y, item, room);
        let moving = axis_aligned_rect(clamped.x, clamped.y, width, depth, rotation);

        let mut x_axis = AxisTargets {
            walls: [offset_x, room.width - width - offset_x],
            edges: Vec::new(),
            grid: (clamped.x / config.grid_size).round() * config.grid_size,
        };
        let mut y_axis = AxisTargets {
            walls: [offset_y, room.depth - depth - offset_y],
            edges: Vec::new(),
            grid: (clamped.y / config.grid_size).round() * config.grid_size,
        };

        let targets = furniture
            .iter()
            .filter(|other| other.id != item.id)
            .map(Footprint::footprint_rect)
            .chain(fixtures.iter().map(Footprint::footprint_rect));

        for target in targets {
            self.collect_edges(&moving, &target, width, depth, offset_x, offset_y, &mut x_axis, &mut y_axis);
        }

        let (snapped_x, x_stage) = self.cascade(clamped.x, &x_axis);
        let (snapped_y, y_stage) = self.cascade(clamped.y, &y_axis);

        let rounded_x = round_to_step(snapped_x, config.position_step);
        let rounded_y = round_to_step(snapped_y, config.position_step);

        SnapOutcome {
            position: clamp_position(rounded_x, rounded_y, item, room),
            x: x_stage,
            y: y_stage,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn collect_edges(
        &self,
        moving: &Rect,
        target: &Rect,
        width: f64,
        depth: f64,
        offset_x: f64,
        offset_y: f64,
        x_axis: &mut AxisTargets,
        y_axis: &mut AxisTargets,
    ) {
        let gap = self.config.edge_threshold;

        if ranges_overlap(moving.top, moving.bottom, target.top, target.bottom, gap) {
            x_axis.edges.extend([
                target.left + offset_x,
                target.right - width - offset_x,
                target.right + offset_x,
                target.left - width - offset_x,
            ]);
        }

        if ranges_overlap(moving.left, moving.right, target.left, target.right, gap) {
            y_axis.edges.extend([
                target.top + offset_y,
                target.bottom - depth - offset_y,
                target.bottom + offset_y,
                target.top - depth - offset_y,
            ]);
        }
    }

    fn cascade(&self, clamped: f64, axis: &AxisTargets) -> (f64, SnapStage) {
        let config = &self.config;

        let wall = find_closest_snap(clamped, &axis.walls, config.wall_threshold);
        if wall != clamped {
            return (wall, SnapStage::Wall);
        }

        let edge = find_closest_snap(clamped, &axis.edges, config.edge_threshold);
        if edge != clamped {
            return (edge, SnapStage::Edge);
        }

        let grid = find_closest_snap(clamped, &[axis.grid], config.grid_threshold);
        if grid != clamped {
            return (grid, SnapStage::Grid);
        }

        (clamped, SnapStage::Free)
    }
}

/// Nearest candidate within `threshold` of `current`, or `current` itself.
/// Ties keep the earliest candidate.
pub fn find_closest_snap(current: f64, candidates: &[f64], threshold: f64) -> f64 {
    let mut best = current;
    let mut best_distance = threshold + 1.0;

    for &candidate in candidates {
        let distance = (candidate - current).abs();
        if distance <= threshold && distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    best
}

fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Snap with the default thresholds.
pub fn compute_snapped_position(
    x: f64,
    y: f64,
    item: &FurnitureItem,
    furniture: &[FurnitureItem],
    fixtures: &[Fixture],
    room: &Room,
) -> Point {
    SnapResolver::default()
        .resolve(x, y, item, furniture, fixtures, room)
        .position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, FixtureKind, FurnitureKind, Position, WallSide};
    use proptest::prelude::*;

    fn room() -> Room {
        Room::new(100.0, 100.0, 96.0)
    }

    fn block(id: &str, width: f64, depth: f64, x: f64, y: f64) -> FurnitureItem {
        FurnitureItem::new(
            id,
            id,
            FurnitureKind::Desk,
            Dimensions::new(width, depth, 30.0),
            Position::new(x, y, 0.0),
        )
    }

    #[test]
    fn dragging_past_the_corner_clamps_to_origin() {
        let item = block("a", 10.0, 10.0, 5.0, 5.0);
        let snapped = compute_snapped_position(-5.0, -5.0, &item, &[], &[], &room());
        assert_eq!(snapped, Point::new(0.0, 0.0));
    }

    #[test]
    fn free_placement_falls_back_to_grid() {
        let item = block("a", 10.0, 10.0, 5.0, 5.0);
        let outcome = SnapResolver::default().resolve(11.0, 1.0, &item, &[], &[], &room());
        assert_eq!(outcome.position, Point::new(12.0, 0.0));
        assert_eq!(outcome.x, SnapStage::Grid);
        // one inch from the north wall is inside the wall threshold
        assert_eq!(outcome.y, SnapStage::Wall);
    }

    #[test]
    fn neighbor_edge_pulls_item_flush() {
        let fixed = block("fixed", 20.0, 20.0, 0.0, 40.0);
        let moving = block("moving", 20.0, 20.0, 50.0, 40.0);
        let outcome = SnapResolver::default().resolve(
            20.5,
            40.0,
            &moving,
            &[fixed, moving.clone()],
            &[],
            &room(),
        );
        assert_eq!(outcome.position.x, 20.0);
        assert_eq!(outcome.x, SnapStage::Edge);
    }

    #[test]
    fn wall_snap_suppresses_edge_snap_on_same_axis() {
        // neighbor right edge at 5 would be an edge candidate, but the wall at 0 is closer
        let neighbor = block("n", 5.0, 10.0, 0.0, 80.0);
        let moving = block("m", 10.0, 10.0, 50.0, 50.0);
        let outcome = SnapResolver::default().resolve(
            3.0,
            80.0,
            &moving,
            &[neighbor],
            &[],
            &room(),
        );
        assert_eq!(outcome.x, SnapStage::Wall);
        assert_eq!(outcome.position.x, 0.0);
    }

    #[test]
    fn axes_snap_independently() {
        let moving = block("m", 10.0, 10.0, 50.0, 50.0);
        let outcome = SnapResolver::default().resolve(2.0, 47.3, &moving, &[], &[], &room());
        assert_eq!(outcome.x, SnapStage::Wall);
        assert_eq!(outcome.y, SnapStage::Grid);
        assert_eq!(outcome.position, Point::new(0.0, 48.0));
    }

    #[test]
    fn unaligned_positions_round_to_whole_inches() {
        let moving = block("m", 10.0, 10.0, 50.0, 50.0);
        let outcome = SnapResolver::default().resolve(41.4, 53.6, &moving, &[], &[], &room());
        assert_eq!(outcome.x, SnapStage::Free);
        assert_eq!(outcome.y, SnapStage::Free);
        assert_eq!(outcome.position, Point::new(41.0, 54.0));
    }

    #[test]
    fn fixtures_are_snap_targets() {
        let door = Fixture::new(
            "door",
            "Door",
            FixtureKind::Door,
            Dimensions::new(29.0, 1.5, 80.0),
            Position::new(30.0, 0.0, 0.0),
            WallSide::North,
        );
        let moving = block("m", 10.0, 10.0, 70.0, 50.0);
        let outcome = SnapResolver::default().resolve(61.0, 0.0, &moving, &[], &[door], &room());
        assert_eq!(outcome.x, SnapStage::Edge);
        assert_eq!(outcome.position.x, 59.0);
    }

    #[test]
    fn the_moving_item_never_snaps_to_itself() {
        let moving = block("m", 10.0, 10.0, 41.0, 50.0);
        let outcome = SnapResolver::default().resolve(
            42.4,
            54.4,
            &moving,
            &[moving.clone()],
            &[],
            &room(),
        );
        assert_eq!(outcome.x, SnapStage::Free);
        assert_eq!(outcome.position.x, 42.0);
    }

    #[test]
    fn rotated_items_snap_to_their_rotated_wall_line() {
        let mut moving = block("m", 30.0, 70.0, 50.0, 20.0);
        moving.position.rotation = 90.0;
        // rotated bounds start 20" left of the anchor
        let outcome = SnapResolver::default().resolve(23.0, 20.0, &moving, &[], &[], &room());
        assert_eq!(outcome.x, SnapStage::Wall);
        assert_eq!(outcome.position.x, 20.0);
    }

    #[test]
    fn closest_snap_prefers_first_on_ties() {
        assert_eq!(find_closest_snap(10.0, &[8.0, 12.0], 3.0), 8.0);
        assert_eq!(find_closest_snap(10.0, &[14.0], 3.0), 10.0);
        assert_eq!(find_closest_snap(10.0, &[], 3.0), 10.0);
    }

    #[test]
    fn custom_grid_changes_grid_lines() {
        let config = SnapConfig {
            grid_size: 8.0,
            ..SnapConfig::default()
        };
        let moving = block("m", 10.0, 10.0, 50.0, 50.0);
        let outcome = SnapResolver::new(config).resolve(39.0, 49.0, &moving, &[], &[], &room());
        assert_eq!(outcome.position, Point::new(40.0, 48.0));
    }

    proptest! {
        #[test]
        fn snapping_is_deterministic(
            x in -50.0f64..150.0,
            y in -50.0f64..150.0,
            nx in 0.0f64..80.0,
            ny in 0.0f64..80.0,
        ) {
            let moving = block("m", 12.0, 18.0, 0.0, 0.0);
            let others = vec![block("n", 20.0, 20.0, nx, ny)];
            let resolver = SnapResolver::default();
            let first = resolver.resolve(x, y, &moving, &others, &[], &room());
            let second = resolver.resolve(x, y, &moving, &others, &[], &room());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn snapped_items_stay_inside_room(
            x in -200.0f64..300.0,
            y in -200.0f64..300.0,
            rotation in -360.0f64..360.0,
            nx in 0.0f64..80.0,
            ny in 0.0f64..80.0,
        ) {
            let mut moving = block("m", 24.0, 16.0, 0.0, 0.0);
            moving.position.rotation = rotation;
            let others = vec![block("n", 20.0, 20.0, nx, ny)];
            let snapped = compute_snapped_position(x, y, &moving, &others, &[], &room());
            let rect = axis_aligned_rect(snapped.x, snapped.y, 24.0, 16.0, rotation);
            prop_assert!(rect.within_room(&room(), 1e-6));
        }
    }
}
