//! The studio room the editor ships with: a 148" x 199" room with two doors
//! on the north wall, an entrance on the west wall, and the furniture
//! catalog used as default templates.

use super::{
    Dimensions, Fixture, FixtureKind, FurnitureItem, FurnitureKind, Position, Room, RoomStructure,
    SwingDirection, WallSide,
};

pub fn studio_room() -> Room {
    Room::new(148.0, 199.0, 96.0)
}

pub fn studio_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::new(
            "door-left",
            "Door (N-Left)",
            FixtureKind::Door,
            Dimensions::new(29.0, 1.5, 80.0),
            Position::new(6.0, 0.0, 0.0),
            WallSide::North,
        )
        .with_color("#8B5A2B")
        .with_swing(SwingDirection::LeftToRight),
        Fixture::new(
            "door-right",
            "Door (N-Right)",
            FixtureKind::Door,
            Dimensions::new(29.0, 1.5, 80.0),
            Position::new(103.0, 0.0, 0.0),
            WallSide::North,
        )
        .with_color("#8B5A2B")
        .with_swing(SwingDirection::LeftToRight),
        Fixture::new(
            "entrance",
            "Entrance",
            FixtureKind::Door,
            Dimensions::new(1.5, 36.0, 80.0),
            Position::new(0.0, 1.0, 0.0),
            WallSide::West,
        )
        .with_color("#6D4C41")
        .with_swing(SwingDirection::RightToLeft),
    ]
}

pub fn studio_structure() -> RoomStructure {
    RoomStructure::new(studio_room(), studio_fixtures())
}

fn piece(
    id: &str,
    name: &str,
    kind: FurnitureKind,
    size: (f64, f64, f64),
    at: (f64, f64, f64),
    color: &str,
) -> FurnitureItem {
    FurnitureItem::new(
        id,
        name,
        kind,
        Dimensions::new(size.0, size.1, size.2),
        Position::new(at.0, at.1, at.2),
    )
    .with_color(color)
}

pub fn studio_furniture() -> Vec<FurnitureItem> {
    vec![
        piece("tv", "TV", FurnitureKind::Tv, (38.25, 2.0, 22.0), (50.0, 0.0, 0.0), "#1a1a2e")
            .mounted_on(WallSide::North),
        piece(
            "media-console",
            "Media Console",
            FurnitureKind::MediaConsole,
            (44.0, 18.5, 29.5),
            (47.0, 0.0, 0.0),
            "#5D4037",
        ),
        piece("shelf-2", "Shelf #2", FurnitureKind::Shelf, (12.0, 30.0, 69.75), (0.0, 68.0, 0.0), "#A1887F"),
        piece("shelf-1", "Shelf #1", FurnitureKind::Shelf, (12.0, 30.0, 69.75), (0.0, 105.0, 0.0), "#A1887F"),
        piece(
            "glass-board",
            "Glass Board",
            FurnitureKind::GlassBoard,
            (2.0, 35.5, 44.5),
            (146.0, 40.0, 0.0),
            "rgba(100, 200, 255, 0.7)",
        )
        .mounted_on(WallSide::East),
        piece("desk-1", "Desk #1", FurnitureKind::Desk, (30.0, 72.0, 30.0), (118.0, 97.0, 0.0), "#D7CCC8"),
        piece("desk-2", "Desk #2", FurnitureKind::Desk, (72.0, 30.0, 30.0), (76.0, 169.0, 0.0), "#D7CCC8"),
        piece("chair", "Chair", FurnitureKind::Chair, (28.0, 32.0, 38.0), (8.0, 158.0, -40.0), "#424242"),
        piece("side-table", "Table", FurnitureKind::Table, (17.0, 17.0, 21.0), (38.0, 182.0, 0.0), "#8D6E63"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn preset_ids_are_unique() {
        let furniture = studio_furniture();
        let ids: HashSet<_> = furniture.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), furniture.len());
    }

    #[test]
    fn fixtures_sit_on_their_walls() {
        for fixture in studio_fixtures() {
            match fixture.wall_side {
                WallSide::North => assert_eq!(fixture.position.y, 0.0),
                WallSide::West => assert_eq!(fixture.position.x, 0.0),
                _ => panic!("unexpected wall for {}", fixture.id),
            }
        }
    }
}
