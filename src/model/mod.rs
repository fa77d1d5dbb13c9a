//! Room data model shared by the editor, codec and scene projection.
//!
//! Types serialize with the camelCase field names used by saved layout
//! documents; the implementation lives in the private `core` module.

mod core;
pub mod presets;

pub use self::core::{
    Dimensions, Fixture, FixtureKind, FurnitureItem, FurnitureKind, Position, Room, RoomStructure,
    SwingDirection, WallSide,
};
