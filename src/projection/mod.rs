//! Read-only scene description for a 3D viewer.
//!
//! Plan coordinates map onto the scene as `x -> x`, `y -> z`, with height on
//! the vertical axis. Every box is centered on its footprint and rests on the
//! floor.

use blake3::Hash;
use serde::Serialize;

use crate::model::{Fixture, FurnitureItem, FurnitureKind, Room};

pub const WALL_THICKNESS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Box,
    /// Round body with a diameter equal to the item's width.
    Cylinder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneBox {
    pub id: String,
    pub center: [f64; 3],
    /// `[width, height, depth]`.
    pub size: [f64; 3],
    /// Rotation about the vertical axis, radians.
    pub rotation_y: f64,
    pub shape: Shape,
    pub color: String,
    pub translucent: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneProjection<'a> {
    pub room: &'a Room,
    pub fixtures: &'a [Fixture],
    pub furniture: &'a [FurnitureItem],
}

impl<'a> SceneProjection<'a> {
    pub fn new(room: &'a Room, fixtures: &'a [Fixture], furniture: &'a [FurnitureItem]) -> Self {
        Self {
            room,
            fixtures,
            furniture,
        }
    }

    /// Fixtures first, then furniture in collection order.
    pub fn boxes(&self) -> Vec<SceneBox> {
        self.fixtures
            .iter()
            .map(fixture_box)
            .chain(self.furniture.iter().map(furniture_box))
            .collect()
    }

    /// North, west, and east wall slabs. The south side stays open.
    pub fn walls(&self) -> [SceneBox; 3] {
        let Room {
            width,
            depth,
            height,
        } = *self.room;
        [
            wall("wall-north", [width / 2.0, height / 2.0, 0.0], [width, height, WALL_THICKNESS]),
            wall("wall-west", [0.0, height / 2.0, depth / 2.0], [WALL_THICKNESS, height, depth]),
            wall("wall-east", [width, height / 2.0, depth / 2.0], [WALL_THICKNESS, height, depth]),
        ]
    }

    /// Content digest of the projected state; equal digests mean the viewer
    /// can keep its current scene.
    pub fn revision(&self) -> serde_json::Result<Hash> {
        let mut hasher = blake3::Hasher::new();
        serde_json::to_writer(&mut hasher, self)?;
        Ok(hasher.finalize())
    }
}

fn fixture_box(fixture: &Fixture) -> SceneBox {
    let dims = fixture.dimensions;
    SceneBox {
        id: fixture.id.clone(),
        center: [
            fixture.position.x + dims.width / 2.0,
            dims.height / 2.0,
            fixture.position.y + dims.depth / 2.0,
        ],
        size: [dims.width, dims.height, dims.depth],
        rotation_y: 0.0,
        shape: Shape::Box,
        color: fixture.color.clone(),
        translucent: true,
    }
}

fn furniture_box(item: &FurnitureItem) -> SceneBox {
    let dims = item.dimensions;
    let shape = match item.kind {
        FurnitureKind::Table => Shape::Cylinder,
        _ => Shape::Box,
    };
    SceneBox {
        id: item.id.clone(),
        center: [
            item.position.x + dims.width / 2.0,
            dims.height / 2.0,
            item.position.y + dims.depth / 2.0,
        ],
        size: [dims.width, dims.height, dims.depth],
        rotation_y: item.position.rotation.to_radians(),
        shape,
        color: item.color.clone(),
        translucent: false,
    }
}

fn wall(id: &str, center: [f64; 3], size: [f64; 3]) -> SceneBox {
    SceneBox {
        id: id.to_string(),
        center,
        size,
        rotation_y: 0.0,
        shape: Shape::Box,
        color: "#2a2a2a".to_string(),
        translucent: false,
    }
}
