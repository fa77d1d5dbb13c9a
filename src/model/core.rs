use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Footprint;

const DEFAULT_COLOR: &str = "#9E9E9E";

/// Physical size in inches. Rotation never changes these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }
}

/// Unrotated top-left anchor plus rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }
}

/// Room shell; placement bounds are `[0, width] x [0, depth]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Room {
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwingDirection {
    LeftToRight,
    RightToLeft,
}

/// Defines a string-backed kind enum whose unknown values survive a
/// save/load round trip untouched.
macro_rules! string_kind {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(tag) => tag.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                match tag.as_str() {
                    $($tag => Self::$variant,)+
                    _ => Self::Other(tag),
                }
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                Self::from(tag.to_string())
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> Self {
                match kind {
                    $name::Other(tag) => tag,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_kind! {
    /// Architectural element category.
    FixtureKind {
        Door => "door",
        Window => "window",
        Outlet => "outlet",
        LightSwitch => "light-switch",
    }
}

string_kind! {
    /// Movable furniture category.
    FurnitureKind {
        Desk => "desk",
        Chair => "chair",
        Shelf => "shelf",
        MediaConsole => "media-console",
        Tv => "tv",
        Table => "table",
        GlassBoard => "glass-board",
        FloatingShelf => "floating-shelf",
    }
}

/// Immovable architectural element (door, window). Only ever a snap target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FixtureKind,
    pub dimensions: Dimensions,
    pub position: Position,
    pub color: String,
    pub wall_side: WallSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swing_direction: Option<SwingDirection>,
}

impl Fixture {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: FixtureKind,
        dimensions: Dimensions,
        position: Position,
        wall_side: WallSide,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            dimensions,
            position,
            color: DEFAULT_COLOR.to_string(),
            wall_side,
            swing_direction: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_swing(mut self, swing: SwingDirection) -> Self {
        self.swing_direction = Some(swing);
        self
    }
}

/// Movable placed object; the unit of drag and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    pub dimensions: Dimensions,
    pub position: Position,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_wall_mounted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_side: Option<WallSide>,
}

impl FurnitureItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: FurnitureKind,
        dimensions: Dimensions,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            dimensions,
            position,
            color: DEFAULT_COLOR.to_string(),
            is_wall_mounted: None,
            wall_side: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Mark the item as hung on `side`. Snapping and clamping ignore this.
    pub fn mounted_on(mut self, side: WallSide) -> Self {
        self.is_wall_mounted = Some(true);
        self.wall_side = Some(side);
        self
    }

    pub fn is_wall_mounted(&self) -> bool {
        self.is_wall_mounted.unwrap_or(false)
    }

    /// Copy of the item moved to a new anchor, rotation untouched.
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        let mut next = self.clone();
        next.position.x = x;
        next.position.y = y;
        next
    }
}

impl Footprint for FurnitureItem {
    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    fn position(&self) -> &Position {
        &self.position
    }
}

impl Footprint for Fixture {
    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    fn position(&self) -> &Position {
        &self.position
    }
}

/// Session constants: the room shell and its fixtures. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomStructure {
    pub room: Room,
    pub fixtures: Vec<Fixture>,
}

impl RoomStructure {
    pub fn new(room: Room, fixtures: Vec<Fixture>) -> Self {
        Self { room, fixtures }
    }

    pub fn empty(room: Room) -> Self {
        Self::new(room, Vec::new())
    }
}
