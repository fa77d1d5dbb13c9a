use crate::geometry::Point;
use crate::model::FurnitureItem;

/// An in-progress pointer drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub item_id: String,
    /// Pointer position relative to the item's unrotated anchor at grab time.
    pub grab_offset: Point,
    pub(crate) snapshot: Vec<FurnitureItem>,
    pub(crate) moved: bool,
}

impl DragSession {
    pub(crate) fn new(item_id: String, grab_offset: Point, snapshot: Vec<FurnitureItem>) -> Self {
        Self {
            item_id,
            grab_offset,
            snapshot,
            moved: false,
        }
    }

    /// Collection as it was when the drag began.
    pub fn snapshot(&self) -> &[FurnitureItem] {
        &self.snapshot
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Raw room-space anchor for the current pointer position.
    pub fn anchor_for(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.grab_offset.x, pointer.y - self.grab_offset.y)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }
}
