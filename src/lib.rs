//! Editing core for a furniture layout planner.
//!
//! A [`LayoutEditor`] owns furniture placed inside a rectangular room. Items
//! are dragged with wall, edge, and grid snapping, every committed drag can
//! be undone, and arrangements round-trip through JSON [`Layout`] documents.
//! Rendering is left to the host; [`SceneProjection`] describes the room for
//! a 3D viewer and [`driver::TerminalPointer`] adapts crossterm input.

pub mod codec;
pub mod driver;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod projection;
pub mod snap;

pub use codec::{Layout, deserialize, layout_filename, read_layout, serialize};
pub use driver::{EventFlow, TerminalPointer};
pub use editor::{
    DEFAULT_UNDO_CAPACITY, DragSession, DragState, DropEvent, EditorConfig, EditorListener,
    LayoutEditor, TemplateCatalog, UndoHistory,
};
pub use error::{FormatError, PlannerError, ReadError, Result};
pub use geometry::{Footprint, Point, Rect, clamp_position};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{EditorMetrics, MetricSnapshot};
pub use model::{
    Dimensions, Fixture, FixtureKind, FurnitureItem, FurnitureKind, Position, Room, RoomStructure,
    SwingDirection, WallSide,
};
pub use projection::{SceneBox, SceneProjection, Shape};
pub use snap::{SnapConfig, SnapOutcome, SnapResolver, SnapStage, compute_snapped_position};
