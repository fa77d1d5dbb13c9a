//! Layout editor state machine.
//!
//! [`LayoutEditor`] owns the live furniture collection, the selection, the
//! drag session and a bounded undo history. Every mutation funnels through
//! [`LayoutEditor::apply_furniture`], which clamps each item into the room and
//! keeps ids unique before listeners are notified.

pub mod catalog;
mod config;
mod core;
pub mod history;
mod listener;
mod session;

pub use catalog::TemplateCatalog;
pub use config::{DEFAULT_UNDO_CAPACITY, EditorConfig};
pub use self::core::{DropEvent, LayoutEditor};
pub use history::UndoHistory;
pub use listener::EditorListener;
pub use session::{DragSession, DragState};
