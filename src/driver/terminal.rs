use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use thiserror::Error;

use crate::editor::LayoutEditor;
use crate::geometry::Point;

pub type DriverResult<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Whether an event was turned into an editor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    Consumed,
}

/// Maps terminal cells onto room inches and forwards pointer and keyboard
/// events to a [`LayoutEditor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalPointer {
    /// Cell where the room's north-west corner is drawn.
    pub origin: (u16, u16),
    pub cells_per_inch_x: f64,
    pub cells_per_inch_y: f64,
}

impl Default for TerminalPointer {
    /// Terminal cells are roughly twice as tall as they are wide.
    fn default() -> Self {
        Self {
            origin: (0, 0),
            cells_per_inch_x: 0.5,
            cells_per_inch_y: 0.25,
        }
    }
}

impl TerminalPointer {
    pub fn new(origin: (u16, u16), cells_per_inch_x: f64, cells_per_inch_y: f64) -> Self {
        Self {
            origin,
            cells_per_inch_x,
            cells_per_inch_y,
        }
    }

    /// Room position of the center of cell `(column, row)`. Cells left of or
    /// above the origin map to negative coordinates.
    pub fn cell_to_room(&self, column: u16, row: u16) -> Point {
        let dx = f64::from(column) - f64::from(self.origin.0) + 0.5;
        let dy = f64::from(row) - f64::from(self.origin.1) + 0.5;
        Point::new(dx / self.cells_per_inch_x, dy / self.cells_per_inch_y)
    }

    pub fn handle(&self, editor: &mut LayoutEditor, event: &Event) -> EventFlow {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(editor, mouse),
            Event::Key(key) => handle_key(editor, key),
            Event::FocusLost if editor.is_dragging() => {
                editor.cancel_drag();
                EventFlow::Consumed
            }
            _ => EventFlow::Continue,
        }
    }

    /// Wait up to `timeout` for one terminal event and dispatch it.
    pub fn pump(&self, editor: &mut LayoutEditor, timeout: Duration) -> DriverResult<EventFlow> {
        if !event::poll(timeout)? {
            return Ok(EventFlow::Continue);
        }
        let event = event::read()?;
        Ok(self.handle(editor, &event))
    }

    fn handle_mouse(&self, editor: &mut LayoutEditor, mouse: &MouseEvent) -> EventFlow {
        let point = self.cell_to_room(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(id) = editor.hit_test(point).map(|item| item.id.clone()) else {
                    return EventFlow::Continue;
                };
                match editor.begin_drag(&id, point) {
                    Ok(()) => EventFlow::Consumed,
                    Err(_) => EventFlow::Continue,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if editor.is_dragging() => {
                editor.pointer_move(point);
                EventFlow::Consumed
            }
            MouseEventKind::Up(MouseButton::Left) if editor.is_dragging() => {
                editor.end_drag();
                EventFlow::Consumed
            }
            _ => EventFlow::Continue,
        }
    }
}

fn handle_key(editor: &mut LayoutEditor, key: &KeyEvent) -> EventFlow {
    if key.kind != KeyEventKind::Press || !is_undo_chord(key) {
        return EventFlow::Continue;
    }
    editor.undo();
    EventFlow::Consumed
}

/// Ctrl+Z or Cmd+Z, without Shift.
fn is_undo_chord(key: &KeyEvent) -> bool {
    let command = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
    matches!(key.code, KeyCode::Char('z') | KeyCode::Char('Z')) && command && !shifted
}
