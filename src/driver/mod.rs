//! Terminal input adapter for the editor.

mod terminal;

pub use terminal::{DriverError, DriverResult, EventFlow, TerminalPointer};
