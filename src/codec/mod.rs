//! Layout persistence codec.
//!
//! A [`Layout`] document carries only the furniture arrangement; the room and
//! its fixtures are session constants and are rebuilt by the host on load.
//! Decoding validates the document shape before any typed conversion so a
//! bad file never reaches the editor.

mod core;
mod validate;

pub use self::core::{Layout, deserialize, deserialize_value, layout_filename, read_layout, serialize};
pub use validate::{ShapeValidator, validate_furniture_item, validate_layout};
