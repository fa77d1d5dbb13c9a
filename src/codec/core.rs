use std::io::Read;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FormatError, ReadError, Result};
use crate::model::FurnitureItem;

use super::validate::validate_layout;

/// Saved furniture arrangement. No version field exists; unknown fields are
/// ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    /// ISO-8601 capture time, kept verbatim from the document.
    pub timestamp: String,
    pub furniture: Vec<FurnitureItem>,
}

impl Layout {
    /// Pretty JSON with two-space indentation, as written to disk.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn filename(&self) -> String {
        layout_filename(&self.name)
    }
}

/// Wrap `furniture` in a document stamped with the current UTC time.
pub fn serialize(name: impl Into<String>, furniture: &[FurnitureItem]) -> Layout {
    Layout {
        name: name.into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        furniture: furniture.to_vec(),
    }
}

pub fn deserialize(raw: &str) -> std::result::Result<Layout, FormatError> {
    let value: Value = serde_json::from_str(raw).map_err(FormatError::Json)?;
    deserialize_value(&value)
}

/// Validate the shape of `value`, then convert it into a [`Layout`].
///
/// Only structure is checked: room bounds and id uniqueness are the
/// editor's job once the furniture is applied.
pub fn deserialize_value(value: &Value) -> std::result::Result<Layout, FormatError> {
    validate_layout(value)?;
    Layout::deserialize(value).map_err(|err| FormatError::Malformed {
        path: "furniture".to_string(),
        reason: err.to_string(),
    })
}

/// Read a whole document from `reader` and decode it.
pub fn read_layout(mut reader: impl Read) -> Result<Layout> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).map_err(ReadError::from)?;
    Ok(deserialize(&raw)?)
}

/// `"My Room"` becomes `"my-room-layout.json"`. Every whitespace run turns
/// into a single hyphen, including leading and trailing runs.
pub fn layout_filename(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('-');
            }
            in_space = true;
        } else {
            stem.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    format!("{stem}-layout.json")
}
