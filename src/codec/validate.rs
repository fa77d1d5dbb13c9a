use serde_json::{Map, Value};

use crate::error::FormatError;

/// Structural check over an untyped JSON value.
pub trait ShapeValidator {
    fn validate(&self, value: &Value, path: &str) -> Result<(), FormatError>;
}

/// Shape rules for a whole layout document.
pub struct LayoutShape;

/// Shape rules for a single furniture entry.
pub struct FurnitureShape;

impl ShapeValidator for LayoutShape {
    fn validate(&self, value: &Value, path: &str) -> Result<(), FormatError> {
        let object = expect_object(value, path)?;
        expect_string(object, path, "name")?;
        expect_string(object, path, "timestamp")?;

        let furniture_path = join(path, "furniture");
        let furniture = object
            .get("furniture")
            .and_then(Value::as_array)
            .ok_or_else(|| FormatError::NotAnArray {
                path: furniture_path.clone(),
            })?;

        for (index, item) in furniture.iter().enumerate() {
            FurnitureShape.validate(item, &format!("{furniture_path}[{index}]"))?;
        }
        Ok(())
    }
}

impl ShapeValidator for FurnitureShape {
    fn validate(&self, value: &Value, path: &str) -> Result<(), FormatError> {
        let object = expect_object(value, path)?;
        for field in ["id", "name", "type", "color"] {
            expect_string(object, path, field)?;
        }

        let dimensions_path = join(path, "dimensions");
        let dimensions = expect_object(object.get("dimensions").unwrap_or(&Value::Null), &dimensions_path)?;
        for field in ["width", "depth", "height"] {
            expect_number(dimensions, &dimensions_path, field)?;
        }

        let position_path = join(path, "position");
        let position = expect_object(object.get("position").unwrap_or(&Value::Null), &position_path)?;
        for field in ["x", "y", "rotation"] {
            expect_number(position, &position_path, field)?;
        }
        Ok(())
    }
}

pub fn validate_layout(value: &Value) -> Result<(), FormatError> {
    LayoutShape.validate(value, "")
}

pub fn validate_furniture_item(value: &Value) -> Result<(), FormatError> {
    FurnitureShape.validate(value, "")
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, FormatError> {
    value.as_object().ok_or_else(|| FormatError::NotAnObject {
        path: if path.is_empty() { "$".to_string() } else { path.to_string() },
    })
}

fn expect_string(object: &Map<String, Value>, path: &str, field: &str) -> Result<(), FormatError> {
    match object.get(field) {
        Some(Value::String(_)) => Ok(()),
        _ => Err(FormatError::FieldType {
            path: join(path, field),
            expected: "string",
        }),
    }
}

fn expect_number(object: &Map<String, Value>, path: &str, field: &str) -> Result<(), FormatError> {
    match object.get(field) {
        Some(Value::Number(_)) => Ok(()),
        _ => Err(FormatError::FieldType {
            path: join(path, field),
            expected: "number",
        }),
    }
}
