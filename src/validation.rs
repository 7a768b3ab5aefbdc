//! Presence checks for incoming records.

use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// A flat request body: field name to JSON value.
pub type Record = Map<String, Value>;

/// Whether a value counts as empty for a required field.
///
/// Mirrors truthiness: `null`, `false`, `""`, `0`, `0.0`, `[]` and `{}` are all
/// empty. Zero is rejected on purpose, so a required numeric field can never
/// hold it.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Check that every required field is present and non-empty.
///
/// Fails with `AppError::Validation` naming the first offending field, in the
/// order given.
pub fn require_fields(record: &Record, required: &[&str]) -> Result<()> {
    for field in required {
        if record.get(*field).is_none_or(is_blank) {
            return Err(AppError::Validation((*field).to_string()));
        }
    }
    Ok(())
}
