//! Typed accessors over the raw value tree.
//!
//! Every accessor takes the path of the value it reads so that a type
//! mismatch can be reported where it happened.

use crate::config::{ConfigError, FieldPath};
use serde_json::{Map, Value};

pub(super) type Table = Map<String, Value>;

/// Short name of a raw value's type, used in error messages.
pub(super) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}

pub(super) fn invalid(path: &FieldPath, expected: &'static str, value: &Value) -> ConfigError {
    ConfigError::InvalidFieldType {
        path: path.clone(),
        expected,
        found: kind(value).to_string(),
    }
}

pub(super) fn as_table<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a Table, ConfigError> {
    value.as_object().ok_or_else(|| invalid(path, "table", value))
}

pub(super) fn as_array<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a [Value], ConfigError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid(path, "array", value))
}

/// Read an optional string field.
pub(super) fn opt_string(
    table: &Table,
    key: &str,
    path: &FieldPath,
) -> Result<Option<String>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid(&path.key(key), "string", other)),
    }
}

/// Read an optional boolean field.
pub(super) fn opt_bool(
    table: &Table,
    key: &str,
    path: &FieldPath,
) -> Result<Option<bool>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(invalid(&path.key(key), "boolean", other)),
    }
}

/// Read the link target of an entry.
///
/// `href` and `link` are the only accepted spellings; `href` wins when both
/// are set.
pub(super) fn link_target(table: &Table, path: &FieldPath) -> Result<Option<String>, ConfigError> {
    let href = opt_string(table, "href", path)?;
    let link = opt_string(table, "link", path)?;
    Ok(href.or(link))
}

/// Copy every field not listed in `known`, keeping authored order.
pub(super) fn extra_fields(table: &Table, known: &[&str]) -> Table {
    table
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
