//! Redirect records as published in `redirects.json`.
//!
//! The dataset is not schema-checked. Each array element is kept as decoded
//! JSON and fields are read the way a script reading `entry.name` would:
//! absent fields are `undefined`, any JSON type is accepted until something
//! needs a string out of it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SearchError;

/// Text of a field the record does not carry.
pub const MISSING_FIELD: &str = "undefined";

/// One element of the dataset array, normally `{ "name": .., "target": .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectEntry(Value);

impl RedirectEntry {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self(serde_json::json!({ "name": name.into(), "target": target.into() }))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Property lookup; `Ok(None)` is `undefined`.
    ///
    /// Fails only for a `null` element, where there is nothing to look into.
    pub fn field(&self, key: &'static str, index: usize) -> Result<Option<&Value>, SearchError> {
        match &self.0 {
            Value::Null => Err(SearchError::MalformedEntry { index, field: key }),
            Value::Object(map) => Ok(map.get(key)),
            _ => Ok(None),
        }
    }

    /// The field if it is a JSON string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// `name` as it appears in rendered output.
    pub fn name_text(&self, index: usize) -> Result<String, SearchError> {
        Ok(display_text(self.field("name", index)?))
    }

    /// `target` as it appears in rendered output.
    pub fn target_text(&self, index: usize) -> Result<String, SearchError> {
        Ok(display_text(self.field("target", index)?))
    }
}

/// String conversion used when a field is interpolated into output.
///
/// `undefined` for absent, `null` for null, numbers as written, arrays joined
/// with `,` (null items empty), objects as `[object Object]`.
pub fn display_text(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return MISSING_FIELD.to_string();
    };
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_text(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Decode a response body into entries, preserving order.
///
/// Only the top level must be an array; elements may be anything.
pub fn parse_entries(body: &[u8]) -> Result<Vec<RedirectEntry>, SearchError> {
    Ok(serde_json::from_slice(body)?)
}
