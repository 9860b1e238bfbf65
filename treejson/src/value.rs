// SPDX-License-Identifier: Apache-2.0

//! The in-memory JSON value tree.

use indexmap::IndexMap;

/// A parsed JSON value.
///
/// Objects preserve the insertion order of their keys; serializing a value
/// walks keys in the same order they were parsed or inserted. Numbers are
/// stored as `f64`, matching JSON's single number type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON `null` literal
    #[default]
    Null,
    /// JSON boolean (`true`/`false`)
    Bool(bool),
    /// JSON number, integer or floating point
    Number(f64),
    /// JSON string, with escape sequences already decoded
    String(String),
    /// JSON array of values
    Array(Vec<JsonValue>),
    /// JSON object with insertion-ordered keys
    Object(IndexMap<String, JsonValue>),
}

impl JsonValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns the boolean value if this is a `Bool`, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number value if this is a `Number`, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the elements if this is an `Array`, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the map if this is an `Object`, None otherwise.
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Returns the type name as a string for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}
