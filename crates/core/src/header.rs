// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cast header decoding and field-restricted comparison.

use serde_json::{Map, Value};

use crate::error::DiffError;

/// Session-level metadata preceding the event stream: an arbitrary JSON
/// object (width, height, timestamp, env, ...).
pub type Header = Map<String, Value>;

/// Decode the header line of a cast.
///
/// A JSON `null` decodes to an absent header. Any other non-object value
/// is a decode failure.
pub fn decode_header(line: &str) -> Result<Option<Header>, DiffError> {
    match serde_json::from_str::<Value>(line)? {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        _ => Err(DiffError::InvalidHeader),
    }
}

/// Compare two headers restricted to the listed fields.
///
/// Absent headers are treated as empty mappings, so two absent headers are
/// equal. A field missing from a header reads as JSON null. Fields not
/// listed are never inspected, which is how callers opt timestamp-like or
/// machine-specific fields out of the comparison. An empty field list makes
/// any two headers equal.
pub fn headers_equal(a: Option<&Header>, b: Option<&Header>, fields: &[String]) -> bool {
    let empty = Header::new();
    let a = a.unwrap_or(&empty);
    let b = b.unwrap_or(&empty);
    fields.iter().all(|field| {
        values_equal(
            a.get(field).unwrap_or(&Value::Null),
            b.get(field).unwrap_or(&Value::Null),
        )
    })
}

/// Deep structural equality over arbitrary JSON values.
///
/// Numbers compare by their `f64` value, so `1` equals `1.0`; objects
/// compare by key set and recursive value equality regardless of key order.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| values_equal(a, b)))
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
