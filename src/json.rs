//! Tolerant accessors over `serde_json::Value`.
//!
//! odo changes its JSON output between releases, so every accessor here
//! treats absence as a default instead of an error. Callers compose
//! these rather than matching on `Value` by hand.

use serde_json::Value;

/// Textual form of a value.
///
/// Strings are returned verbatim, numbers and booleans in their JSON
/// spelling, `null` as `"null"`, and arrays/objects as the empty string.
#[must_use]
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Child `name` of `node`, if `node` is an object that has it.
#[must_use]
pub fn optional_field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    node.as_object().and_then(|map| map.get(name))
}

/// Textual value of `name` under `node`, or `""` when absent.
#[must_use]
pub fn field(node: &Value, name: &str) -> String {
    optional_field(node, name).map(text).unwrap_or_default()
}

/// Walks `path` from `node`, stopping at the first missing key.
#[must_use]
pub fn nested_path<'a>(node: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(node, |current, name| optional_field(current, name))
}

/// Whether `name` under `node` is present and truthy.
///
/// Accepts `true`, non-zero integers and the exact string `"true"`
/// (surrounding whitespace ignored). Floating-point numbers are never
/// truthy.
#[must_use]
pub fn flag(node: &Value, name: &str) -> bool {
    match optional_field(node, name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => {
            n.as_i64().is_some_and(|i| i != 0) || n.as_u64().is_some_and(|u| u != 0)
        }
        Some(Value::String(s)) => s.trim() == "true",
        _ => false,
    }
}

/// Children of a container: array elements, or object values in
/// document order. Scalars have no children.
pub fn elements(node: &Value) -> impl Iterator<Item = &Value> {
    let (array, object) = match node {
        Value::Array(items) => (Some(items), None),
        Value::Object(map) => (None, Some(map)),
        _ => (None, None),
    };
    array.into_iter().flatten().chain(object.into_iter().flat_map(serde_json::Map::values))
}
