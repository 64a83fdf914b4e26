//! `$ref` resolution and request-body schema lookup for OpenAPI documents.
//!
//! Unlike field decoding, failures here are hard errors: a dangling
//! reference means the schema used to validate request bodies would be
//! silently wrong.

use serde_json::{Map, Value};

use super::fields::{BODY_VALUE, DOLLAR_REF, NAME, PARAMETERS, PATHS, POST, SCHEMA};
use crate::error::ParseError;
use crate::json::{elements, field, nested_path, optional_field, text};

/// Follows a local reference such as `#/definitions/Foo` from `node`.
///
/// The leading `#` is skipped and `~1`/`~0` escapes are decoded in each
/// segment.
///
/// # Errors
///
/// Returns [`ParseError::UnresolvedReference`] naming the first segment
/// that does not exist on the node reached so far.
pub fn resolve<'a>(node: &'a Value, reference: &str) -> Result<&'a Value, ParseError> {
    reference.split('/').filter(|segment| *segment != "#").try_fold(node, |current, segment| {
        let key = unescape(segment);
        optional_field(current, &key).ok_or_else(|| ParseError::UnresolvedReference {
            reference: reference.to_string(),
            segment: key,
        })
    })
}

fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// The `$ref` string of `node`, if it is a reference object.
fn reference_of(node: &Value) -> Option<String> {
    optional_field(node, DOLLAR_REF).map(text)
}

/// Returns a copy of `node` with every object field that is a `$ref`
/// replaced by its target from `root`, expanded recursively.
///
/// Array elements are copied as-is. A reference that is already being
/// expanded further up (a recursive schema) stays as its `$ref` node.
/// The input is not modified.
///
/// # Errors
///
/// Returns [`ParseError::UnresolvedReference`] for the first reference
/// that cannot be resolved.
pub fn resolve_refs(root: &Value, node: &Value) -> Result<Value, ParseError> {
    expand(root, node, &mut Vec::new())
}

fn expand(root: &Value, node: &Value, active: &mut Vec<String>) -> Result<Value, ParseError> {
    let Value::Object(fields) = node else {
        return Ok(node.clone());
    };
    let mut resolved = Map::with_capacity(fields.len());
    for (name, child) in fields {
        let value = match reference_of(child) {
            Some(reference) if active.contains(&reference) => child.clone(),
            Some(reference) => {
                let target = resolve(root, &reference)?;
                active.push(reference);
                let expanded = expand(root, target, active);
                active.pop();
                expanded?
            }
            None => expand(root, child, active)?,
        };
        resolved.insert(name.clone(), value);
    }
    Ok(Value::Object(resolved))
}

/// Finds the fully dereferenced POST body schema for `operation` under
/// `paths`.
///
/// # Errors
///
/// Returns [`ParseError::MissingPaths`] when the document has no
/// `paths`, or when the operation has no POST parameter named `body`
/// carrying a `schema`. Unresolvable references propagate as
/// [`ParseError::UnresolvedReference`].
pub fn find_schema(root: &Value, operation: &str) -> Result<Map<String, Value>, ParseError> {
    let paths = optional_field(root, PATHS).ok_or(ParseError::MissingPaths)?;
    let parameters = optional_field(paths, operation)
        .and_then(|node| nested_path(node, &[POST, PARAMETERS]))
        .ok_or(ParseError::MissingPaths)?;
    let schema = elements(parameters)
        .filter(|parameter| field(parameter, NAME) == BODY_VALUE)
        .find_map(|parameter| optional_field(parameter, SCHEMA))
        .ok_or(ParseError::MissingPaths)?;

    let resolved = match reference_of(schema) {
        Some(reference) => {
            let target = resolve(root, &reference)?;
            expand(root, target, &mut vec![reference])?
        }
        None => resolve_refs(root, schema)?,
    };
    match resolved {
        Value::Object(map) => Ok(map),
        _ => Err(ParseError::SchemaNotObject { operation: operation.to_string() }),
    }
}
