//! `schema` command.

use super::Output;
use crate::odo::{OdoClient, Source};

/// Execute the `schema` command.
///
/// The schema is printed as pretty JSON in both output modes.
///
/// # Errors
///
/// Returns an error string if the OpenAPI document cannot be obtained or
/// has no resolvable body schema for `operation`.
pub fn run(
    client: &OdoClient<'_>,
    source: &Source,
    operation: &str,
    out: Output,
) -> Result<(), String> {
    let schema = client.schema(source, operation).map_err(|e| e.to_string())?;
    let pretty = serde_json::to_string_pretty(&schema)
        .map_err(|e| format!("Failed to serialize schema: {e}"))?;
    out.emit(&schema, || pretty)
}
