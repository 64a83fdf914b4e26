//! `registry` command.

use std::fmt::Write as _;

use super::Output;
use crate::odo::{OdoClient, Source};

/// Execute the `registry` command.
///
/// # Errors
///
/// Returns an error string if the registry document cannot be obtained.
pub fn run(
    client: &OdoClient<'_>,
    source: &Source,
    devfile: &str,
    out: Output,
) -> Result<(), String> {
    let info = client.component_type(source, devfile).map_err(|e| e.to_string())?;
    out.emit(&info, || {
        let mut text = format!("Component type: {}", info.name());
        if info.starters().is_empty() {
            text.push_str("\nNo starter projects.");
        } else {
            text.push_str("\nStarter projects:");
            for starter in info.starters() {
                let _ = write!(text, "\n  {}", starter.name());
            }
        }
        text
    })
}
