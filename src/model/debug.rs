//! Debug session status.

use serde::Serialize;

/// Whether a debugger process is attached to the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DebugStatus {
    /// A numeric debug process id was reported.
    Running,
    /// No process id, or one that is not numeric.
    Unknown,
}

impl std::fmt::Display for DebugStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
