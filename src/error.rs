//! Error types for document acquisition and schema resolution.
//!
//! Field decoding never fails: a missing key decodes to its default.
//! Only reference resolution and schema lookup surface [`ParseError`],
//! because a dangling `$ref` means the document is inconsistent.

use std::path::PathBuf;

use thiserror::Error;

/// Hard-structural failures raised while resolving schema documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `$ref` segment does not exist on the node reached so far.
    #[error("Can't resolve reference '{reference}': element '{segment}' not found")]
    UnresolvedReference {
        /// The full reference string, e.g. `#/definitions/Foo`.
        reference: String,
        /// The segment that could not be found.
        segment: String,
    },

    /// The document has no `paths` collection, or no POST body schema
    /// for the requested operation.
    #[error("Invalid data, no 'paths' field")]
    MissingPaths,

    /// The body schema resolved to something other than a JSON object.
    #[error("Schema for '{operation}' is not an object")]
    SchemaNotObject {
        /// Operation key looked up under `paths`.
        operation: String,
    },
}

/// Failures while obtaining or decoding an odo document.
#[derive(Debug, Error)]
pub enum OdoError {
    /// The command could not be started at all.
    #[error("Failed to run `{command}`: {message}")]
    Spawn {
        /// Command line that was executed.
        command: String,
        /// Underlying error text.
        message: String,
    },

    /// The command ran but exited unsuccessfully.
    #[error("`{command}` exited with status {code}: {stderr}")]
    ExitStatus {
        /// Command line that was executed.
        command: String,
        /// Process exit code.
        code: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// A captured document could not be read.
    #[error("Failed to read {}: {message}", .path.display())]
    Read {
        /// Path of the document.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },

    /// The output was not valid JSON.
    #[error("Output of {origin} is not valid JSON: {source}")]
    InvalidJson {
        /// Command line or file the document came from.
        origin: String,
        /// Decoder error.
        source: serde_json::Error,
    },

    /// The document was JSON but failed structural resolution.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
