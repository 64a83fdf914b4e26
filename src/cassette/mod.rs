//! Cassettes: recorded port interactions for offline replay.
//!
//! A cassette captures what odo printed (and which captured documents
//! were read) so a session can be replayed without a cluster.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

use thiserror::Error;

/// Failures loading, saving or replaying a cassette.
#[derive(Debug, Error)]
pub enum CassetteError {
    /// The cassette file could not be read or written.
    #[error("Cassette I/O on {}: {source}", .path.display())]
    Io {
        /// Cassette path.
        path: std::path::PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The cassette is not valid YAML for the expected format.
    #[error("Malformed cassette {}: {source}", .path.display())]
    Format {
        /// Cassette path.
        path: std::path::PathBuf,
        /// Underlying error.
        source: serde_yaml::Error,
    },

    /// Nothing was recorded for the requested port and method.
    #[error("No interactions recorded for {port}::{method} (recorded: [{available}])")]
    Unrecorded {
        /// Port name.
        port: String,
        /// Method name.
        method: String,
        /// Comma-separated `port::method` pairs that do exist.
        available: String,
    },

    /// Every recorded interaction for the port and method was consumed.
    #[error("Cassette exhausted: all {count} interactions for {port}::{method} were replayed")]
    Exhausted {
        /// Port name.
        port: String,
        /// Method name.
        method: String,
        /// Number of interactions that were available.
        count: usize,
    },
}
