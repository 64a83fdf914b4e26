//! A recording session shared by all recording adapters.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;
use super::CassetteError;

/// Owns the recorder that every recording adapter writes into.
///
/// Adapters hold clones of [`recorder`](Self::recorder); they must be
/// dropped before [`finish`](Self::finish) is called.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

/// Failure to finish a recording session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An adapter still holds the recorder.
    #[error("Recording adapters still hold the cassette recorder")]
    StillShared,
    /// A thread panicked while holding the recorder.
    #[error("Cassette recorder lock poisoned")]
    Poisoned,
    /// Writing the cassette failed.
    #[error(transparent)]
    Cassette(#[from] CassetteError),
}

impl RecordingSession {
    /// Starts a session that will write a cassette to `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("odoscope-session")
            .trim_end_matches(".cassette")
            .to_string();
        tracing::debug!(path = %path.display(), "recording session started");
        Self { recorder: Arc::new(Mutex::new(CassetteRecorder::new(path, name))) }
    }

    /// Shared handle for a recording adapter.
    #[must_use]
    pub fn recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(&self.recorder)
    }

    /// Writes the cassette and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter is still alive or the write fails.
    pub fn finish(self) -> Result<PathBuf, SessionError> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| SessionError::StillShared)?
            .into_inner()
            .map_err(|_| SessionError::Poisoned)?;
        let count = recorder.interactions().len();
        let path = recorder.finish()?;
        tracing::info!(path = %path.display(), count, "cassette written");
        Ok(path)
    }
}
