//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveFileSystem, LiveShellExecutor};
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::cassette::CassetteError;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::ShellExecutor;

/// The external boundaries a command may touch.
///
/// Constructors wire up live, recording or replaying adapters.
pub struct ServiceContext {
    /// Filesystem for reading captured documents.
    pub fs: Box<dyn FileSystem>,
    /// Shell executor for running odo and oc.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem and shell.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), shell: Box::new(LiveShellExecutor) }
    }

    /// Creates a context whose ports record into a cassette at `path`.
    ///
    /// The returned session must be finished after the context is dropped.
    #[must_use]
    pub fn recording_at(path: &Path) -> (Self, RecordingSession) {
        let session = RecordingSession::new(path);
        let ctx = Self {
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), session.recorder())),
            shell: Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                session.recorder(),
            )),
        };
        (ctx, session)
    }

    /// Creates a context that answers every port call from a cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, CassetteError> {
        let cassette = Cassette::load(path)?;
        tracing::debug!(
            path = %path.display(),
            interactions = cassette.interactions.len(),
            "replaying cassette"
        );
        // Each port gets its own replayer so cursors stay independent.
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        })
    }
}
