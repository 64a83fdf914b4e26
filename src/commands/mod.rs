//! Command dispatch and handlers.

pub mod component;
pub mod registry;
pub mod schema;

use serde::Serialize;

use crate::cli::{Cli, Command, SourceArgs};
use crate::cassette::session::RecordingSession;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::odo::{OdoClient, Source};

/// Dispatch a parsed command to its handler.
///
/// `ODOSCOPE_RECORD=<file>` records every port interaction to a
/// cassette; `ODOSCOPE_REPLAY=<file>` answers them from one instead.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::from_env()?.with_odo(cli.odo.as_deref());

    if let Some(path) = &config.replay {
        let ctx = ServiceContext::replaying(path).map_err(|e| e.to_string())?;
        return dispatch_with_context(cli, &ctx, &config);
    }

    let Some(path) = &config.record else {
        return dispatch_with_context(cli, &ServiceContext::live(), &config);
    };

    let (ctx, session) = ServiceContext::recording_at(path);
    let result = dispatch_with_context(cli, &ctx, &config);
    // Adapters hold the recorder; release them before writing.
    drop(ctx);
    finish_recording(session, result)
}

/// Writes the cassette, keeping the command's own error if both fail.
fn finish_recording(session: RecordingSession, result: Result<(), String>) -> Result<(), String> {
    match (session.finish(), result) {
        (Ok(written), result) => {
            eprintln!("Recording saved to: {}", written.display());
            result
        }
        (Err(e), Ok(())) => Err(e.to_string()),
        (Err(e), Err(command_err)) => {
            tracing::error!(error = %e, "cassette not written");
            Err(format!("{command_err} (recording not saved: {e})"))
        }
    }
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    cli: &Cli,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    let client = OdoClient::new(ctx, config);
    let out = Output { json: cli.json };
    tracing::debug!(command = ?cli.command, "dispatching");

    match &cli.command {
        Command::Describe { source } => component::describe(&client, &source_of(source), out),
        Command::Info { kind, name, source } => {
            component::info(&client, &source_of(source), *kind, name.as_deref(), out)
        }
        Command::Urls { source } => component::urls(&client, &source_of(source), out),
        Command::State { source } => component::state(&client, &source_of(source), out),
        Command::Debug { source } => component::debug(&client, &source_of(source), out),
        Command::Registry { devfile, input } => {
            registry::run(&client, &Source::from_args(input.as_deref(), None), devfile, out)
        }
        Command::Schema { operation, input } => {
            schema::run(&client, &Source::from_args(input.as_deref(), None), operation, out)
        }
    }
}

fn source_of(args: &SourceArgs) -> Source {
    Source::from_args(args.input.as_deref(), args.context.as_deref())
}

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Print serialized JSON instead of text.
    pub json: bool,
}

impl Output {
    /// Prints `value` as pretty JSON, or the text produced by `text`.
    ///
    /// # Errors
    ///
    /// Returns an error string if JSON serialization fails.
    pub fn emit<T, F>(self, value: &T, text: F) -> Result<(), String>
    where
        T: Serialize,
        F: FnOnce() -> String,
    {
        if self.json {
            let rendered = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to serialize result: {e}"))?;
            println!("{rendered}");
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn failed_write_keeps_command_error() {
        let session = RecordingSession::new(Path::new("/tmp/odoscope_unwritten.cassette.yaml"));
        let _held = session.recorder();

        let err = finish_recording(session, Err("odo exited with status 1".into())).unwrap_err();
        assert!(err.starts_with("odo exited with status 1"), "got: {err}");
        assert!(err.contains("recording not saved"));
    }

    #[test]
    fn failed_write_is_reported_when_command_succeeded() {
        let session = RecordingSession::new(Path::new("/tmp/odoscope_unwritten.cassette.yaml"));
        let _held = session.recorder();

        let err = finish_recording(session, Ok(())).unwrap_err();
        assert!(err.contains("still hold"), "got: {err}");
    }

    #[test]
    fn successful_write_passes_command_result_through() {
        let dir = std::env::temp_dir().join("odoscope_finish_recording_test");
        let session = RecordingSession::new(&dir.join("run.cassette.yaml"));

        let err = finish_recording(session, Err("boom".into())).unwrap_err();
        assert_eq!(err, "boom");
        assert!(dir.join("run.cassette.yaml").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
