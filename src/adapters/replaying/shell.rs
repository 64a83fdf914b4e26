//! Replaying adapter for the `ShellExecutor` port.

use std::sync::Mutex;

use super::{extract_result, next_interaction};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded shell command results from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "shell", "run")?;
        if interaction.input.get("command").and_then(serde_json::Value::as_str) != Some(command) {
            tracing::warn!(
                recorded = %interaction.input,
                requested = command,
                "replayed shell command differs from recording"
            );
        }
        extract_result(&interaction.output, "shell::run")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            recorder_version: String::new(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    fn run_interaction(command: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({ "command": command }),
            output,
        }
    }

    #[test]
    fn replaying_shell_run() {
        let replayer = make_replayer(vec![run_interaction(
            "odo describe component -o json",
            json!({"ok": {"exit_code": 0, "stdout": "{}", "stderr": ""}}),
        )]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run("odo describe component -o json").unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "{}");
    }

    #[test]
    fn replaying_shell_run_error() {
        let replayer = make_replayer(vec![run_interaction(
            "odo version",
            json!({"err": "sh: odo: not found"}),
        )]);
        let shell = ReplayingShellExecutor::new(replayer);
        let err = shell.run("odo version").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn replaying_past_the_end_fails() {
        let replayer = make_replayer(vec![run_interaction(
            "odo debug info -o json",
            json!({"ok": {"exit_code": 0, "stdout": "{}", "stderr": ""}}),
        )]);
        let shell = ReplayingShellExecutor::new(replayer);
        shell.run("odo debug info -o json").unwrap();
        let err = shell.run("odo debug info -o json").unwrap_err();
        assert!(err.to_string().contains("Cassette exhausted"));
    }
}
