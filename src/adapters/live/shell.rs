//! Live shell executor using `std::process::Command`.

use std::process::Command;

use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Live shell executor that runs commands via `sh -c`.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        tracing::trace!(command, "spawning shell");
        let output = Command::new("sh").arg("-c").arg(command).output()?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_json_stdout() {
        let shell = LiveShellExecutor;
        let result = shell.run(r#"printf '{"runningIn":{"dev":true}}'"#).unwrap();

        assert!(result.success());
        let doc: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
        assert_eq!(doc["runningIn"]["dev"], true);
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn captures_exit_code_and_stderr() {
        let shell = LiveShellExecutor;
        let result = shell.run("echo 'no devfile' >&2; exit 3").unwrap();

        assert_eq!(result.exit_code, 3);
        assert!(!result.success());
        assert_eq!(result.stderr.trim(), "no devfile");
    }
}
