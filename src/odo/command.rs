//! Command lines for the odo documents we decode.

use std::path::Path;

use crate::config::Config;

/// A CLI invocation that prints one JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OdoCommand {
    /// `odo describe component [--name N] -o json`
    DescribeComponent {
        /// Describe a named component instead of the one in the directory.
        name: Option<String>,
    },
    /// `odo debug info -o json`
    DebugInfo,
    /// `odo registry --details --devfile D -o json`
    RegistryDetails {
        /// Devfile (component type) name.
        devfile: String,
    },
    /// `oc get --raw /openapi/v2`
    OpenApi,
}

impl OdoCommand {
    /// Argument vector, program first.
    #[must_use]
    pub fn args(&self, config: &Config) -> Vec<String> {
        match self {
            Self::DescribeComponent { name: None } => {
                program_args(&config.odo, &["describe", "component", "-o", "json"])
            }
            Self::DescribeComponent { name: Some(name) } => program_args(
                &config.odo,
                &["describe", "component", "--name", name.as_str(), "-o", "json"],
            ),
            Self::DebugInfo => program_args(&config.odo, &["debug", "info", "-o", "json"]),
            Self::RegistryDetails { devfile } => program_args(
                &config.odo,
                &["registry", "--details", "--devfile", devfile.as_str(), "-o", "json"],
            ),
            Self::OpenApi => program_args(&config.oc, &["get", "--raw", "/openapi/v2"]),
        }
    }

    /// Shell line, run from `context` when given.
    #[must_use]
    pub fn render(&self, config: &Config, context: Option<&Path>) -> String {
        let line =
            self.args(config).iter().map(String::as_str).map(quote).collect::<Vec<_>>().join(" ");
        match context {
            Some(dir) => format!("cd {} && {line}", quote(&dir.display().to_string())),
            None => line,
        }
    }
}

fn program_args(program: &str, rest: &[&str]) -> Vec<String> {
    std::iter::once(program).chain(rest.iter().copied()).map(String::from).collect()
}

/// Quotes `arg` for `sh` when it contains anything but safe characters.
#[must_use]
pub fn quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_./=:@%+,".contains(&b));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_line() {
        let config = Config::default();
        assert_eq!(
            OdoCommand::DescribeComponent { name: None }.render(&config, None),
            "odo describe component -o json"
        );
        assert_eq!(
            OdoCommand::DescribeComponent { name: Some("backend".into()) }.render(&config, None),
            "odo describe component --name backend -o json"
        );
    }

    #[test]
    fn context_directory_is_quoted() {
        let config = Config::default();
        assert_eq!(
            OdoCommand::DebugInfo.render(&config, Some(Path::new("/work/my app"))),
            "cd '/work/my app' && odo debug info -o json"
        );
    }

    #[test]
    fn openapi_uses_oc() {
        let config = Config { oc: "kubectl".into(), ..Config::default() };
        assert_eq!(OdoCommand::OpenApi.render(&config, None), "kubectl get --raw /openapi/v2");
    }

    #[test]
    fn quote_escapes_single_quotes() {
        assert_eq!(quote("nodejs"), "nodejs");
        assert_eq!(quote(""), "''");
        assert_eq!(quote("it's"), r"'it'\''s'");
        assert_eq!(quote("a;b"), "'a;b'");
    }
}
