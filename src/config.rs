//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file in the working directory.

use std::path::PathBuf;

/// Default odo executable.
pub const DEFAULT_ODO: &str = "odo";
/// Default oc executable.
pub const DEFAULT_OC: &str = "oc";

const ODO_VAR: &str = "ODOSCOPE_ODO";
const OC_VAR: &str = "ODOSCOPE_OC";
const RECORD_VAR: &str = "ODOSCOPE_RECORD";
const REPLAY_VAR: &str = "ODOSCOPE_REPLAY";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// odo executable name or path.
    pub odo: String,
    /// oc executable name or path, used to fetch OpenAPI documents.
    pub oc: String,
    /// Cassette to record port interactions into.
    pub record: Option<PathBuf>,
    /// Cassette to replay port interactions from.
    pub replay: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self { odo: DEFAULT_ODO.to_string(), oc: DEFAULT_OC.to_string(), record: None, replay: None }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if recording and replaying are both requested.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if recording and replaying are both requested.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let config = Self {
            odo: get(ODO_VAR).unwrap_or_else(|| DEFAULT_ODO.to_string()),
            oc: get(OC_VAR).unwrap_or_else(|| DEFAULT_OC.to_string()),
            record: get(RECORD_VAR).map(PathBuf::from),
            replay: get(REPLAY_VAR).map(PathBuf::from),
        };
        if config.record.is_some() && config.replay.is_some() {
            return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot be set at the same time"));
        }
        Ok(config)
    }

    /// Overrides the odo executable when `odo` is given.
    #[must_use]
    pub fn with_odo(mut self, odo: Option<&str>) -> Self {
        if let Some(odo) = odo {
            self.odo = odo.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("ODOSCOPE_ODO", "/opt/odo/bin/odo"),
            ("ODOSCOPE_OC", "kubectl"),
            ("ODOSCOPE_REPLAY", "session.cassette.yaml"),
        ]))
        .unwrap();
        assert_eq!(config.odo, "/opt/odo/bin/odo");
        assert_eq!(config.oc, "kubectl");
        assert_eq!(config.replay, Some(PathBuf::from("session.cassette.yaml")));
        assert_eq!(config.record, None);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[("ODOSCOPE_ODO", "  ")])).unwrap();
        assert_eq!(config.odo, DEFAULT_ODO);
    }

    #[test]
    fn record_and_replay_conflict() {
        let err = Config::from_lookup(lookup(&[
            ("ODOSCOPE_RECORD", "a.yaml"),
            ("ODOSCOPE_REPLAY", "b.yaml"),
        ]))
        .unwrap_err();
        assert!(err.contains("cannot be set at the same time"));
    }

    #[test]
    fn cli_override_wins() {
        let config = Config::default().with_odo(Some("./odo"));
        assert_eq!(config.odo, "./odo");
        assert_eq!(Config::default().with_odo(None).odo, DEFAULT_ODO);
    }
}
