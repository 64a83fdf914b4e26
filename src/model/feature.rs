//! Component features and feature sets.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// A capability a component either supports or is currently running under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentFeature {
    /// Inner-loop development session (`odo dev`).
    Dev,
    /// Development session with a debugger attached.
    Debug,
    /// Outer-loop deployment (`odo deploy`).
    Deploy,
}

impl ComponentFeature {
    /// Every feature, in declaration order.
    pub const ALL: [Self; 3] = [Self::Dev, Self::Debug, Self::Deploy];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dev => "Dev",
            Self::Debug => "Debug",
            Self::Deploy => "Deploy",
        }
    }

    /// Key under which odo reports this feature (the lower-cased label).
    #[must_use]
    pub fn key(self) -> String {
        self.label().to_lowercase()
    }
}

impl fmt::Display for ComponentFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of [`ComponentFeature`]s.
///
/// Used both for the features a devfile supports and for the features a
/// component is currently running under; the meaning depends on where
/// the caller stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComponentFeatures {
    features: BTreeSet<ComponentFeature>,
}

impl ComponentFeatures {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature. Adding twice is a no-op.
    pub fn add_feature(&mut self, feature: ComponentFeature) {
        self.features.insert(feature);
    }

    /// Returns `true` if `feature` is in the set.
    #[must_use]
    pub fn is_enabled(&self, feature: ComponentFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Returns `true` if no feature is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates features in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentFeature> + '_ {
        self.features.iter().copied()
    }
}

impl FromIterator<ComponentFeature> for ComponentFeatures {
    fn from_iter<I: IntoIterator<Item = ComponentFeature>>(iter: I) -> Self {
        Self { features: iter.into_iter().collect() }
    }
}

impl fmt::Display for ComponentFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let labels: Vec<&str> = self.iter().map(ComponentFeature::label).collect();
        f.write_str(&labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased_labels() {
        assert_eq!(ComponentFeature::Dev.key(), "dev");
        assert_eq!(ComponentFeature::Debug.key(), "debug");
        assert_eq!(ComponentFeature::Deploy.key(), "deploy");
    }

    #[test]
    fn add_is_idempotent() {
        let mut features = ComponentFeatures::new();
        features.add_feature(ComponentFeature::Deploy);
        features.add_feature(ComponentFeature::Deploy);
        assert!(features.is_enabled(ComponentFeature::Deploy));
        assert!(!features.is_enabled(ComponentFeature::Dev));
        assert_eq!(features.iter().count(), 1);
    }

    #[test]
    fn display_lists_in_declaration_order() {
        let features: ComponentFeatures =
            [ComponentFeature::Deploy, ComponentFeature::Dev].into_iter().collect();
        assert_eq!(features.to_string(), "Dev, Deploy");
        assert_eq!(ComponentFeatures::new().to_string(), "none");
    }

    #[test]
    fn serializes_as_lowercase_list() {
        let features: ComponentFeatures = [ComponentFeature::Debug].into_iter().collect();
        assert_eq!(serde_json::to_value(&features).unwrap(), serde_json::json!(["debug"]));
    }
}
