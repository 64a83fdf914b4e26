//! Component information decoded from `odo describe`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::feature::ComponentFeatures;

/// Which odo view produced a component document.
///
/// Only tags the result; the decoder reads the same fields either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Component driven locally through the odo CLI.
    #[default]
    Odo,
    /// Component as described by the cluster.
    Cluster,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Odo => f.write_str("odo"),
            Self::Cluster => f.write_str("cluster"),
        }
    }
}

/// Immutable description of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    kind: ComponentKind,
    component_type_name: Option<String>,
    language: Option<String>,
    env: BTreeMap<String, String>,
    features: Option<ComponentFeatures>,
}

impl ComponentInfo {
    /// Starts a new builder.
    #[must_use]
    pub fn builder() -> ComponentInfoBuilder {
        ComponentInfoBuilder::default()
    }

    /// Kind tag supplied by the caller.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Devfile project type, if reported.
    #[must_use]
    pub fn component_type_name(&self) -> Option<&str> {
        self.component_type_name.as_deref()
    }

    /// Devfile language, if reported.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Environment variables keyed by name.
    #[must_use]
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Supported features, when the source document carries them.
    #[must_use]
    pub fn features(&self) -> Option<&ComponentFeatures> {
        self.features.as_ref()
    }
}

/// Staging area for a [`ComponentInfo`]. Consumed by [`build`](Self::build).
#[derive(Debug, Default)]
#[must_use]
pub struct ComponentInfoBuilder {
    kind: Option<ComponentKind>,
    component_type_name: Option<String>,
    language: Option<String>,
    env: BTreeMap<String, String>,
    features: Option<ComponentFeatures>,
}

impl ComponentInfoBuilder {
    /// Sets the kind tag.
    pub fn with_component_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the project type name.
    pub fn with_component_type_name(mut self, name: impl Into<String>) -> Self {
        self.component_type_name = Some(name.into());
        self
    }

    /// Sets the language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Adds an environment variable; a repeated name replaces the earlier value.
    pub fn add_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Sets the supported feature set.
    pub fn with_features(mut self, features: ComponentFeatures) -> Self {
        self.features = Some(features);
        self
    }

    /// Freezes the staged fields.
    #[must_use]
    pub fn build(self) -> ComponentInfo {
        ComponentInfo {
            kind: self.kind.unwrap_or_default(),
            component_type_name: self.component_type_name,
            language: self.language,
            env: self.env,
            features: self.features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentFeature;

    #[test]
    fn empty_builder_yields_defaults() {
        let info = ComponentInfo::builder().build();
        assert_eq!(info.kind(), ComponentKind::Odo);
        assert_eq!(info.component_type_name(), None);
        assert_eq!(info.language(), None);
        assert!(info.env().is_empty());
        assert!(info.features().is_none());
    }

    #[test]
    fn builder_accumulates_fields() {
        let features: ComponentFeatures = [ComponentFeature::Dev].into_iter().collect();
        let info = ComponentInfo::builder()
            .with_component_kind(ComponentKind::Cluster)
            .with_component_type_name("nodejs")
            .with_language("javascript")
            .add_env("PORT", "3000")
            .add_env("DEBUG_PORT", "5858")
            .add_env("PORT", "8080")
            .with_features(features.clone())
            .build();

        assert_eq!(info.kind(), ComponentKind::Cluster);
        assert_eq!(info.component_type_name(), Some("nodejs"));
        assert_eq!(info.language(), Some("javascript"));
        assert_eq!(info.env().len(), 2);
        assert_eq!(info.env()["PORT"], "8080");
        assert_eq!(info.features(), Some(&features));
    }
}
