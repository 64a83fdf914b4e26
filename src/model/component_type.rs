//! Registry component types and their starter projects.

use serde::Serialize;

/// A scaffolding template offered by a component type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Starter {
    name: String,
}

impl Starter {
    /// Starts a new builder.
    #[must_use]
    pub fn builder() -> StarterBuilder {
        StarterBuilder::default()
    }

    /// Starter project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Staging area for a [`Starter`].
#[derive(Debug, Default)]
#[must_use]
pub struct StarterBuilder {
    name: Option<String>,
}

impl StarterBuilder {
    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Freezes the staged fields.
    #[must_use]
    pub fn build(self) -> Starter {
        Starter { name: self.name.unwrap_or_default() }
    }
}

/// A devfile component type as listed by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTypeInfo {
    name: String,
    starters: Vec<Starter>,
}

impl ComponentTypeInfo {
    /// Starts a new builder.
    #[must_use]
    pub fn builder() -> ComponentTypeInfoBuilder {
        ComponentTypeInfoBuilder::default()
    }

    /// Component type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starter projects in registry order.
    #[must_use]
    pub fn starters(&self) -> &[Starter] {
        &self.starters
    }
}

/// Staging area for a [`ComponentTypeInfo`].
#[derive(Debug, Default)]
#[must_use]
pub struct ComponentTypeInfoBuilder {
    name: Option<String>,
    starters: Vec<Starter>,
}

impl ComponentTypeInfoBuilder {
    /// Sets the name, replacing any earlier one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a starter project.
    pub fn with_starter(mut self, starter: Starter) -> Self {
        self.starters.push(starter);
        self
    }

    /// Freezes the staged fields.
    #[must_use]
    pub fn build(self) -> ComponentTypeInfo {
        ComponentTypeInfo { name: self.name.unwrap_or_default(), starters: self.starters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_default_to_empty() {
        let info = ComponentTypeInfo::builder().build();
        assert_eq!(info.name(), "");
        assert!(info.starters().is_empty());
        assert_eq!(Starter::builder().build().name(), "");
    }

    #[test]
    fn later_name_replaces_earlier() {
        let info = ComponentTypeInfo::builder()
            .with_name("java-maven")
            .with_starter(Starter::builder().with_name("springboot").build())
            .with_name("java-quarkus")
            .with_starter(Starter::builder().with_name("community").build())
            .build();
        assert_eq!(info.name(), "java-quarkus");
        let names: Vec<&str> = info.starters().iter().map(Starter::name).collect();
        assert_eq!(names, ["springboot", "community"]);
    }
}
