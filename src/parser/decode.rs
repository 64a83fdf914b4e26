//! Field decoding for `odo describe`, `odo debug` and `odo registry` output.
//!
//! All functions here are total: missing keys at any depth produce
//! defaults, never errors.

use serde_json::Value;

use super::fields::{
    CONTAINER_NAME, CONTAINER_PORT, DEBUG_PROCESS_ID, DEVFILE, DEVFILE_DATA, DEV_FORWARDED_PORTS,
    ENV, LANGUAGE, LOCAL_ADDRESS, LOCAL_PORT, METADATA, NAME, PROJECT_TYPE, RUNNING_IN, SPEC,
    STARTER_PROJECTS, SUPPORTED_ODO_FEATURES, VALUE,
};
use crate::json::{elements, field, flag, nested_path, optional_field, text};
use crate::model::{
    ComponentDescription, ComponentFeature, ComponentFeatures, ComponentInfo, ComponentKind,
    ComponentTypeInfo, DebugStatus, Starter, Url, DEFAULT_HOST, DEFAULT_PORT,
};

/// Decodes `devForwardedPorts`.
///
/// Items without `containerName` are skipped: odo reports forwards
/// created from the web console without one. Source order is kept.
#[must_use]
pub fn parse_forwarded_urls(root: &Value) -> Vec<Url> {
    let Some(ports) = optional_field(root, DEV_FORWARDED_PORTS) else {
        return Vec::new();
    };
    elements(ports)
        .filter_map(|item| {
            let name = optional_field(item, CONTAINER_NAME)?;
            Some(Url::of(
                text(name),
                text_or(item, LOCAL_ADDRESS, DEFAULT_HOST),
                text_or(item, LOCAL_PORT, DEFAULT_PORT),
                text_or(item, CONTAINER_PORT, DEFAULT_PORT),
            ))
        })
        .collect()
}

fn text_or(node: &Value, name: &str, default: &str) -> String {
    optional_field(node, name).map_or_else(|| default.to_string(), text)
}

/// Decodes a component document with top-level `projectType` and
/// `spec.env`.
///
/// Env entries missing either `name` or `value` are skipped.
#[must_use]
pub fn parse_component_info(root: &Value, kind: ComponentKind) -> ComponentInfo {
    let mut builder = ComponentInfo::builder().with_component_kind(kind);
    if let Some(project_type) = optional_field(root, PROJECT_TYPE) {
        builder = builder.with_component_type_name(text(project_type));
    }
    if let Some(env) = nested_path(root, &[SPEC, ENV]) {
        for entry in elements(env) {
            if let (Some(name), Some(value)) =
                (optional_field(entry, NAME), optional_field(entry, VALUE))
            {
                builder = builder.add_env(text(name), text(value));
            }
        }
    }
    builder.build()
}

/// Decodes `odo describe component` output, where metadata lives under
/// `devfileData.devfile.metadata`.
///
/// The supported feature set is always attached, empty when the
/// document does not report one.
#[must_use]
pub fn parse_describe_component_info(root: &Value, kind: ComponentKind) -> ComponentInfo {
    let mut builder = ComponentInfo::builder().with_component_kind(kind);
    if let Some(metadata) = nested_path(root, &[DEVFILE_DATA, DEVFILE, METADATA]) {
        if let Some(project_type) = optional_field(metadata, PROJECT_TYPE) {
            builder = builder.with_component_type_name(text(project_type));
        }
        if let Some(language) = optional_field(metadata, LANGUAGE) {
            builder = builder.with_language(text(language));
        }
    }
    let features = nested_path(root, &[DEVFILE_DATA, SUPPORTED_ODO_FEATURES])
        .map(parse_features)
        .unwrap_or_default();
    builder.with_features(features).build()
}

/// Decodes the features the component is currently running under
/// (`runningIn`).
#[must_use]
pub fn parse_component_state(root: &Value) -> ComponentFeatures {
    optional_field(root, RUNNING_IN).map(parse_features).unwrap_or_default()
}

/// Decodes a features node such as `{"dev": true, "debug": false}`.
///
/// A feature is present only when its lower-cased key exists and is
/// truthy. Shared by supported-feature and running-feature decoding.
#[must_use]
pub fn parse_features(node: &Value) -> ComponentFeatures {
    ComponentFeature::ALL.into_iter().filter(|feature| flag(node, &feature.key())).collect()
}

/// [`DebugStatus::Running`] iff `spec.debugProcessID` is a non-empty
/// run of ASCII digits.
#[must_use]
pub fn parse_debug_status(root: &Value) -> DebugStatus {
    match nested_path(root, &[SPEC, DEBUG_PROCESS_ID]).map(text) {
        Some(pid) if !pid.is_empty() && pid.bytes().all(|b| b.is_ascii_digit()) => {
            DebugStatus::Running
        }
        _ => DebugStatus::Unknown,
    }
}

/// Decodes `odo registry --details` output.
///
/// Every element carrying `name` overwrites the type name, so the last
/// one wins. Starters from all elements are appended in order.
#[must_use]
pub fn parse_component_type_info(root: &Value) -> ComponentTypeInfo {
    let mut builder = ComponentTypeInfo::builder();
    for element in elements(root) {
        if let Some(name) = optional_field(element, NAME) {
            builder = builder.with_name(text(name));
        }
        if let Some(starters) = optional_field(element, STARTER_PROJECTS) {
            for starter in elements(starters) {
                builder = builder.with_starter(parse_starter(starter));
            }
        }
    }
    builder.build()
}

/// Decodes one starter project entry, given either as a bare name or as
/// an object with a `name` field.
#[must_use]
pub fn parse_starter(node: &Value) -> Starter {
    let name = if node.is_object() { field(node, NAME) } else { text(node) };
    Starter::builder().with_name(name).build()
}

/// Decodes all three views of a single `odo describe component` document.
#[must_use]
pub fn parse_component_description(root: &Value, kind: ComponentKind) -> ComponentDescription {
    ComponentDescription {
        info: parse_describe_component_info(root, kind),
        urls: parse_forwarded_urls(root),
        running: parse_component_state(root),
    }
}
