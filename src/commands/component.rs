//! `describe`, `info`, `urls`, `state` and `debug` commands.

use std::fmt::Write as _;

use super::Output;
use crate::model::{ComponentInfo, ComponentKind, Url};
use crate::odo::{OdoClient, Source};

/// Execute the `describe` command.
///
/// # Errors
///
/// Returns an error string if the describe document cannot be obtained.
pub fn describe(client: &OdoClient<'_>, source: &Source, out: Output) -> Result<(), String> {
    let description = client.describe_component(source).map_err(|e| e.to_string())?;
    out.emit(&description, || {
        let mut text = render_info(&description.info);
        let _ = writeln!(text, "Running in: {}", description.running);
        text.push_str(&render_urls(&description.urls));
        text.trim_end().to_string()
    })
}

/// Execute the `info` command.
///
/// # Errors
///
/// Returns an error string if the component document cannot be obtained.
pub fn info(
    client: &OdoClient<'_>,
    source: &Source,
    kind: ComponentKind,
    name: Option<&str>,
    out: Output,
) -> Result<(), String> {
    let info = client.component_info(source, kind, name).map_err(|e| e.to_string())?;
    out.emit(&info, || render_info(&info).trim_end().to_string())
}

/// Execute the `urls` command.
///
/// # Errors
///
/// Returns an error string if the describe document cannot be obtained.
pub fn urls(client: &OdoClient<'_>, source: &Source, out: Output) -> Result<(), String> {
    let description = client.describe_component(source).map_err(|e| e.to_string())?;
    out.emit(&description.urls, || render_urls(&description.urls).trim_end().to_string())
}

/// Execute the `state` command.
///
/// # Errors
///
/// Returns an error string if the describe document cannot be obtained.
pub fn state(client: &OdoClient<'_>, source: &Source, out: Output) -> Result<(), String> {
    let description = client.describe_component(source).map_err(|e| e.to_string())?;
    out.emit(&description.running, || format!("Running in: {}", description.running))
}

/// Execute the `debug` command.
///
/// # Errors
///
/// Returns an error string if the debug document cannot be obtained.
pub fn debug(client: &OdoClient<'_>, source: &Source, out: Output) -> Result<(), String> {
    let status = client.debug_status(source).map_err(|e| e.to_string())?;
    out.emit(&status, || format!("Debug: {status}"))
}

fn render_info(info: &ComponentInfo) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Kind: {}", info.kind());
    let _ = writeln!(text, "Type: {}", info.component_type_name().unwrap_or("-"));
    if let Some(language) = info.language() {
        let _ = writeln!(text, "Language: {language}");
    }
    if let Some(features) = info.features() {
        let _ = writeln!(text, "Supported: {features}");
    }
    if !info.env().is_empty() {
        text.push_str("Env:\n");
        for (name, value) in info.env() {
            let _ = writeln!(text, "  {name}={value}");
        }
    }
    text
}

fn render_urls(urls: &[Url]) -> String {
    if urls.is_empty() {
        return "No forwarded ports.\n".to_string();
    }
    let mut text = String::from("Forwarded ports:\n");
    for url in urls {
        let _ = writeln!(text, "  {url}");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_text_lists_env() {
        let info = ComponentInfo::builder()
            .with_component_type_name("nodejs")
            .add_env("PORT", "3000")
            .build();
        let text = render_info(&info);
        assert!(text.contains("Kind: odo"));
        assert!(text.contains("Type: nodejs"));
        assert!(text.contains("  PORT=3000"));
        assert!(!text.contains("Supported"));
    }

    #[test]
    fn urls_text_handles_empty() {
        assert_eq!(render_urls(&[]), "No forwarded ports.\n");
        let text = render_urls(&[Url::of("runtime", "localhost", "8080", "3000")]);
        assert!(text.contains("runtime: http://localhost:8080 -> 3000"));
    }
}
