//! Integration tests for top-level CLI behavior.

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

fn run_odoscope(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_odoscope");
    Command::new(bin)
        .args(args)
        .env_remove("ODOSCOPE_RECORD")
        .env_remove("ODOSCOPE_REPLAY")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run odoscope binary")
}

#[test]
fn describe_prints_component_summary() {
    let output = run_odoscope(&["describe", "--input", &fixture("describe.json")]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Type: Node.js"));
    assert!(stdout.contains("Language: JavaScript"));
    assert!(stdout.contains("Supported: Dev, Debug"));
    assert!(stdout.contains("Running in: Dev"));
    assert!(stdout.contains("runtime: http://127.0.0.1:20001 -> 3000"));
    assert!(!stdout.contains("5858"));
}

#[test]
fn urls_as_json() {
    let output = run_odoscope(&["--json", "urls", "--input", &fixture("describe.json")]);
    assert!(output.status.success());
    let urls: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        urls,
        serde_json::json!([{
            "name": "runtime",
            "host": "127.0.0.1",
            "local_port": "20001",
            "container_port": "3000"
        }])
    );
}

#[test]
fn state_as_json_lists_running_features() {
    let output = run_odoscope(&["state", "--json", "--input", &fixture("describe.json")]);
    assert!(output.status.success());
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state, serde_json::json!(["dev"]));
}

#[test]
fn info_reads_env_and_kind() {
    let output = run_odoscope(&[
        "info",
        "--kind",
        "cluster",
        "--input",
        &fixture("component.json"),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Kind: cluster"));
    assert!(stdout.contains("Type: java-springboot"));
    assert!(stdout.contains("  DEBUG_PORT=5858"));
    assert!(stdout.contains("  JAVA_OPTS=-Xmx512m"));
    assert!(!stdout.contains("ORPHAN"));
}

#[test]
fn debug_reports_running_session() {
    let output = run_odoscope(&["debug", "--input", &fixture("debug.json")]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Debug: running");

    let output = run_odoscope(&["--json", "debug", "--input", &fixture("debug.json")]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "\"RUNNING\"");
}

#[test]
fn registry_lists_starters() {
    let output =
        run_odoscope(&["registry", "nodejs", "--input", &fixture("registry.json")]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Component type: nodejs"));
    assert!(stdout.contains("  nodejs-starter"));
    assert!(stdout.contains("  nodejs-express"));
}

#[test]
fn schema_is_fully_dereferenced() {
    let output = run_odoscope(&[
        "schema",
        "/apis/example.com/v1/namespaces/{namespace}/widgets",
        "--input",
        &fixture("openapi.json"),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["properties"]["metadata"]["properties"]["name"]["type"], "string");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("$ref"));
}

#[test]
fn schema_without_paths_fails() {
    let output = run_odoscope(&["schema", "/apis/x", "--input", &fixture("describe.json")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Invalid data, no 'paths' field"));
}

#[test]
fn malformed_input_is_reported() {
    let output = run_odoscope(&["debug", "--input", &fixture("../cli.rs")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("is not valid JSON"), "stderr: {stderr}");
}

#[test]
fn context_and_input_conflict() {
    let output = run_odoscope(&["urls", "--context", ".", "--input", &fixture("describe.json")]);
    assert!(!output.status.success());
}

#[test]
fn unknown_subcommand_shows_error() {
    let output = run_odoscope(&["deploy"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unrecognized subcommand"));
}

#[test]
fn help_lists_commands() {
    let output = run_odoscope(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for command in ["describe", "info", "urls", "state", "debug", "registry", "schema"] {
        assert!(stdout.contains(command), "missing {command}");
    }
}
