// tests/integration_test.rs
use sem_ver::config::USER_CONFIG_FILE;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

const EMPTY_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/empty.toml");
const JSON_OUTPUT: &str = "[output]\nformat = \"json\"\n";

/// The binary with an explicit config, so no config file of the user or of
/// the working directory is picked up
fn command_with_config(config: &str, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sem-ver"));
    command
        .arg("--config")
        .arg(config)
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("RUST_LOG");
    command
}

fn sem_ver(args: &[&str]) -> Output {
    command_with_config(EMPTY_CONFIG, args)
        .output()
        .expect("Failed to execute command")
}

fn sem_ver_with_config(config: &str, args: &[&str]) -> Output {
    command_with_config(config, args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_sem_ver_help() {
    let output = sem_ver(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("sem-ver"));
    assert!(out.contains("bump"));
    assert!(out.contains("compare"));
}

#[test]
fn test_sem_ver_version() {
    let output = sem_ver(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bump_text_output() {
    let output = sem_ver(&["bump", "v1.2.5", "minor"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "v1.2.5 -> 1.3.0 (dry run)");
}

#[test]
fn test_bump_json_output() {
    let output = sem_ver(&[
        "--json",
        "bump",
        "1.2.3-alpha.1+build.5",
        "patch",
        "--keep-prerelease",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let expected = serde_json::json!({
        "old": "1.2.3-alpha.1+build.5",
        "new": "1.2.4-alpha.1+build.5",
        "dryRun": true
    });
    assert_eq!(value, expected);
}

#[test]
fn test_bump_no_dry_run_warns() {
    let output = sem_ver(&["bump", "1.2.5", "major", "--no-dry-run"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "1.2.5 -> 2.0.0");
    assert!(stderr(&output).contains("nothing is written"));
}

#[test]
fn test_bump_invalid_version_fails() {
    let output = sem_ver(&["bump", "1.02.3", "patch"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'1.02.3' is not a valid SemVer 2.0.0 string"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_bump_unknown_part_rejected_by_cli() {
    let output = sem_ver(&["bump", "1.2.3", "build"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown bump part"));
}

#[test]
fn test_compare_text_output() {
    let output = sem_ver(&["compare", "1.0.0-alpha", "lt", "1.0.0"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "1.0.0-alpha lt 1.0.0: true");
}

#[test]
fn test_compare_no_v_prefix() {
    let output = sem_ver(&["compare", "v1.2.5", "eq", "1.2.5", "--no-v-prefix"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("v1.2.5"));
}

#[test]
fn test_call_tool_outputs_json() {
    let output = sem_ver(&[
        "call",
        "compare_versions",
        r#"{"left": "v1.2.5", "right": "1.2.5", "op": "eq"}"#,
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["result"], serde_json::json!(true));
    assert_eq!(value["op"], serde_json::json!("eq"));
}

#[test]
fn test_call_tool_schema_error() {
    let output = sem_ver(&[
        "call",
        "bump_version",
        r#"{"version": "1.2.5", "part": "patch", "extra": 1}"#,
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Request validation failed"));
}

#[test]
fn test_config_file_sets_defaults() {
    let config = "tests/fixtures/config_with_defaults.toml";
    let output = sem_ver_with_config(config, &["bump", "1.2.3-rc.1", "patch"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"old": "1.2.3-rc.1", "new": "1.2.4-rc.1", "dryRun": false})
    );
}

#[test]
fn test_explicit_config_shadows_user_config() {
    let home = tempdir().unwrap();
    fs::write(home.path().join(USER_CONFIG_FILE), JSON_OUTPUT).unwrap();

    let output = command_with_config(EMPTY_CONFIG, &["bump", "1.2.5", "patch"])
        .env("XDG_CONFIG_HOME", home.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "1.2.5 -> 1.2.6 (dry run)");
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_applies_without_explicit_config() {
    let home = tempdir().unwrap();
    let cwd = tempdir().unwrap();
    fs::write(home.path().join(USER_CONFIG_FILE), JSON_OUTPUT).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_sem-ver"))
        .args(["bump", "1.2.5", "patch"])
        .current_dir(cwd.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["new"], serde_json::json!("1.2.6"));
}
