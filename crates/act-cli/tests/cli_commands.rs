//! Integration tests: drive the `act` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const PAYLOAD: &str = r#"{"seed_intent":"Ship v1","items":[{"id":"a","titre":"A"},{"titre":"no id"},{"id":"b","titre":"B"}]}"#;

fn act(dir: &tempfile::TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_act"))
        .args(args)
        .current_dir(dir.path())
        .env("HOME", dir.path().join("home"))
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("ACT_LOG")
        .env_remove("ACT_GENERAL__KEEP_BY_DEFAULT")
        .env_remove("ACT_GENERAL__EXPORT_PATH")
        .env_remove("ACT_PROMPT__TEMPLATE_PATH")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn act");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes()).expect("write stdin");
        }
    }
    child.wait_with_output().expect("run act")
}

fn workspace_with_payload() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("payload.json"), PAYLOAD).expect("write payload");
    dir
}

#[test]
fn filter_writes_the_kept_items() {
    let dir = workspace_with_payload();
    let out = act(
        &dir,
        &["filter", "payload.json", "--delete", "a", "-o", "kept.json"],
        None,
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written = std::fs::read_to_string(dir.path().join("kept.json")).expect("export exists");
    let value: serde_json::Value = serde_json::from_str(&written).expect("export is json");
    assert_eq!(
        value,
        serde_json::json!({"seed_intent": "Ship v1", "items": [{"id": "b", "titre": "B"}]})
    );
}

#[test]
fn filter_reads_stdin_and_prints_raw() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = act(&dir, &["--format", "raw", "filter", "-", "--drop", "b"], Some(PAYLOAD));
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.trim(),
        r#"{"seed_intent":"Ship v1","items":[{"id":"a","titre":"A"}]}"#
    );
}

#[test]
fn show_rejects_invalid_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = act(&dir, &["show", "-"], Some("not json"));
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("act error: Invalid JSON"), "{stderr}");
}

#[test]
fn show_json_reports_kept_flags() {
    let dir = workspace_with_payload();
    let out = act(&dir, &["--format", "json", "show", "payload.json"], None);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(value["stats"]["total"], 2);
    assert_eq!(value["items"][1]["kept"], true);
    assert_eq!(value["items"][1]["item"]["id"], "b");
}

#[test]
fn project_config_switches_to_opt_in() {
    let dir = workspace_with_payload();
    std::fs::create_dir(dir.path().join(".act")).expect("config dir");
    std::fs::write(
        dir.path().join(".act/config.toml"),
        "[general]\nkeep_by_default = false\n",
    )
    .expect("write config");

    let out = act(&dir, &["--format", "raw", "filter", "payload.json", "--keep", "b"], None);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(value["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["items"][0]["id"], "b");
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_comes_from_the_config_home() {
    let dir = workspace_with_payload();
    let user_dir = dir.path().join("xdg/act");
    std::fs::create_dir_all(&user_dir).expect("user config dir");
    std::fs::write(
        user_dir.join("config.toml"),
        "[general]\nkeep_by_default = false\n",
    )
    .expect("write user config");

    let out = act(&dir, &["--format", "raw", "filter", "payload.json"], None);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(value["items"], serde_json::json!([]));
}

#[test]
fn review_script_runs_to_completion() {
    let dir = workspace_with_payload();
    let out = act(
        &dir,
        &["--quiet", "review", "payload.json"],
        Some("drop a\nexport out.json\nquit\n"),
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("dropped a (1 of 2 kept)"));

    let written = std::fs::read_to_string(dir.path().join("out.json")).expect("export exists");
    assert!(written.contains("\"id\": \"b\""));
    assert!(!written.contains("\"id\": \"a\""));
}

#[test]
fn prompt_ends_with_the_intent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = act(&dir, &["prompt", "Lancer", "mon", "SaaS"], None);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.trim_end().ends_with("Lancer mon SaaS"));
}

#[test]
fn schema_prints_input_schema() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = act(&dir, &["--format", "json", "schema", "input"], None);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert!(value["properties"]["items"].is_object());
}
