//! Integration tests for the adbar CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture;

/// adbar command isolated from the user's config and terminal.
fn adbar(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("adbar").expect("adbar binary should build");
    cmd.env("ADBAR_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("ADBAR_LOG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("config.toml"), content).unwrap();
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute adbar");
    assert!(output.status.success(), "adbar failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

// ============================================================================
// render
// ============================================================================

#[test]
fn render_prints_marker_geometry() {
    let dir = TempDir::new().unwrap();
    let markers = fixture("markers.json");

    let stdout = stdout_of(adbar(&dir).args(["render", "--duration", "60000"]).arg(&markers));

    insta::assert_snapshot!(stdout, @r"
    duration  1:00 (60000 ms)
    position  0:00
    track     960 px
    start     0 px
    segments  1
      30000..36000 ms -> 480..576 px (96 px)
    ");
}

#[test]
fn render_reads_markers_from_stdin() {
    let dir = TempDir::new().unwrap();
    let markers = fs::read_to_string(fixture("markers.json")).unwrap();

    adbar(&dir)
        .args(["render", "-", "-d", "120000", "-w", "480"])
        .write_stdin(markers)
        .assert()
        .success()
        .stdout(predicate::str::contains("track     480 px"))
        .stdout(predicate::str::contains(
            "30000..36000 ms -> 120..144 px (24 px)",
        ));
}

#[test]
fn render_uses_track_width_from_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[track]\nwidth_px = 100\n");

    adbar(&dir)
        .args(["render", "-d", "60000"])
        .arg(fixture("markers.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("30000..36000 ms -> 50..60 px (10 px)"));
}

#[test]
fn render_draws_terminal_bar() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[bar]\nwidth = 20\ncolor = false\n");

    adbar(&dir)
        .args(["render", "-d", "60000", "--bar"])
        .arg(fixture("markers.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            " ⏺─────────██──────── 0:00/1:00\n",
        ));
}

#[test]
fn render_skips_malformed_markers_with_warning() {
    let dir = TempDir::new().unwrap();

    adbar(&dir)
        .args(["render", "-d", "60000"])
        .arg(fixture("malformed_markers.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("segments  1\n"))
        .stdout(predicate::str::contains("start     none"))
        .stderr(predicate::str::contains("skipping marker"));
}

#[test]
fn render_with_invalid_duration_keeps_markers_pending() {
    let dir = TempDir::new().unwrap();

    adbar(&dir)
        .args(["render", "-d", "0"])
        .arg(fixture("markers.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("duration  unknown"))
        .stdout(predicate::str::contains(
            "pending   2 marker(s) waiting for duration",
        ))
        .stderr(predicate::str::contains("Invalid duration: 0 ms"));
}

#[test]
fn render_json_output() {
    let dir = TempDir::new().unwrap();

    let stdout = stdout_of(
        adbar(&dir)
            .args(["render", "-d", "60000", "-p", "30000", "--json"])
            .arg(fixture("markers.json")),
    );
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["duration_ms"], 60000);
    assert_eq!(json["position_ms"], 30000);
    assert_eq!(json["start_px"], 0);
    assert_eq!(json["segments"][0]["from_px"], 480);
    assert_eq!(json["segments"][0]["width_px"], 96);
    assert_eq!(json["pending_markers"], 0);
}

#[test]
fn render_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    adbar(&dir)
        .args(["render", "-d", "60000", "/nonexistent/markers.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read markers"));
}

// ============================================================================
// replay
// ============================================================================

#[test]
fn replay_prints_final_geometry() {
    let dir = TempDir::new().unwrap();

    let stdout = stdout_of(adbar(&dir).arg("replay").arg(fixture("session.jsonl")));

    insta::assert_snapshot!(stdout, @r"
    source    https://example.com/live/index.m3u8
    duration  1:00 (60000 ms)
    position  0:15
    track     960 px
    start     192 px
    segments  2
      0..12000 ms -> 0..192 px (192 px)
      30000..36000 ms -> 480..576 px (96 px)
    ");
}

#[test]
fn replay_bad_script_fails_with_line_number() {
    let dir = TempDir::new().unwrap();

    adbar(&dir)
        .arg("replay")
        .arg(fixture("bad_script.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

// ============================================================================
// config / completions
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");

    let stdout = stdout_of(adbar(&dir).args(["config", "path"]));

    assert_eq!(Path::new(stdout.trim()), expected);
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();

    adbar(&dir).args(["config", "init"]).assert().success();
    let written = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("width_px = 960"));
    assert!(written.contains("position_threshold_ms = 900"));

    adbar(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    adbar(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_show_prints_effective_values() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[clock]\nposition_threshold_ms = 250\n");

    adbar(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position_threshold_ms = 250"))
        .stdout(predicate::str::contains("width_px = 960"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();

    adbar(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adbar"));
}
