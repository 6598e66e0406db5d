//! check / edit の入力検証 integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn dem_settings() -> Command {
    let mut cmd = Command::cargo_bin("dem-settings").unwrap();
    cmd.env_remove("DEM_SETTINGS_FILE").env("NO_COLOR", "1");
    cmd
}

#[test]
fn check_reports_initial_selection() {
    dem_settings()
        .args(["check", "-t", "base", "-t", "python", "-t", "node", "-s", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 candidate(s), 1 pre-selected"))
        .stdout(predicate::str::contains("python"));
}

#[test]
fn check_json_drops_unknown_pre_selection() {
    let output = dem_settings()
        .args(["check", "-t", "base", "-s", "ghost", "-s", "base", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["selected"], serde_json::json!(["base"]));
    assert_eq!(value["tool_images"][0]["name"], "base");
}

#[test]
fn check_reads_candidates_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "selected = [\"node\"]\n\n[[tool_images]]\nname = \"base\"\n\n[[tool_images]]\nname = \"node\"\nstatus = \"local\""
    )
    .unwrap();

    dem_settings()
        .arg("check")
        .arg("--from-file")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 candidate(s), 1 pre-selected"));
}

#[test]
fn check_reads_candidates_file_from_env() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"tool_images":[{{"name":"base"}}]}}"#).unwrap();

    dem_settings()
        .env("DEM_SETTINGS_FILE", file.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 candidate(s), 0 pre-selected"));
}

#[test]
fn edit_without_candidates_fails_before_ui() {
    dem_settings()
        .arg("edit")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[VAL001]"))
        .stderr(predicate::str::contains("No tool images to select from"));
}

#[test]
fn edit_with_duplicate_candidates_fails_before_ui() {
    dem_settings()
        .args(["edit", "-t", "base", "-t", "base"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[VAL003]"))
        .stderr(predicate::str::contains("tool image: base"));
}

#[test]
fn edit_json_keeps_stdout_free_of_screen_output() {
    // stderr がパイプなので画面は開けない。stdout には何も漏れないこと
    dem_settings()
        .args(["edit", "-t", "base", "-s", "base", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error[TUI001]"))
        .stderr(predicate::str::contains("stderr is not a terminal"));
}

#[test]
fn unsupported_file_format_is_reported() {
    dem_settings()
        .args(["check", "--from-file", "images.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[CFG002]"));
}

#[test]
fn verbose_shows_remediation() {
    dem_settings()
        .args(["check", "--verbose"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("= remediation:"));
}
