//! Basic CLI E2E tests.
//!
//! Each test gets its own HOME so the on-disk database and config are
//! isolated from the developer's real data.

use std::path::Path;
use std::process::Command;

fn run_cli_in(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_koru-cli"))
        .env("HOME", home)
        .args(args)
        .output()
        .expect("failed to execute koru-cli");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

#[test]
fn whoami_is_stable_across_invocations() {
    let home = tempfile::tempdir().unwrap();
    let (first, _, code) = run_cli_in(home.path(), &["profile", "whoami"]);
    assert_eq!(code, 0);
    let (second, _, _) = run_cli_in(home.path(), &["profile", "whoami"]);
    assert_eq!(first, second);
    assert!(!first.trim().is_empty());
}

#[test]
fn mood_log_trend_and_streak() {
    let home = tempfile::tempdir().unwrap();

    let (_, _, code) = run_cli_in(home.path(), &["mood", "log", "4"]);
    assert_eq!(code, 0);

    let (trend, _, code) = run_cli_in(home.path(), &["mood", "trend"]);
    assert_eq!(code, 0);
    let points: serde_json::Value = serde_json::from_str(&trend).unwrap();
    assert_eq!(points.as_array().unwrap().len(), 7);
    assert_eq!(points[0]["mood"], 4);

    let (streak, _, code) = run_cli_in(home.path(), &["mood", "streak"]);
    assert_eq!(code, 0);
    assert_eq!(streak.trim(), "1");
}

#[test]
fn mood_log_rejects_out_of_range() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli_in(home.path(), &["mood", "log", "9"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid mood value"));
}

#[test]
fn checkin_cooldown_suppresses_second_prompt() {
    let home = tempfile::tempdir().unwrap();

    let (status, _, _) = run_cli_in(home.path(), &["checkin", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&status).unwrap();
    assert_eq!(parsed["should_prompt"], true);
    assert_eq!(parsed["intake_completed"], false);

    let (_, _, code) = run_cli_in(home.path(), &["checkin", "record", "3"]);
    assert_eq!(code, 0);

    let (status, _, _) = run_cli_in(home.path(), &["checkin", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&status).unwrap();
    assert_eq!(parsed["should_prompt"], false);
}

#[test]
fn habit_add_and_daily_show() {
    let home = tempfile::tempdir().unwrap();

    let (out, _, code) = run_cli_in(home.path(), &["habit", "add", "water", "3"]);
    assert_eq!(code, 0);
    assert!(out.contains("3"));

    let (shown, _, code) = run_cli_in(home.path(), &["habit", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(parsed["water"]["current"].as_f64(), Some(3.0));
    assert_eq!(parsed["water"]["target"].as_f64(), Some(8.0));
}

#[test]
fn plan_today_starts_program() {
    let home = tempfile::tempdir().unwrap();

    let (out, _, code) = run_cli_in(home.path(), &["plan", "today"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["day_number"], 1);
    assert_eq!(parsed["tasks"].as_array().unwrap().len(), 3);

    let task_id = parsed["tasks"][0]["id"].as_str().unwrap().to_string();
    let (out, _, code) = run_cli_in(home.path(), &["plan", "toggle", &task_id]);
    assert_eq!(code, 0);
    assert!(out.contains("1 / 3"));
}

#[test]
fn dashboard_snapshot_shape() {
    let home = tempfile::tempdir().unwrap();

    let (out, _, code) = run_cli_in(home.path(), &["dashboard"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(parsed["greeting"].as_str().unwrap().starts_with("Good"));
    assert_eq!(parsed["mood_trend"].as_array().unwrap().len(), 7);
    assert_eq!(parsed["growth"]["theme"], "Foundation Week");
}

#[test]
fn reset_clears_state() {
    let home = tempfile::tempdir().unwrap();

    run_cli_in(home.path(), &["mood", "log", "5"]);
    let (_, _, code) = run_cli_in(home.path(), &["reset"]);
    assert_eq!(code, 0);

    let (streak, _, _) = run_cli_in(home.path(), &["mood", "streak"]);
    assert_eq!(streak.trim(), "0");
}
