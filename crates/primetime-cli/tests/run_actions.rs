use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn run_json(home: &std::path::Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("primetime")
        .env("PRIMETIME_HOME", home)
        .arg("run")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_run_counter_and_prime_modal() {
    let dir = tempdir().unwrap();

    let state = run_json(dir.path(), &["incr", "incr", "incr", "save"]);
    assert_eq!(state["count"], 3);
    assert_eq!(state["favorite_primes"], serde_json::json!([3]));

    let state = run_json(dir.path(), &["incr", "incr", "incr", "save", "remove"]);
    assert_eq!(state["favorite_primes"], serde_json::json!([]));
    assert_eq!(state["activity_feed"], serde_json::json!([]));
}

#[test]
fn test_run_uses_initial_state_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[initial_state]\ncount = 7\nfavorite_primes = [2, 3, 5, 7]\n",
    )
    .unwrap();

    let state = run_json(dir.path(), &["delete:1,3", "delete:42"]);
    assert_eq!(state["count"], 7);
    assert_eq!(state["favorite_primes"], serde_json::json!([2, 5]));
}

#[test]
fn test_run_records_activity_when_enabled() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "record_activity = true\n").unwrap();

    let state = run_json(dir.path(), &["incr", "incr", "save"]);
    assert_eq!(state["activity_feed"][0]["kind"]["type"], "added_favorite_prime");
    assert_eq!(state["activity_feed"][0]["kind"]["prime"], 2);
}

#[test]
fn test_run_reads_script_file() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("actions.txt");
    fs::write(&script, "# two up, one down\nincr incr\ndecr\n").unwrap();

    let state = run_json(
        dir.path(),
        &["incr", "--script", script.to_str().unwrap(), "--compact"],
    );
    assert_eq!(state["count"], 2);
}

#[test]
fn test_run_trace_prints_each_state() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("primetime")
        .env("PRIMETIME_HOME", dir.path())
        .args(["run", "--trace", "--compact", "incr", "incr"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let counts: Vec<i64> = stdout
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["count"].as_i64().unwrap())
        .collect();
    // Two trace lines, then the final state.
    assert_eq!(counts, vec![1, 2, 2]);
}

#[test]
fn test_run_rejects_unknown_action() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("primetime")
        .env("PRIMETIME_HOME", dir.path())
        .args(["run", "--trace", "incr", "jump"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown action 'jump'"));
}

#[test]
fn test_run_reports_bad_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "log_actions = \"yes\"\n").unwrap();

    cargo_bin_cmd!("primetime")
        .env("PRIMETIME_HOME", dir.path())
        .args(["run", "incr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
