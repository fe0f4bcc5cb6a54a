//! Integration tests for the fitlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Fresh sessions and default exercises
//! - Each command's effect on the state document
//! - Event reporting

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// CLI bound to a data directory, isolated from the user's config
fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitlog"));
    cmd.env("XDG_CONFIG_HOME", data_dir.join("config"))
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn read_state(data_dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(data_dir.join("fitnessApp.json")).expect("Failed to read state");
    serde_json::from_str(&raw).expect("State is not valid JSON")
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("fitlog"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal fitness tracker"));
}

#[test]
fn test_fresh_session_lists_default_exercises() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["exercise", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Exercises:"))
        .stdout(predicate::str::contains("Name: Push-ups"))
        .stdout(predicate::str::contains("Name: Running"));

    // Read-only commands never create the state file
    assert!(!temp_dir.path().join("fitnessApp.json").exists());
}

#[test]
fn test_add_exercise_persists() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["exercise", "add", "Squat", "Bend the knees."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise added successfully."))
        .stdout(predicate::str::contains("Data saved to"));

    let state = read_state(temp_dir.path());
    let exercises = state["exerciseDatabase"].as_array().unwrap();
    assert_eq!(exercises.len(), 3);
    assert_eq!(exercises[2]["name"], "Squat");
    assert_eq!(exercises[2]["instructions"], "Bend the knees.");
}

#[test]
fn test_duplicate_exercise_rejected_ignoring_case() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["exercise", "add", "Squat", "First."])
        .assert()
        .success();

    cli(temp_dir.path())
        .args(["exercise", "add", "SQUAT", "Second."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise already exists."))
        .stdout(predicate::str::contains("Data saved").not());

    let state = read_state(temp_dir.path());
    let squats: Vec<_> = state["exerciseDatabase"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["name"].as_str().unwrap().eq_ignore_ascii_case("squat"))
        .collect();
    assert_eq!(squats.len(), 1);
    assert_eq!(squats[0]["instructions"], "First.");
}

#[test]
fn test_workout_add_list_remove() {
    let temp_dir = setup_test_dir();

    for (kind, minutes) in [("Running", "30"), ("Cycling", "45"), ("Running", "30")] {
        cli(temp_dir.path())
            .args(["workout", "add", kind, minutes, "Medium"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Workout added successfully."));
    }

    cli(temp_dir.path())
        .args(["workout", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Exercise Type: Cycling, Duration: 45 minutes, Intensity: Medium",
        ));

    cli(temp_dir.path())
        .args(["workout", "remove", "Running", "30", "Medium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout removed."));

    let state = read_state(temp_dir.path());
    let workouts = state["workoutList"].as_array().unwrap();
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0]["exerciseType"], "Cycling");
    assert_eq!(workouts[1]["exerciseType"], "Running");
    assert!(workouts[1]["duration"].is_u64());
}

#[test]
fn test_remove_missing_workout() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["workout", "remove", "Swim", "10", "Low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching workout found."));

    assert!(!temp_dir.path().join("fitnessApp.json").exists());
}

#[test]
fn test_empty_workout_list() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["workout", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts logged yet."));
}

#[test]
fn test_goal_set_and_show() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["goal", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No fitness goal set."));

    cli(temp_dir.path())
        .args(["goal", "set", "Lose Weight", "Lose 5 kg in 2 months"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitness goal set successfully."));

    cli(temp_dir.path())
        .args(["goal", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fitness Goal: Lose Weight - Lose 5 kg in 2 months",
        ));

    let state = read_state(temp_dir.path());
    assert_eq!(state["goals"]["goalType"], "Lose Weight");
    assert_eq!(state["goals"]["description"], "Lose 5 kg in 2 months");
}

#[test]
fn test_weight_log_and_list() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["weight", "log", "75", "--date", "2023-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight logged successfully."));

    cli(temp_dir.path())
        .args(["weight", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No fitness goal set."))
        .stdout(predicate::str::contains("Date: 2023-01-01, Weight: 75"));

    let state = read_state(temp_dir.path());
    assert_eq!(state["weightTracker"][0]["date"], "2023-01-01");
    assert_eq!(state["weightTracker"][0]["weight"].as_f64(), Some(75.0));
}

#[test]
fn test_weight_log_defaults_to_today() {
    let temp_dir = setup_test_dir();
    let before = chrono::Local::now().format("%Y-%m-%d").to_string();

    cli(temp_dir.path())
        .args(["weight", "log", "80.5"])
        .assert()
        .success();

    let after = chrono::Local::now().format("%Y-%m-%d").to_string();
    let state = read_state(temp_dir.path());
    let date = state["weightTracker"][0]["date"].as_str().unwrap();
    // A run may straddle midnight
    assert!(date == before || date == after, "unexpected date {date}");
}

#[test]
fn test_show_events() {
    let temp_dir = setup_test_dir();

    // Fresh session: seeding the catalog notifies too
    cli(temp_dir.path())
        .args(["workout", "add", "Rowing", "20", "High", "--show-events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event Log:"))
        .stdout(predicate::str::contains("Exercise added."))
        .stdout(predicate::str::contains("Workout added."));

    // Existing file: no seeding, goal type alone is silent but description notifies
    cli(temp_dir.path())
        .args(["goal", "set", "Strength", "Deadlift 2x bodyweight", "--show-events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal set successfully."))
        .stdout(predicate::str::contains("Exercise added.").not());
}

#[test]
fn test_custom_state_file_name() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["--state-file", "other.json", "goal", "set", "Bulk", "Eat more"])
        .assert()
        .success();

    assert!(temp_dir.path().join("other.json").exists());
    assert!(!temp_dir.path().join("fitnessApp.json").exists());
}

#[test]
fn test_config_disables_seeding() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("config").join("fitlog");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[catalog]\nseed_defaults = false\n",
    )
    .unwrap();

    cli(temp_dir.path())
        .args(["exercise", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises in database."));
}

#[test]
fn test_state_persistence_across_runs() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["exercise", "add", "Plank", "Hold for 60 seconds."])
        .assert()
        .success();
    cli(temp_dir.path())
        .args(["workout", "add", "Plank", "5", "Low"])
        .assert()
        .success();
    cli(temp_dir.path())
        .args(["weight", "log", "70", "--date", "2024-02-01"])
        .assert()
        .success();

    let state = read_state(temp_dir.path());
    assert_eq!(state["exerciseDatabase"].as_array().unwrap().len(), 3);
    assert_eq!(state["workoutList"].as_array().unwrap().len(), 1);
    assert_eq!(state["weightTracker"].as_array().unwrap().len(), 1);
    assert_eq!(state["goals"]["goalType"], "");
}
