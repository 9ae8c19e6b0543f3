// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
// ABOUTME: Integration tests for the nutriplan-cli binary
// ABOUTME: Tests command structure, JSON output and argument validation

//! Integration tests for the nutriplan-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

const PROFILE: &[&str] = &[
    "--age",
    "30",
    "--gender",
    "male",
    "--height-cm",
    "180",
    "--weight-kg",
    "80",
    "--activity",
    "moderately_active",
    "--goal",
    "weight_loss",
];

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_nutriplan-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn with_profile<'a>(command: &[&'a str]) -> Vec<&'a str> {
    command.iter().chain(PROFILE).copied().collect()
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["targets", "plan", "swaps", "groceries"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_targets_json() {
    let (exit_code, stdout, stderr) = run_cli(&with_profile(&["--json", "targets"]));
    assert_eq!(exit_code, 0, "stderr: {stderr}");

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["calorie_result"]["bmr"], 1780);
    assert_eq!(json["calorie_result"]["goal_calories"], 2259);
    assert_eq!(json["meal_plan_targets"]["protein"]["grams"], 169);
}

#[test]
fn test_plan_with_adjustment_json() {
    let mut args = with_profile(&["plan", "--json", "--date", "2024-06-02"]);
    args.extend(["--adjust", "reduce calories to 1800, no eggs"]);
    let (exit_code, stdout, stderr) = run_cli(&args);
    assert_eq!(exit_code, 0, "stderr: {stderr}");

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["targets"]["calories"], 1800);
    assert_eq!(json["plan"]["meals"]["breakfast"]["title"], "Greek Yogurt Bowl");
    assert_eq!(json["directives"][0]["type"], "set_calories");
}

#[test]
fn test_plan_text_output() {
    let (exit_code, stdout, _stderr) =
        run_cli(&with_profile(&["plan", "--date", "2024-06-02"]));
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("DAY PLAN FOR 2024-06-02"));
    assert!(stdout.contains("Veggie Omelet"));
}

#[test]
fn test_swaps_lists_options() {
    let (exit_code, stdout, _stderr) = run_cli(&with_profile(&[
        "swaps", "--date", "2024-06-02", "--slot", "breakfast",
    ]));
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[0] "));
    assert!(stdout.contains("Greek Yogurt Bowl"));
}

#[test]
fn test_groceries_json_for_two_days() {
    let (exit_code, stdout, _stderr) = run_cli(&with_profile(&[
        "groceries", "--json", "--date", "2024-06-02", "--days", "2",
    ]));
    assert_eq!(exit_code, 0);

    let lines: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert!(lines.contains(&"300 g chicken breast".to_owned()));
    assert!(lines.contains(&"6 count eggs".to_owned()));
}

#[test]
fn test_invalid_slot_rejected() {
    let (exit_code, _stdout, stderr) = run_cli(&with_profile(&["swaps", "--slot", "brunch"]));
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("unknown meal slot"));
}

#[test]
fn test_invalid_weight_reported() {
    let args: Vec<&str> = ["targets"]
        .iter()
        .chain(PROFILE)
        .map(|arg| if *arg == "80" { "0" } else { *arg })
        .collect();
    let (exit_code, _stdout, stderr) = run_cli(&args);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("weight_kg"));
}
