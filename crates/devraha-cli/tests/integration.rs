//! Integration tests for CLI commands.

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_devraha"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_devraha"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

#[test]
fn test_cow_command_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "cow.json",
        &json!({"_id": "c1", "name": "Gauri", "gender": "cow", "photos": "x", "calf": "no"}),
    );

    let (success, stdout, _) = run_cli(&["cow", &path]);
    assert!(success);
    let cow: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(cow["_id"], "c1");
    assert_eq!(cow["gender"], "Female");
    assert_eq!(cow["photos"], json!([]));
    assert_eq!(cow["calf"], true);
    assert!(cow.get("cowId").is_none());
}

#[test]
fn test_cow_command_from_stdin_with_report() {
    let (success, stdout, _) = run_cli_with_stdin(&["cow", "--report"], r#"{"gender": "ox"}"#);
    assert!(success);
    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["cow"]["gender"], "Male");
    assert_eq!(parsed["report"]["status"], "Degraded");
    let warnings = parsed["report"]["warnings"].as_array().unwrap();
    assert!(warnings.contains(&json!("gender.fallback")));
}

#[test]
fn test_cow_command_canonical_output_sorts_keys() {
    let expected = |total: &str| {
        format!(
            concat!(
                r#"{{"_id":"c1","adoptionStatus":false,"calf":false,"description":"","#,
                r#""donators":[],"eartag":null,"gender":"Male","name":"","photos":[],"#,
                r#""specialCare":false,"sponsorId":null,"sponsorName":null,"#,
                r#""testimonials":false,"totalDonated":{},"youtubeUrl":null}}"#
            ),
            total
        )
    };

    let (success, stdout, _) =
        run_cli_with_stdin(&["cow", "--canonical"], r#"{"_id": "c1", "totalDonated": "12.5"}"#);
    assert!(success);
    assert_eq!(stdout.trim_end(), expected("12.5"));

    let (success, stdout, _) =
        run_cli_with_stdin(&["cow", "--canonical"], r#"{"_id": "c1", "totalDonated": 2500}"#);
    assert!(success);
    assert_eq!(stdout.trim_end(), expected("2500"));
}

#[test]
fn test_cows_command_with_meta() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "cows.json",
        &json!({
            "data": [{"_id": "a", "gender": "Bull"}, {"_id": "b", "gender": "Female"}],
            "meta": {"page": 1, "limit": 10, "total": 2, "totalPages": 1, "grandTotal": 9}
        }),
    );

    let (success, stdout, _) = run_cli(&["cows", &path, "--meta"]);
    assert!(success);
    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["data"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["data"][1]["gender"], "Female");
    assert_eq!(parsed["meta"]["grandTotal"], 9);
    assert_eq!(parsed["meta"]["totalPages"], 1);
}

#[test]
fn test_gender_command() {
    let (success, stdout, _) = run_cli(&["gender", "BULL"]);
    assert!(success);
    assert_eq!(stdout.trim(), "Male");

    let (success, stdout, _) = run_cli(&["gender", "cow"]);
    assert!(success);
    assert_eq!(stdout.trim(), "Female");

    let (success, stdout, _) = run_cli(&["gender", "--json", "42"]);
    assert!(success);
    assert_eq!(stdout.trim(), "Male");
}

#[test]
fn test_user_login_command() {
    let (success, stdout, _) = run_cli_with_stdin(
        &["user", "--login"],
        r#"{"verificationRequired": true, "secondsLeft": 45}"#,
    );
    assert!(success);
    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed, json!({"status": "verificationRequired", "secondsLeft": 45}));
}

#[test]
fn test_error_message_command() {
    let payload = r#"{"message": "Request failed", "response": {"data": {"message": "OTP expired"}}}"#;

    let (success, stdout, _) = run_cli_with_stdin(&["error-message", "--axios"], payload);
    assert!(success);
    assert_eq!(stdout.trim(), "OTP expired");

    let (success, stdout, _) = run_cli_with_stdin(&["error-message"], "[]");
    assert!(success);
    assert_eq!(stdout.trim(), "An unexpected error occurred");
}

#[test]
fn test_invalid_json_fails() {
    let (success, _, stderr) = run_cli_with_stdin(&["cow"], "{not json");
    assert!(!success);
    assert!(stderr.contains("Error: invalid JSON"));
}

#[test]
fn test_missing_file_fails() {
    let (success, _, stderr) = run_cli(&["cow", "/nonexistent/cow.json"]);
    assert!(!success);
    assert!(stderr.contains("failed to read file"));
}
