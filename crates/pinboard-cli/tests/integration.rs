//! Integration tests for CLI commands.

use std::process::Command;
use tempfile::TempDir;

fn run_cli(data_dir: &str, args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "pinboard", "--quiet", "--"])
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_venues_command() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&dir, &["venues"]);
    assert!(success);
    assert!(stdout.contains("Agora"));
    assert!(stdout.contains("Main Parking"));
    assert_eq!(stdout.lines().count(), 12);
}

#[test]
fn test_signup_login_and_bad_password() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&dir, &["signup", "alice1", "pass1"]);
    assert!(success);
    assert!(stdout.contains("alice1"));

    let (success, _, _) = run_cli(&dir, &["login", "alice1", "pass1"]);
    assert!(success);

    let (success, _, stderr) = run_cli(&dir, &["login", "alice1", "wrong"]);
    assert!(!success);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_add_then_list_table_and_json() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().to_string();

    run_cli(&dir, &["signup", "alice1", "pass1"]);
    let (success, _, stderr) = run_cli(
        &dir,
        &[
            "add", "Agora", "Talk", "01/01/2099", "10:00", "An open talk", "--user", "alice1",
            "--password", "pass1",
        ],
    );
    assert!(success, "add failed: {stderr}");

    let (success, stdout, _) = run_cli(&dir, &["list", "Agora"]);
    assert!(success);
    assert!(stdout.contains("NAME"));
    assert!(stdout.contains("Talk"));
    assert!(stdout.contains("01/01/2099 10:00"));

    let (success, stdout, _) = run_cli(&dir, &["list", "Agora", "--json"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 1);
    let parsed: serde_json::Value = serde_json::from_str(lines[0]).expect("Invalid JSON");
    assert_eq!(parsed["name"], "Talk");
    assert_eq!(parsed["stamp"], "01/01/2099 10:00");
}

#[test]
fn test_clash_requires_allow_flag() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().to_string();

    run_cli(&dir, &["signup", "alice1", "pass1"]);
    run_cli(
        &dir,
        &[
            "add", "Agora", "Talk", "01/01/2099", "10:00", "first", "--user", "alice1",
            "--password", "pass1",
        ],
    );

    let (success, _, stderr) = run_cli(
        &dir,
        &[
            "add", "Agora", "Chat", "01/01/2099", "10:00", "second", "--user", "alice1",
            "--password", "pass1",
        ],
    );
    assert!(!success);
    assert!(stderr.contains("allow-clash"));

    let (success, _, _) = run_cli(
        &dir,
        &[
            "add", "Agora", "Chat", "01/01/2099", "10:00", "second", "--user", "alice1",
            "--password", "pass1", "--allow-clash",
        ],
    );
    assert!(success);

    let (_, stdout, _) = run_cli(&dir, &["list", "Agora"]);
    assert!(stdout.contains("Talk"));
    assert!(stdout.contains("Chat"));
}

#[test]
fn test_remove_is_owner_gated() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().to_string();

    run_cli(&dir, &["signup", "alice1", "pass1"]);
    run_cli(&dir, &["signup", "bob2", "pass2"]);
    run_cli(
        &dir,
        &[
            "add", "Agora", "Talk", "01/01/2099", "10:00", "desc", "--user", "alice1",
            "--password", "pass1",
        ],
    );

    let (success, _, stderr) = run_cli(
        &dir,
        &["remove", "Talk", "--user", "bob2", "--password", "pass2"],
    );
    assert!(!success);
    assert!(stderr.contains("another organizer"));

    let (success, _, _) = run_cli(
        &dir,
        &["remove", "Talk", "--user", "alice1", "--password", "pass1"],
    );
    assert!(success);

    let (_, stdout, _) = run_cli(&dir, &["list", "Agora"]);
    assert!(!stdout.contains("Talk"));
}

#[test]
fn test_sweep_reports_zero_on_future_only_store() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().to_string();

    run_cli(&dir, &["signup", "alice1", "pass1"]);
    run_cli(
        &dir,
        &[
            "add", "Agora", "Talk", "01/01/2099", "10:00", "desc", "--user", "alice1",
            "--password", "pass1",
        ],
    );

    let (success, stdout, _) = run_cli(&dir, &["sweep"]);
    assert!(success);
    assert!(stdout.contains("Swept 0"));
}
