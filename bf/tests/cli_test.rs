//! End-to-end tests for the botfolio binary
//!
//! Each test gets its own profile, config and data directory so nothing
//! touches the real home directory.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            dir.path().join("botfolio.yml"),
            "color: false\nllm:\n  provider: none\n",
        )
        .expect("Failed to write config");
        Self { dir }
    }

    fn profile_path(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("botfolio").expect("binary should build");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .arg("--no-color")
            .arg("--config")
            .arg(self.dir.path().join("botfolio.yml"))
            .arg("--profile")
            .arg(self.profile_path());
        cmd
    }

    fn write_profile(&self, json: &str) {
        std::fs::write(self.profile_path(), json).expect("Failed to write profile");
    }
}

#[test]
fn test_ask_creates_missing_profile() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["ask", "skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data.json not found"))
        .stdout(predicate::str::contains("🔸 Python"));

    assert!(sandbox.profile_path().exists());
}

#[test]
fn test_ask_uses_existing_profile() {
    let sandbox = Sandbox::new();
    sandbox.write_profile(r#"{"name": "Ann Lee", "projects": ["Solo bot"]}"#);

    sandbox
        .cmd()
        .args(["ask", "Show", "me", "your", "PROJECTS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Solo bot"))
        .stdout(predicate::str::contains("not found").not());

    sandbox
        .cmd()
        .args(["ask", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee"));
}

#[test]
fn test_ask_unmatched_echoes_input() {
    let sandbox = Sandbox::new();
    sandbox.write_profile("{}");

    sandbox
        .cmd()
        .args(["ask", "Quantum Pizza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantum Pizza"))
        .stdout(predicate::str::contains("help"));
}

#[test]
fn test_ask_blank_question_prints_nothing() {
    let sandbox = Sandbox::new();
    sandbox.write_profile("{}");

    sandbox
        .cmd()
        .args(["ask", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_ask_ai_without_backend() {
    let sandbox = Sandbox::new();
    sandbox.write_profile("{}");

    sandbox
        .cmd()
        .args(["ask", "ai: favourite color?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI chat is not available"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let sandbox = Sandbox::new();

    sandbox.cmd().arg("init").assert().success();
    sandbox.write_profile(r#"{"name": "Edited"}"#);

    sandbox
        .cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(sandbox.profile_path()).unwrap();
    assert!(content.contains("Edited"));

    sandbox.cmd().args(["init", "--force"]).assert().success();
    let content = std::fs::read_to_string(sandbox.profile_path()).unwrap();
    assert!(content.contains("Your Name"));
}

#[test]
fn test_profile_json_output() {
    let sandbox = Sandbox::new();
    sandbox.write_profile(r#"{"name": "Ann", "graduationYear": "2021"}"#);

    let output = sandbox
        .cmd()
        .args(["profile", "--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["name"], "Ann");
    assert_eq!(value["graduation_year"], "2021");
}

#[test]
fn test_broken_profile_fails_to_start() {
    let sandbox = Sandbox::new();
    sandbox.write_profile("{ not json");

    sandbox
        .cmd()
        .args(["ask", "skills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start assistant"));
}

#[test]
fn test_chat_reads_until_exit_token() {
    let sandbox = Sandbox::new();
    sandbox.write_profile(r#"{"name": "Ann", "skills": ["Rust"]}"#);

    sandbox
        .cmd()
        .arg("chat")
        .write_stdin("\nskills\n  BYE \nnever reached\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Ann Botfolio Assistant!"))
        .stdout(predicate::str::contains("🔸 Rust"))
        .stdout(predicate::str::contains("Thanks for chatting"))
        .stdout(predicate::str::contains("never reached").not());
}

#[test]
fn test_chat_ends_on_eof() {
    let sandbox = Sandbox::new();
    sandbox.write_profile("{}");

    sandbox
        .cmd()
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Commands"))
        .stdout(predicate::str::contains("Goodbye!"));
}
