// End-to-end acceptance tests for the interactive `run` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const THEME: &str = r##"
[palette]
heading = "#244092"
accent = "#f03c24"
panel = "#ededf0"
"##;

fn workdir_with_theme() -> TempDir {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("theme.toml"), THEME).expect("theme should write");
    dir
}

fn aqcheck() -> Command {
    Command::cargo_bin("aqcheck").expect("binary should compile")
}

#[test]
fn run_aborts_when_theme_is_missing() {
    let dir = TempDir::new().expect("temp dir should be created");

    aqcheck()
        .current_dir(dir.path())
        .arg("run")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("theme file not found"))
        .stdout(predicate::str::contains("Questionnaire").not());
}

#[test]
fn run_aborts_on_malformed_theme() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("theme.toml"),
        "[palette]\nheading = \"blue\"\naccent = \"#f03c24\"\npanel = \"#ededf0\"\n",
    )
    .expect("theme should write");

    aqcheck()
        .current_dir(dir.path())
        .arg("run")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("6-digit hex"));
}

#[test]
fn run_complete_session_scores_forty_eight() {
    let dir = workdir_with_theme();
    let keys = ['c', 'c', 'c', 'c', 'c', 'a', 'a', 'c', 'c', 'c', 'c', 'c'];
    let mut stdin: String = keys.iter().map(|key| format!("{key}\n")).collect();
    stdin.push_str("submit\n");

    aqcheck()
        .current_dir(dir.path())
        .arg("run")
        .write_stdin(stdin)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "TQ Adaptability Quotient (AQ) Questionnaire",
        ))
        .stdout(predicate::str::contains("Your Total AQ Score: 48 / 48"))
        .stdout(predicate::str::contains("Your AQ: 100.00%"))
        .stdout(predicate::str::contains("AQ-High"));
}

#[test]
fn run_all_minimum_answers_scores_twelve() {
    let dir = workdir_with_theme();
    let keys = ['d', 'd', 'd', 'd', 'd', 'd', 'd', 'd', 'a', 'a', 'a', 'a'];
    let mut stdin: String = keys.iter().map(|key| format!("{key}\n")).collect();
    stdin.push_str("submit\n");

    aqcheck()
        .current_dir(dir.path())
        .arg("run")
        .write_stdin(stdin)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Your Total AQ Score: 12 / 48"))
        .stdout(predicate::str::contains("Your AQ: 25.00%"))
        .stdout(predicate::str::contains("AQ-Low"));
}

#[test]
fn run_incomplete_submit_warns_and_never_scores() {
    let dir = workdir_with_theme();
    // Eleven answers, one skipped question, then submit and give up.
    let mut stdin = "a\n".repeat(11);
    stdin.push('\n');
    stdin.push_str("submit\nquit\n");

    aqcheck()
        .current_dir(dir.path())
        .arg("run")
        .write_stdin(stdin)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Please answer all questions before submitting.",
        ))
        .stdout(predicate::str::contains("Unanswered: 12"))
        .stdout(predicate::str::contains("Your Total AQ Score").not());
}

#[test]
fn run_skipped_question_can_be_answered_from_review() {
    let dir = workdir_with_theme();
    let mut stdin = "a\n".repeat(11);
    stdin.push('\n'); // skip question 12
    stdin.push_str("submit\n"); // refused: incomplete
    stdin.push_str("12\na\nsubmit\n"); // fill it in, then submit again

    aqcheck()
        .current_dir(dir.path())
        .arg("run")
        .write_stdin(stdin)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Unanswered: 12"))
        .stdout(predicate::str::contains("Your Total AQ Score: 30 / 48"));
}

#[test]
fn run_honors_theme_flag_outside_workdir() {
    let workdir = TempDir::new().expect("temp dir should be created");
    let themedir = TempDir::new().expect("temp dir should be created");
    let theme_path = themedir.path().join("custom.toml");
    fs::write(&theme_path, THEME).expect("theme should write");

    let mut stdin = "a\n".repeat(12);
    stdin.push_str("quit\n");

    aqcheck()
        .current_dir(workdir.path())
        .arg("run")
        .arg("--theme")
        .arg(&theme_path)
        .write_stdin(stdin)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1. When your usual way"));
}
