//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn timed_quiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("timed-quiz").unwrap()
}

fn write_bank(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("problems.csv");
    std::fs::write(&path, content).unwrap();
    path
}

const SCENARIO_BANK: &str = "2+2?,4\ncapital of France?,Paris\n";

#[test]
fn all_correct_answers_finish() {
    let dir = TempDir::new().unwrap();
    let csv = write_bank(&dir, SCENARIO_BANK);

    timed_quiz()
        .arg("--csv")
        .arg(&csv)
        .write_stdin("4\nParis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2+2? > capital of France? > "))
        .stdout(predicate::str::ends_with("\nQuiz finished.2 out of 2\n"));
}

#[test]
fn wrong_answer_is_not_counted() {
    let dir = TempDir::new().unwrap();
    let csv = write_bank(&dir, SCENARIO_BANK);

    timed_quiz()
        .arg("--csv")
        .arg(&csv)
        .write_stdin("4\nLyon\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nQuiz finished.1 out of 2\n"));
}

#[test]
fn malformed_records_are_skipped() {
    let dir = TempDir::new().unwrap();
    let csv = write_bank(&dir, "1+1,2\nnot a record\n2+2,4,extra\n3+3,6\n");

    timed_quiz()
        .arg("--csv")
        .arg(&csv)
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Quiz finished.2 out of 2\n"));
}

#[test]
fn empty_source_is_a_trivial_quiz() {
    let dir = TempDir::new().unwrap();
    let csv = write_bank(&dir, "");

    timed_quiz()
        .arg("--csv")
        .arg(&csv)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 out of 0"));
}

#[test]
fn zero_limit_times_out() {
    let dir = TempDir::new().unwrap();
    let csv = write_bank(&dir, SCENARIO_BANK);

    timed_quiz()
        .arg("--csv")
        .arg(&csv)
        .arg("--limit")
        .arg("0")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nQuiz timeout.\n0 out of 2\n"));
}

#[test]
fn missing_source_fails_fast() {
    let dir = TempDir::new().unwrap();

    timed_quiz()
        .arg("--csv")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open question source"));
}

#[test]
fn log_file_receives_diagnostics() {
    let dir = TempDir::new().unwrap();
    let csv = write_bank(&dir, SCENARIO_BANK);
    let log = dir.path().join("quiz_debug.log");

    timed_quiz()
        .arg("--csv")
        .arg(&csv)
        .arg("--log-file")
        .arg(&log)
        .env_remove("RUST_LOG")
        .write_stdin("4\nParis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz finished.2 out of 2"));

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("quiz started"));
    assert!(contents.contains("time_limit=20s"));
    assert!(contents.contains("quiz ended"));
}

#[test]
fn shuffled_quiz_scores_every_answer() {
    let dir = TempDir::new().unwrap();
    // Every question has the same answer, so any order is all correct.
    let csv = write_bank(&dir, "1+1?,2\n0+2?,2\n4/2?,2\n2*1?,2\n3-1?,2\n");

    timed_quiz()
        .arg("--csv")
        .arg(&csv)
        .arg("--shuffle")
        .write_stdin("2\n2\n2\n2\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1+1? > "))
        .stdout(predicate::str::contains("3-1? > "))
        .stdout(predicate::str::ends_with("\nQuiz finished.5 out of 5\n"));
}
