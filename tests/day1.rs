use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn day1_output_right_answers() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("problem_files/problem_1");

    cmd.assert()
        .success()
        .stdout(str::contains("stops at 0 3 time(s)"))
        .stdout(str::contains("points at 0 6 time(s)"));
}

#[test]
fn day1_fails_on_invalid_instruction() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("tests/inputs/bad_dial.txt");

    cmd.assert()
        .failure()
        .stdout(str::contains("stops at 0 2 time(s)"))
        .stderr(str::contains("X50"));
}

#[test]
fn day1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("tests/inputs/missing.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read dial instructions"));
}
