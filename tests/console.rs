use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn console_solves_selected_days() {
    let mut cmd = Command::cargo_bin("console").unwrap();
    cmd.write_stdin("1\n2\n3\nnope\nq\n");

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1 Password: 3"))
        .stdout(str::contains("Part 2 Password: 6"))
        .stdout(str::contains("Part 1 Password: 1227775554"))
        .stdout(str::contains("Part 2 Password: 4174379265"))
        .stdout(str::contains("Sample mirrors: 11, 22, 99, 1010, 1188511885..."))
        .stdout(str::contains("Day 3 is not available yet."))
        .stdout(str::contains("Invalid input."))
        .stdout(str::contains("Thanks for using"));
}

#[test]
fn console_solves_one_day() {
    let mut cmd = Command::cargo_bin("console").unwrap();
    cmd.arg("--day").arg("2");

    cmd.assert()
        .success()
        .stdout(str::contains("Day 2: Secret Entrance - Mirror Numbers"))
        .stdout(str::contains("Found 8 mirror numbers"));
}

#[test]
fn console_reports_missing_inputs() {
    let mut cmd = Command::cargo_bin("console").unwrap();
    cmd.arg("--input-dir").arg("tests/inputs").arg("--day").arg("1");

    cmd.assert()
        .failure()
        .stdout(str::contains("Error solving Day 1:"))
        .stdout(str::contains("problem_1"));
}
