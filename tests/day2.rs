use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn day2_output_right_answers() {
    let mut cmd = Command::cargo_bin("day2").unwrap();
    cmd.arg("problem_files/problem_2");

    cmd.assert()
        .success()
        .stdout(str::contains("Found 8 mirror number(s)"))
        .stdout(str::contains("their sum is 1227775554"))
        .stdout(str::contains("is 4174379265"));
}

#[test]
fn day2_skips_invalid_ranges() {
    let mut cmd = Command::cargo_bin("day2").unwrap();
    cmd.arg("tests/inputs/bad_ranges.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Found 2 mirror number(s)"))
        .stdout(str::contains("their sum is 110"))
        .stdout(str::contains("is 221"))
        .stderr(str::contains("oops"));
}
