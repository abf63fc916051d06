use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("there are 37 seats have been occupied"));
}

#[test]
fn part1_output_right_answer_within_generation_limit() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["tests/inputs/example.txt", "--max-generations", "100"]);

    cmd.assert().success().stdout(str::contains("37"));
}

#[test]
fn part1_fails_if_not_stabilized_in_time() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["tests/inputs/example.txt", "--max-generations", "1"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("doesn't stabilize within 1 generation(s)"));
}

#[test]
fn part1_rejects_invalid_seat_char() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/invalid_char.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid character(X) for seat"))
        .stderr(str::contains("line 2"));
}

#[test]
fn part1_rejects_missing_input() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/no_such_file.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read map of seats layout"));
}

#[test]
fn part1_ignores_blank_lines_after_layout() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/trailing_blank.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("there are 37 seats have been occupied"));
}

#[test]
fn part1_rejects_blank_line_inside_layout() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/interior_blank.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Found 1 blank line(s) before line 3."));
}
