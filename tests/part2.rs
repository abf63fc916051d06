use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("tests/inputs/example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("there are 26 seats have been occupied"));
}

#[test]
fn part2_rejects_ragged_rows() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("tests/inputs/ragged.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Given row(3 elements), expect row which have 4 elements."));
}
