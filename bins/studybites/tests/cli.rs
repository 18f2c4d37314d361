//! CLI surface smoke tests. Nothing here talks to a backend.

use assert_cmd::Command;
use predicates::prelude::*;

fn studybites() -> Command {
    Command::cargo_bin("studybites").expect("binary builds")
}

#[test]
fn test_help_lists_commands() {
    studybites()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("foods"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("locate"));
}

#[test]
fn test_foods_help_shows_filters() {
    studybites()
        .args(["foods", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-vegan"))
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_recommend_requires_food_id() {
    studybites()
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FOOD_ID"));
}

#[test]
fn test_unknown_subcommand_fails() {
    studybites()
        .arg("teleport")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
