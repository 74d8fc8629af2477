use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("ember")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--email"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("ember")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}
