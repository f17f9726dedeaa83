//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;

fn pretty() -> Command {
    let mut cmd = Command::cargo_bin("pretty").unwrap();
    cmd.env_remove("VEBUILD_PRETTY_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn prettyfier() -> Command {
    let mut cmd = Command::cargo_bin("prettyfier").unwrap();
    cmd.env_remove("VEBUILD_PRETTY_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    pretty()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pretty"));

    prettyfier()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prettyfier"));
}

#[test]
fn test_help_flag() {
    pretty()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print one decorated build status line"));

    prettyfier()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--vebuild"));
}

#[test]
fn test_pretty_without_arguments() {
    pretty()
        .assert()
        .success()
        .stdout("      ?? [Unknown] Please fix this somebody!\n");
}

#[test]
fn test_pretty_two_arguments() {
    pretty()
        .args(["build", "core"])
        .assert()
        .success()
        .stdout("   build [core] Please fix this somebody!\n");
}

#[test]
fn test_pretty_all_arguments() {
    pretty()
        .args(["CC", "ff_fat", "ff_fat.c"])
        .assert()
        .success()
        .stdout("      CC [ff_fat] ff_fat.c\n");
}

#[test]
fn test_pretty_hyphen_description() {
    pretty()
        .args(["CC", "ff_fat", "-Wall"])
        .assert()
        .success()
        .stdout("      CC [ff_fat] -Wall\n");
}

#[test]
fn test_pretty_ignores_stdin() {
    pretty()
        .args(["LD", "app", "linked"])
        .write_stdin("ignored\n")
        .assert()
        .success()
        .stdout("      LD [app] linked\n");
}

#[test]
fn test_prettyfier_vebuild_stream() {
    prettyfier()
        .args(["--vebuild", "test", "net"])
        .write_stdin("ok\nfail: timeout\n")
        .assert()
        .success()
        .stdout("    test [net] | ok\n    test [net] | fail: timeout\n");
}

#[test]
fn test_prettyfier_custom_stream() {
    prettyfier()
        .args(["CC", "fat"])
        .write_stdin("a.c\nb.c")
        .assert()
        .success()
        .stdout("      CC [fat] a.c\n      CC [fat] b.c\n");
}

#[test]
fn test_prettyfier_empty_input() {
    prettyfier()
        .args(["--vebuild", "make", "core"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_prettyfier_defaults() {
    prettyfier()
        .write_stdin("line\n")
        .assert()
        .success()
        .stdout("      ?? [Unknown] line\n");
}

#[test]
fn test_prettyfier_sentinel_not_first_is_a_value() {
    prettyfier()
        .args(["make", "--vebuild"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("    make [--vebuild] x\n");
}

#[test]
fn test_prettyfier_keeps_trailing_whitespace() {
    prettyfier()
        .args(["CC", "fat"])
        .write_stdin("padded  \r\n")
        .assert()
        .success()
        .stdout("      CC [fat] padded  \n");
}

#[test]
fn test_no_color_when_piped() {
    pretty()
        .args(["CC", "fat", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_pretty_leading_double_dash_is_the_command() {
    pretty()
        .args(["--", "m", "d"])
        .assert()
        .success()
        .stdout("      -- [m] d\n");
}

#[test]
fn test_prettyfier_leading_double_dash_is_the_command() {
    prettyfier()
        .args(["--", "x", "y"])
        .write_stdin("line\n")
        .assert()
        .success()
        .stdout("      -- [x] line\n");
}

#[test]
fn test_prettyfier_double_dash_before_sentinel_keeps_custom_style() {
    prettyfier()
        .args(["--", "--vebuild", "x"])
        .write_stdin("line\n")
        .assert()
        .success()
        .stdout("      -- [--vebuild] line\n");
}
