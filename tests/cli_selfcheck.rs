// End-to-end tests for the CLI dispatcher, driven through the selfcheck
// binary. Requires: assert_cmd, predicates crates in [dev-dependencies].

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn selfcheck() -> Command {
    Command::cargo_bin("selfcheck").unwrap()
}

#[test]
fn list_prints_each_group_once_and_exits_cleanly() {
    selfcheck()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("registered test groups:").and(contains("truetest").count(1)));
}

#[test]
fn running_one_passing_case_exits_zero() {
    selfcheck()
        .args(["truetest", "1"])
        .assert()
        .success()
        .stdout(contains("PASS").and(contains("simple always true test")));
}

#[test]
fn running_the_always_fail_case_exits_with_the_test_failure_code() {
    selfcheck()
        .args(["truetest", "3"])
        .assert()
        .code(1)
        .stdout(contains("FAIL").and(contains("(at ")));
}

#[test]
fn full_regression_reports_a_summary_and_the_expected_failure() {
    selfcheck()
        .arg("regression")
        .assert()
        .code(1)
        .stdout(
            contains("test summary: total 3, passed 2, failed 1, errored 0")
                .and(contains("simple always true test"))
                .and(contains("simple always false test")),
        );
}

#[test]
fn no_arguments_is_the_same_as_regression() {
    selfcheck().assert().code(1).stdout(contains("test summary:"));
}

#[test]
fn unknown_group_is_a_harness_error() {
    selfcheck()
        .arg("NoSuchGroup")
        .assert()
        .code(2)
        .stderr(contains("NoSuchGroup"));
}

#[test]
fn unknown_case_number_is_a_harness_error() {
    selfcheck()
        .args(["truetest", "999"])
        .assert()
        .code(2)
        .stderr(contains("999"));
}

#[test]
fn non_numeric_case_number_is_a_usage_error() {
    selfcheck().args(["truetest", "three"]).assert().code(2);
}

#[test]
fn excess_arguments_are_a_usage_error() {
    selfcheck().args(["truetest", "1", "extra"]).assert().code(2);
}

#[test]
fn help_flags_print_usage_and_exit_zero() {
    for flag in ["-h", "-help", "--help"] {
        selfcheck()
            .arg(flag)
            .assert()
            .success()
            .stdout(contains("Usage").and(contains("casekit selfcheck")));
    }
}
