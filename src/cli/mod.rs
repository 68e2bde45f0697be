//! The command-line front end.
//!
//! Maps process arguments onto runner operations and converts outcomes into
//! the exit status contract a build pipeline depends on: 0 for a clean run,
//! 1 when any case failed or errored, 2 for harness-level problems (bad
//! arguments, unknown group or case). The first positional token selects the
//! operation: the reserved words `list` and `regression`, or a group name.

use clap::FromArgMatches;
use std::env;

use crate::cli::args::HarnessArgs;
use crate::registry::Registry;
use crate::runner::{CaseReport, Runner};

pub mod args;
pub mod output;

/// Clean dispatch, every executed case passed.
pub const EXIT_OK: i32 = 0;
/// At least one case failed or errored.
pub const EXIT_TEST_FAILURES: i32 = 1;
/// Bad arguments, unknown group/case, or a registration problem. Matches
/// clap's own usage-error exit code.
pub const EXIT_HARNESS_ERROR: i32 = 2;

/// The main entry point for a test binary: parses `env::args`, dispatches,
/// and returns the process exit status.
pub fn run(suite: &str, registry: &Registry) -> i32 {
    run_from(suite, registry, env::args().collect())
}

/// Dispatches an explicit argument vector (`argv[0]` included).
pub fn run_from(suite: &str, registry: &Registry, argv: Vec<String>) -> i32 {
    let argv = normalize_help_flag(argv);
    let matches = match args::command_for(suite).try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(error) => return finish_clap(error),
    };
    let parsed = match HarnessArgs::from_arg_matches(&matches) {
        Ok(parsed) => parsed,
        Err(error) => return finish_clap(error),
    };
    dispatch(&parsed, registry)
}

fn dispatch(parsed: &HarnessArgs, registry: &Registry) -> i32 {
    let runner = Runner::new(registry);
    match (parsed.target.as_deref(), parsed.case) {
        (None, _) | (Some("regression"), None) => report_run(runner.run_all()),
        (Some("list"), None) => {
            output::print_group_list(registry);
            EXIT_OK
        }
        (Some(group), None) => match runner.run_group(group) {
            Ok(reports) => report_run(reports),
            Err(error) => {
                output::print_harness_error(error);
                EXIT_HARNESS_ERROR
            }
        },
        (Some(group), Some(number)) => match runner.run_case(group, number) {
            Ok(report) => report_run(vec![report]),
            Err(error) => {
                output::print_harness_error(error);
                EXIT_HARNESS_ERROR
            }
        },
    }
}

fn report_run(reports: Vec<CaseReport>) -> i32 {
    if output::report(&reports).all_ok() {
        EXIT_OK
    } else {
        EXIT_TEST_FAILURES
    }
}

/// Single-dash `-help` is accepted as an alias; clap only knows `-h` and
/// `--help`, so the token is rewritten before parsing.
fn normalize_help_flag(argv: Vec<String>) -> Vec<String> {
    argv.into_iter()
        .map(|arg| {
            if arg == "-help" {
                "--help".to_string()
            } else {
                arg
            }
        })
        .collect()
}

fn finish_clap(error: clap::Error) -> i32 {
    let _ = error.print();
    error.exit_code()
}
