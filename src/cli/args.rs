//! Command-line arguments for the harness front end.
//!
//! Uses `clap` with its "derive" feature. The grammar is positional rather
//! than subcommand-based: the first token is either one of the reserved words
//! (`list`, `regression`) or a test group name, and the optional second token
//! is a case number. clap's usage-error exit code (2) is the same value as
//! the harness-error exit status, so arity and numeric-parse problems need no
//! bespoke handling.

use clap::{CommandFactory, Parser};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    about = "Runs registered unit test groups.",
    after_help = "Targets:\n  \
        list            print the registered group names\n  \
        regression      run every case of every group (also the default)\n  \
        <group>         run every case of one group\n  \
        <group> <case>  run a single numbered case"
)]
pub struct HarnessArgs {
    /// `list`, `regression`, or the name of a test group to run.
    pub target: Option<String>,

    /// A case number within the chosen group.
    pub case: Option<u32>,
}

/// Builds the clap command for a named suite, so `--help` identifies which
/// test binary the user is holding.
pub fn command_for(suite: &str) -> clap::Command {
    HarnessArgs::command().about(format!("Test suite for {}.", suite))
}
