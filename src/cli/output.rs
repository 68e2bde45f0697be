//! Console reporting for test runs.
//!
//! All user-facing output funnels through here so every dispatch path prints
//! the same shapes: one line per case, a closing summary with the three
//! outcome counts, and a stderr recap of anything that did not pass. Colors
//! go through `termcolor` and are disabled when stdout is not a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::HarnessError;
use crate::registry::Registry;
use crate::runner::{CaseReport, Outcome, RunSummary};

fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints the registered group names, one per line.
pub fn print_group_list(registry: &Registry) {
    println!("registered test groups:");
    for name in registry.group_names() {
        println!("  {}", name);
    }
}

/// Prints per-case lines and the final summary; returns the aggregate counts.
pub fn report(reports: &[CaseReport]) -> RunSummary {
    let mut stdout = StandardStream::stdout(color_choice());
    for case in reports {
        print_case_line(&mut stdout, case);
    }
    let summary = RunSummary::from_reports(reports);
    let _ = writeln!(
        stdout,
        "\ntest summary: total {}, passed {}, failed {}, errored {}",
        summary.total(),
        summary.passed,
        summary.failed,
        summary.errored,
    );
    if !summary.all_ok() {
        eprintln!("\nfailing cases:");
        for case in reports.iter().filter(|c| !c.outcome.is_passed()) {
            eprintln!("  - {} [{}:{}]", case.description, case.group, case.number);
        }
    }
    summary
}

/// Reports a dispatch-level error on stderr with its diagnostic rendering.
pub fn print_harness_error(error: HarnessError) {
    eprintln!("{:?}", miette::Report::new(error));
}

fn print_case_line(stdout: &mut StandardStream, case: &CaseReport) {
    let (tag, color) = match case.outcome {
        Outcome::Passed => ("PASS", Color::Green),
        Outcome::Failed(_) => ("FAIL", Color::Red),
        Outcome::Errored(_) => ("ERROR", Color::Yellow),
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stdout, "{}", tag);
    let _ = stdout.reset();
    let _ = writeln!(stdout, ": {} [{}:{}]", case.description, case.group, case.number);
    match &case.outcome {
        Outcome::Passed => {}
        Outcome::Failed(failure) => {
            let _ = writeln!(stdout, "  {}", failure);
        }
        Outcome::Errored(message) => {
            let _ = writeln!(stdout, "  {}", message);
        }
    }
}
