// Self-check binary: registers the sample suite and hands control to the CLI.
// Usage: cargo run --bin selfcheck [list | regression | <group> [<case>]]

use std::process;

use casekit::cli;
use casekit::registry::Registry;
use casekit::{ensure, ensure_distance, ensure_equals, fail, RegistryError};

/// A small suite that exercises the framework itself. If one of these cases
/// misbehaves, the framework is to blame, not the test author.
fn register_truetest(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register("truetest", 1, "simple always true test", || {
        ensure("failure", true)?;
        ensure_equals("failure", 1, 1)?;
        ensure_distance("failure", 1, 2, 3)?;
        Ok(())
    })?;

    registry.register("truetest", 2, "simple always false test", || {
        if ensure("failure", false).is_ok() {
            return Err(fail("ensure accepted a false condition"));
        }
        if ensure_equals("failure", 1, 0).is_ok() {
            return Err(fail("ensure_equals accepted unequal values"));
        }
        if ensure_distance("failure", 10, 0, 1).is_ok() {
            return Err(fail("ensure_distance accepted an out-of-tolerance value"));
        }
        Ok(())
    })?;

    registry.register("truetest", 3, "simple always fail test", || {
        Err(fail("this is an expected failure and can be ignored"))
    })?;

    Ok(())
}

fn main() {
    let mut registry = Registry::new();
    // Registration problems mean the suite itself is broken; there is no
    // recovery boundary here.
    if let Err(error) = register_truetest(&mut registry) {
        eprintln!("{:?}", miette::Report::new(error));
        process::exit(cli::EXIT_HARNESS_ERROR);
    }
    process::exit(cli::run("casekit selfcheck", &registry));
}
