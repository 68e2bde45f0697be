//! Sequential test execution with a per-case failure boundary.
//!
//! The runner executes one case, one group, or every registered group, and
//! turns whatever each case body signals into a recorded [`Outcome`]. The
//! boundary is the load-bearing property here: a case that fails an assertion
//! or panics must never prevent the cases after it from running. Runs are
//! stateless between invocations; each one produces fresh reports and a fresh
//! [`RunSummary`].

use std::panic::{self, AssertUnwindSafe};

use crate::assert::Failure;
use crate::errors::HarnessError;
use crate::registry::{Registry, TestCase, TestGroup};

/// The recorded result of executing one case.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    /// An assertion did not hold; carries the message and call site.
    Failed(Failure),
    /// Something other than an assertion escaped the case body.
    Errored(String),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// One executed case, with enough context for the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub group: String,
    pub number: u32,
    pub description: String,
    pub outcome: Outcome,
}

/// Aggregate counts for one run invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn from_reports(reports: &[CaseReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.outcome {
                Outcome::Passed => summary.passed += 1,
                Outcome::Failed(_) => summary.failed += 1,
                Outcome::Errored(_) => summary.errored += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }

    pub fn all_ok(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

/// Executes registered cases strictly sequentially, in one thread.
pub struct Runner<'a> {
    registry: &'a Registry,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Runs every group (alphabetical), every case (ascending number).
    pub fn run_all(&self) -> Vec<CaseReport> {
        with_quiet_panics(|| {
            self.registry
                .groups()
                .flat_map(|group| group.cases().map(|case| execute_case(group, case)))
                .collect()
        })
    }

    /// Runs every case of one group.
    pub fn run_group(&self, name: &str) -> Result<Vec<CaseReport>, HarnessError> {
        let group = self.lookup_group(name)?;
        Ok(with_quiet_panics(|| {
            group.cases().map(|case| execute_case(group, case)).collect()
        }))
    }

    /// Runs exactly one case.
    pub fn run_case(&self, name: &str, number: u32) -> Result<CaseReport, HarnessError> {
        let group = self.lookup_group(name)?;
        let case = group.case(number).ok_or_else(|| HarnessError::CaseNotFound {
            group: name.to_string(),
            number,
        })?;
        Ok(with_quiet_panics(|| execute_case(group, case)))
    }

    fn lookup_group(&self, name: &str) -> Result<&'a TestGroup, HarnessError> {
        self.registry
            .group(name)
            .ok_or_else(|| HarnessError::GroupNotFound(name.to_string()))
    }
}

/// Runs one case body inside the failure boundary.
fn execute_case(group: &TestGroup, case: &TestCase) -> CaseReport {
    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| case.execute())) {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(failure)) => Outcome::Failed(failure),
        Err(payload) => Outcome::Errored(panic_message(payload.as_ref())),
    };
    CaseReport {
        group: group.name().to_string(),
        number: case.number(),
        description: case.description().to_string(),
        outcome,
    }
}

/// Suppresses the default panic hook for the duration of a run, so a case
/// that panics does not spray a backtrace between report lines. Safe in this
/// crate's single-threaded execution model.
fn with_quiet_panics<T>(run: impl FnOnce() -> T) -> T {
    let saved = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = run();
    panic::set_hook(saved);
    result
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        format!("unexpected error: {}", text)
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("unexpected error: {}", text)
    } else {
        "unexpected error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{ensure, fail};
    use crate::registry::Registry;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register("mixed", 1, "always passes", || Ok(()))
            .unwrap();
        registry
            .register("mixed", 2, "always fails", || ensure("boom", false))
            .unwrap();
        registry
            .register("mixed", 3, "always panics", || panic!("kaboom"))
            .unwrap();
        registry
            .register("mixed", 4, "passes after the wreckage", || Ok(()))
            .unwrap();
        registry
            .register("clean", 1, "fine", || Ok(()))
            .unwrap();
        registry
    }

    #[test]
    fn failing_case_does_not_stop_later_cases() {
        let registry = sample_registry();
        let reports = Runner::new(&registry).run_group("mixed").unwrap();
        assert_eq!(reports.len(), 4);
        assert!(reports[0].outcome.is_passed());
        assert!(matches!(reports[1].outcome, Outcome::Failed(_)));
        assert!(matches!(reports[2].outcome, Outcome::Errored(_)));
        assert!(reports[3].outcome.is_passed());
    }

    #[test]
    fn panic_payload_is_recorded() {
        let registry = sample_registry();
        let report = Runner::new(&registry).run_case("mixed", 3).unwrap();
        match report.outcome {
            Outcome::Errored(message) => assert_eq!(message, "unexpected error: kaboom"),
            other => panic!("expected Errored, got {:?}", other),
        }
    }

    #[test]
    fn run_all_covers_every_group_in_order() {
        let registry = sample_registry();
        let reports = Runner::new(&registry).run_all();
        let labels: Vec<(String, u32)> = reports
            .iter()
            .map(|r| (r.group.clone(), r.number))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("clean".to_string(), 1),
                ("mixed".to_string(), 1),
                ("mixed".to_string(), 2),
                ("mixed".to_string(), 3),
                ("mixed".to_string(), 4),
            ]
        );
    }

    #[test]
    fn summary_counts_each_outcome() {
        let registry = sample_registry();
        let reports = Runner::new(&registry).run_all();
        let summary = RunSummary::from_reports(&reports);
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errored, 1);
        assert_eq!(summary.total(), 5);
        assert!(!summary.all_ok());
    }

    #[test]
    fn unknown_group_and_case_are_distinct_errors() {
        let registry = sample_registry();
        let runner = Runner::new(&registry);
        assert_eq!(
            runner.run_group("nope").unwrap_err(),
            HarnessError::GroupNotFound("nope".to_string())
        );
        assert_eq!(
            runner.run_case("mixed", 99).unwrap_err(),
            HarnessError::CaseNotFound {
                group: "mixed".to_string(),
                number: 99
            }
        );
    }

    #[test]
    fn failed_outcome_preserves_the_assertion_failure() {
        let mut registry = Registry::new();
        registry
            .register("g", 1, "deliberate", || Err(fail("expected failure")))
            .unwrap();
        let report = Runner::new(&registry).run_case("g", 1).unwrap();
        match report.outcome {
            Outcome::Failed(failure) => {
                assert!(failure.message.contains("expected failure"));
                assert!(failure.to_string().contains("(at "));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
