//! Harness-level error taxonomy.
//!
//! Assertion failures are not errors in this taxonomy: they are expected
//! signals consumed at the runner's per-case boundary (see [`crate::assert`]).
//! Everything here is terminal for the requested operation and maps to the
//! harness-error exit status at the CLI layer.

use miette::Diagnostic;
use thiserror::Error;

/// Dispatch-level failures: the request named something that is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum HarnessError {
    #[error("no test group named `{0}` is registered")]
    #[diagnostic(
        code(casekit::runner::group_not_found),
        help("run with `list` to see the registered groups")
    )]
    GroupNotFound(String),

    #[error("test group `{group}` has no case number {number}")]
    #[diagnostic(code(casekit::runner::case_not_found))]
    CaseNotFound { group: String, number: u32 },
}

/// Registration-time failures.
///
/// There is no recovery boundary during registration; the bootstrap sequence
/// propagates these and the process exits with the harness-error status.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RegistryError {
    #[error("case {number} is already registered in group `{group}`")]
    #[diagnostic(
        code(casekit::registry::duplicate_case),
        help("case numbers must be unique within a group")
    )]
    DuplicateCase { group: String, number: u32 },

    #[error("`{0}` is reserved by the command line and cannot name a group")]
    #[diagnostic(code(casekit::registry::reserved_name))]
    ReservedName(String),
}
