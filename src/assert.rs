//! Assertion primitives for test case bodies.
//!
//! Each operation either returns `Ok(())` or produces a [`Failure`] carrying
//! the descriptive message and the source location of the call site, rendered
//! as `"<message> (at <file> : <line>)"`. Failures are plain values: case
//! bodies propagate them with `?`, and the runner consumes them at its
//! per-case boundary. Nothing here performs I/O or panics.

use std::fmt::Debug;
use std::ops::Sub;
use std::panic::Location;

use thiserror::Error;

/// The result type every test case body returns.
pub type CaseResult = Result<(), Failure>;

/// An assertion that did not hold, with the call site that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at {file} : {line})")]
pub struct Failure {
    pub message: String,
    pub file: &'static str,
    pub line: u32,
}

impl Failure {
    #[track_caller]
    fn here(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            message: message.into(),
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Fails with `message` unless `condition` holds.
#[track_caller]
pub fn ensure(message: &str, condition: bool) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(Failure::here(message))
    }
}

/// Fails unless `actual == expected`; the failure message carries both values.
#[track_caller]
pub fn ensure_equals<T>(message: &str, actual: T, expected: T) -> CaseResult
where
    T: PartialEq + Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(Failure::here(format!(
            "{}: expected {:?}, got {:?}",
            message, expected, actual
        )))
    }
}

/// Fails unless `actual` is within `tolerance` of `expected`.
///
/// The absolute difference is computed by ordering comparison, so `T` needs
/// no signed arithmetic; integers and floats both work.
#[track_caller]
pub fn ensure_distance<T>(message: &str, actual: T, expected: T, tolerance: T) -> CaseResult
where
    T: PartialOrd + Sub<Output = T> + Copy + Debug,
{
    let distance = if actual < expected {
        expected - actual
    } else {
        actual - expected
    };
    if distance > tolerance {
        Err(Failure::here(format!(
            "{}: {:?} is not within {:?} of {:?}",
            message, actual, tolerance, expected
        )))
    } else {
        Ok(())
    }
}

/// Constructs an unconditional failure, for case bodies that reach a state
/// they consider impossible.
#[track_caller]
pub fn fail(message: &str) -> Failure {
    Failure::here(message)
}
