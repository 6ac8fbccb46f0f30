//! Error taxonomy for the detection harness
//!
//! None of these are recovered locally: the first failure inside a trial or
//! an analysis call aborts the whole run.

use thiserror::Error;

/// Errors raised by the simulation and analysis pipelines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// Invalid constants (sample count, domain, alpha resolution, ...)
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Scoring two label sequences of different length
    #[error("Length mismatch: expected {expected} labels, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Input that makes the math undefined (log of a non-positive mean,
    /// zero-variance sample fed to a t-test, ...)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Caller broke an operation precondition (alpha outside [0, 1])
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
