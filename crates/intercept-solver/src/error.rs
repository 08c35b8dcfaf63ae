//! Solver error types.

use std::fmt;

/// Errors surfaced by the intercept solver.
///
/// Only argument validation can fail. Numerical degeneracy in the root
/// search is recovered internally by the fallback-time policy and never
/// reaches the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A parameter was outside its documented range (zero derivative
    /// order, non-positive fallback or expiry time, negative elapsed
    /// lifetime). These are programming errors at the call site, not
    /// runtime data conditions.
    InvalidArgument(&'static str),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidArgument(what) => {
                write!(f, "invalid solver argument: {what}")
            }
        }
    }
}

impl std::error::Error for SolveError {}
