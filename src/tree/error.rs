//! Error type for the fallible `try_*` entry points.

use core::fmt;

/// Errors for fallible operations (the `try_insert`/`try_extend`/... family on every
/// container). Always present, unlike the teacher's `high_assurance`-gated `SGErr`: this crate
/// has no fixed-capacity/`no_std` target to spare the code size for, so the fallible path is
/// just always available alongside the infallible (panicking) one.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[non_exhaustive]
pub enum SgError {
    /// The underlying arena could not grow to hold a new node (allocator exhaustion, surfaced
    /// via `Vec::try_reserve` rather than the usual abort-on-OOM).
    AllocFailed,
}

impl fmt::Display for SgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SgError::AllocFailed => write!(f, "allocation failed"),
        }
    }
}

#[cfg(any(test, fuzzing))]
impl std::error::Error for SgError {}
