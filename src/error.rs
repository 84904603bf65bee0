//! Error types shared by the timer, the runner and the demos.

use thiserror::Error;

/// Errors raised while reading the clock.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The underlying clock could not be read.
    #[error("clock unavailable: {source}")]
    ClockUnavailable {
        /// The OS error reported by the clock call.
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can stop a single demo.
///
/// None of these are fatal to the process: the runner reports the error for
/// the demo that raised it and moves on to the next one.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A buffer could not be allocated (or exceeded the configured budget).
    #[error("failed to allocate {elements} elements ({bytes} bytes) for '{label}'")]
    AllocationFailed {
        /// Variant that requested the buffer.
        label: String,
        /// Requested element count.
        elements: usize,
        /// Requested size in bytes.
        bytes: usize,
    },

    /// Timing failed.
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// A configuration value is unusable.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A variant disagreed with the reference variant.
    #[error("variant '{variant}' failed verification: expected {expected}, got {actual}")]
    VerificationFailed {
        /// Variant that produced the wrong value.
        variant: String,
        /// Value produced by the reference variant.
        expected: f64,
        /// Value produced by the failing variant.
        actual: f64,
    },
}

impl DemoError {
    /// Returns `true` for allocation failures.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, DemoError::AllocationFailed { .. })
    }
}
