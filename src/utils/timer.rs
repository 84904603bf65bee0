//! Timing primitives for the demos.
//!
//! By default (`cpu_time` feature) a demo is timed against the process CPU
//! clock, which is what `clock()` reports in C and what the demos were first
//! written against. With `--features use_time`, or on non-unix targets, the
//! monotonic wall clock is used instead.
//!
//! Readings are always non-negative. A loop that finishes inside the clock's
//! resolution reads as `0.0` seconds; callers must cope with that (see
//! [`crate::utils::bench::report_improvement`]).

use crate::error::TimerError;

// Use the process CPU clock if: unix AND cpu_time is enabled AND use_time is NOT enabled
// Use the wall clock otherwise

#[cfg(all(unix, feature = "cpu_time", not(feature = "use_time")))]
type Reading = std::time::Duration;

#[cfg(not(all(unix, feature = "cpu_time", not(feature = "use_time"))))]
type Reading = std::time::Instant;

#[cfg(all(unix, feature = "cpu_time", not(feature = "use_time")))]
#[inline(always)]
fn read_clock() -> Result<Reading, TimerError> {
    // SAFETY: timespec is plain data and clock_gettime only writes into it.
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        return Err(TimerError::ClockUnavailable {
            source: std::io::Error::last_os_error(),
        });
    }
    Ok(std::time::Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32))
}

#[cfg(not(all(unix, feature = "cpu_time", not(feature = "use_time"))))]
#[inline(always)]
fn read_clock() -> Result<Reading, TimerError> {
    Ok(std::time::Instant::now())
}

#[cfg(all(unix, feature = "cpu_time", not(feature = "use_time")))]
#[inline(always)]
fn seconds_since(start: Reading) -> Result<f64, TimerError> {
    Ok(read_clock()?.saturating_sub(start).as_secs_f64())
}

#[cfg(not(all(unix, feature = "cpu_time", not(feature = "use_time"))))]
#[inline(always)]
fn seconds_since(start: Reading) -> Result<f64, TimerError> {
    Ok(start.elapsed().as_secs_f64())
}

/// Name of the clock the timer reads, for display.
#[cfg(all(unix, feature = "cpu_time", not(feature = "use_time")))]
pub const fn clock_name() -> &'static str {
    "process CPU time"
}

#[cfg(not(all(unix, feature = "cpu_time", not(feature = "use_time"))))]
pub const fn clock_name() -> &'static str {
    "wall clock"
}

/// Opaque start reading returned by [`Timer::start`].
#[derive(Clone, Copy, Debug)]
pub struct TimerHandle {
    start: Reading,
}

/// Stopwatch over the configured clock.
pub struct Timer;

impl Timer {
    /// Capture the current clock reading.
    #[inline(always)]
    pub fn start() -> Result<TimerHandle, TimerError> {
        Ok(TimerHandle {
            start: read_clock()?,
        })
    }

    /// Seconds elapsed since `handle` was taken. Never negative.
    #[inline(always)]
    pub fn stop(handle: TimerHandle) -> Result<f64, TimerError> {
        let secs = seconds_since(handle.start)?;
        Ok(secs.max(0.0))
    }
}

/// Time an expression.
///
/// Evaluates to `Result<(f64, T), TimerError>`: the elapsed seconds and the
/// value of the expression.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        match $crate::utils::timer::Timer::start() {
            Ok(handle) => {
                let value = $e;
                $crate::utils::timer::Timer::stop(handle).map(|secs| (secs, value))
            }
            Err(err) => Err(err),
        }
    }};
}

/// Median of a set of readings (upper median for even counts).
pub fn calculate_median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted[sorted.len() / 2]
}
