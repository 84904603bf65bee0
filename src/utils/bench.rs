//! Shared benchmark utilities.
//!
//! Relative-improvement arithmetic and the formatting helpers used by the
//! report.

use crate::registry::BenchmarkResult;
use std::fmt;

/// Relative gain of a candidate over a baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Improvement {
    /// Signed percentage: positive means the candidate is faster.
    Percent(f64),
    /// The baseline measured zero (or was not a usable reading).
    Undefined,
}

impl Improvement {
    /// The percentage, if defined.
    pub fn percent(self) -> Option<f64> {
        match self {
            Improvement::Percent(p) => Some(p),
            Improvement::Undefined => None,
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Improvement::Percent(p) => write!(f, "{:.2} %", p),
            Improvement::Undefined => write!(f, "undefined"),
        }
    }
}

/// Compute `(1 - candidate / baseline) * 100`.
///
/// Returns [`Improvement::Undefined`] instead of NaN or infinity when the
/// baseline is zero, negative or not finite, or when the candidate is not a
/// usable reading.
///
/// # Example
/// ```
/// use memory_access_demos::utils::bench::{report_improvement, Improvement};
///
/// assert_eq!(report_improvement(1.0, 0.5), Improvement::Percent(50.0));
/// assert_eq!(report_improvement(0.5, 1.0), Improvement::Percent(-100.0));
/// assert_eq!(report_improvement(0.0, 1.0), Improvement::Undefined);
/// ```
pub fn report_improvement(baseline: f64, candidate: f64) -> Improvement {
    if !baseline.is_finite() || baseline <= 0.0 || !candidate.is_finite() || candidate < 0.0 {
        return Improvement::Undefined;
    }
    Improvement::Percent((1.0 - candidate / baseline) * 100.0)
}

/// Best improvement of any later result over the first one.
///
/// The first result is the baseline. With fewer than two results, or a
/// zero baseline, the improvement is undefined.
pub fn best_improvement(results: &[BenchmarkResult]) -> Improvement {
    let Some((baseline, rest)) = results.split_first() else {
        return Improvement::Undefined;
    };

    rest.iter()
        .filter_map(|r| report_improvement(baseline.elapsed_seconds, r.elapsed_seconds).percent())
        .max_by(|a, b| a.total_cmp(b))
        .map(Improvement::Percent)
        .unwrap_or(Improvement::Undefined)
}

/// Format a duration in seconds: milliseconds below one second.
pub fn format_seconds(secs: f64) -> String {
    if secs < 1.0 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{:.4} s", secs)
    }
}

/// Format a checksum, printing integral values without a fraction.
pub fn format_checksum(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}
