//! Utility modules for timing, allocation and reporting.

pub mod bench;
pub mod buffer;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{best_improvement, format_seconds, report_improvement, Improvement};
pub use buffer::{alloc_filled, AllocBudget};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{run_demo, run_suite, run_variants, DemoOutcome, DemoReport, PinStrategy, TimingConfig};
pub use timer::{calculate_median, Timer, TimerHandle};

/// Information about a demo loop variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "same_slot", "unroll_4")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The loop itself
    pub function: F,
}
