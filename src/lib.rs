//! # Memory-Access-Demos
//!
//! Micro-benchmarks showing how the CPU pipeline and the cache hierarchy
//! shape the running time of simple loops: instruction-level parallelism,
//! loop unrolling, cache-line granularity and spatial locality.
//!
//! Every demo times a few variants of the same loop and reports how much
//! faster each one is than the first. The numbers belong to the machine they
//! were measured on; nothing here asserts that one variant must win.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_suite from utils::runner
pub use utils::runner::run_suite;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::DemoConfig;
    pub use crate::error::{DemoError, TimerError};
    pub use crate::registry::{build_registry, BenchmarkResult, DemoRegistry, DemoRunner};
    pub use crate::utils::bench::{report_improvement, Improvement};
    pub use crate::utils::runner::{run_suite, DemoOutcome, DemoReport, TimingConfig};
}

#[cfg(test)]
mod tests {
    use crate::config::DemoConfig;
    use crate::error::DemoError;
    use crate::registry::{build_registry, DemoStatus};
    use crate::utils::buffer::AllocBudget;
    use crate::utils::runner::{run_suite, DemoOutcome, PinStrategy, TimingConfig};

    fn quick_timing() -> TimingConfig {
        TimingConfig {
            pin_strategy: PinStrategy::Disabled,
            ..TimingConfig::default()
        }
    }

    #[test]
    fn test_all_demos_registry_verify() {
        let registry = build_registry();

        for demo in registry.all() {
            if let Err(e) = demo.verify() {
                panic!("Demo '{}' failed verification: {}", demo.name(), e);
            }
        }
    }

    #[test]
    fn test_full_suite_reduced() {
        let registry = build_registry();
        let config = DemoConfig::reduced(1024);
        let reports = run_suite(&registry, &config, &quick_timing());

        assert_eq!(reports.len(), registry.all().len());

        for (demo, report) in registry.all().iter().zip(&reports) {
            assert_eq!(report.name, demo.name());

            match (&report.outcome, demo.status()) {
                (DemoOutcome::Completed { results, .. }, DemoStatus::Ready) => {
                    let labels: Vec<String> = results.iter().map(|r| r.label.clone()).collect();
                    assert_eq!(labels, demo.available_variants(&config), "{}", demo.name());
                    assert!(results.iter().all(|r| r.elapsed_seconds >= 0.0));
                    assert!(results.iter().all(|r| r.result_sample.is_some()));
                }
                (DemoOutcome::Pending, DemoStatus::Pending) => {}
                (other, status) => panic!("{}: {:?} with status {:?}", demo.name(), other, status),
            }
        }
    }

    #[test]
    fn test_improvement_only_where_declared() {
        let registry = build_registry();
        let config = DemoConfig::reduced(256);
        let reports = run_suite(&registry, &config, &quick_timing());

        for report in &reports {
            if let DemoOutcome::Completed { improvement, .. } = &report.outcome {
                let expected = report.name != "cache_line_stride";
                assert_eq!(improvement.is_some(), expected, "{}", report.name);
            }
        }
    }

    #[test]
    fn test_allocation_failure_skips_only_that_demo() {
        let registry = build_registry();
        // Room for the two-slot increment buffer, not for the 1024-element ones
        let config = DemoConfig::reduced(1024).with_budget(AllocBudget::capped(64));
        let reports = run_suite(&registry, &config, &quick_timing());

        match &reports[0].outcome {
            DemoOutcome::Completed { results, .. } => assert_eq!(results.len(), 2),
            other => panic!("parallel_increment should complete: {:?}", other),
        }

        for report in &reports[1..5] {
            match &report.outcome {
                DemoOutcome::Skipped(e) => assert!(e.is_allocation_failure(), "{}", report.name),
                other => panic!("{} should be skipped: {:?}", report.name, other),
            }
        }

        assert!(matches!(reports[5].outcome, DemoOutcome::Pending));
        assert!(matches!(reports[6].outcome, DemoOutcome::Pending));
    }

    #[test]
    fn test_invalid_stride_skips_only_the_stride_demo() {
        let registry = build_registry();
        let mut config = DemoConfig::reduced(64);
        config.strides = vec![0];
        let reports = run_suite(&registry, &config, &quick_timing());

        for (demo, report) in registry.all().iter().zip(&reports) {
            match (report.name, &report.outcome, demo.status()) {
                ("cache_line_stride", DemoOutcome::Skipped(e), _) => assert!(matches!(
                    e,
                    DemoError::InvalidParameter { name: "strides", .. }
                )),
                (name, DemoOutcome::Completed { .. }, DemoStatus::Ready)
                    if name != "cache_line_stride" => {}
                (_, DemoOutcome::Pending, DemoStatus::Pending) => {}
                (name, other, _) => panic!("{}: unexpected {:?}", name, other),
            }
        }
    }
}
