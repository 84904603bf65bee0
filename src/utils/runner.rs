//! Sequential demo runner.
//!
//! Variants run strictly one after another, never concurrently: two timing
//! loops sharing the caches would measure each other. Each variant closure
//! allocates its own buffer and drops it before the next one starts.
//!
//! Cross-variant cache warm-up is not controlled for; the first variant of a
//! demo may pay for cold caches the later ones do not.

use std::hint::black_box;

use super::bench::{best_improvement, Improvement};
use super::cpu_affinity::CpuPinGuard;
use super::timer::calculate_median;
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::registry::{
    BenchmarkResult, DemoRegistry, DemoRunner, DemoStatus, ReportStyle, VariantClosure,
};

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once for the whole suite
    #[default]
    Global,
    /// Pin/unpin around each variant
    PerVariant,
    /// Leave scheduling to the OS
    Disabled,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Timed runs per variant; the median is reported (default: 1)
    pub runs_per_variant: usize,
    /// Untimed runs before measuring (default: 0)
    pub warmup_runs: usize,
    /// CPU pinning strategy (default: Global)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 1,
            warmup_runs: 0,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// What happened to one demo.
#[derive(Debug)]
pub enum DemoOutcome {
    /// All variants ran.
    Completed {
        results: Vec<BenchmarkResult>,
        /// `None` for demos that only report per-variant times.
        improvement: Option<Improvement>,
    },
    /// A variant failed; the demo was abandoned and the suite moved on.
    Skipped(DemoError),
    /// The demo is declared but not implemented.
    Pending,
}

/// Outcome of one demo, tagged with its name.
#[derive(Debug)]
pub struct DemoReport {
    pub name: &'static str,
    pub outcome: DemoOutcome,
}

/// Run variants in order and collect one result per variant.
///
/// The first error aborts the remaining variants.
pub fn run_variants(
    mut variants: Vec<VariantClosure>,
    config: &TimingConfig,
) -> Result<Vec<BenchmarkResult>, DemoError> {
    let runs = config.runs_per_variant.max(1);
    let mut results = Vec::with_capacity(variants.len());

    for variant in &mut variants {
        let _per_variant_pin =
            (config.pin_strategy == PinStrategy::PerVariant).then(CpuPinGuard::new);

        for _ in 0..config.warmup_runs {
            black_box((variant.run)()?);
        }

        let mut samples = Vec::with_capacity(runs);
        let mut result_sample = None;
        for _ in 0..runs {
            let (secs, checksum) = (variant.run)()?;
            samples.push(secs);
            result_sample = checksum;
        }

        let elapsed_seconds = calculate_median(&samples);
        log::debug!("{}: {:.6} s", variant.name, elapsed_seconds);

        results.push(BenchmarkResult {
            label: std::mem::take(&mut variant.name),
            description: variant.description,
            elapsed_seconds,
            result_sample,
        });
    }

    Ok(results)
}

/// Run every variant of one demo and summarise.
pub fn run_demo(demo: &dyn DemoRunner, config: &DemoConfig, timing: &TimingConfig) -> DemoOutcome {
    if demo.status() == DemoStatus::Pending {
        log::info!("{}: pending, not run", demo.name());
        return DemoOutcome::Pending;
    }

    if let Err(e) = demo.check_config(config) {
        log::warn!("{}: skipped: {}", demo.name(), e);
        return DemoOutcome::Skipped(e);
    }

    log::info!("{}: starting", demo.name());
    match run_variants(demo.get_variant_closures(config), timing) {
        Ok(results) => {
            let improvement = match demo.report_style() {
                ReportStyle::BestOverFirst => Some(best_improvement(&results)),
                ReportStyle::PerVariant => None,
            };
            log::info!("{}: finished {} variants", demo.name(), results.len());
            DemoOutcome::Completed {
                results,
                improvement,
            }
        }
        Err(e) => {
            log::warn!("{}: skipped: {}", demo.name(), e);
            DemoOutcome::Skipped(e)
        }
    }
}

/// Run demos one after another, calling `on_report` as each finishes.
pub fn run_demos_with<'r, F>(
    demos: &[&'r dyn DemoRunner],
    config: &DemoConfig,
    timing: &TimingConfig,
    mut on_report: F,
) -> Vec<DemoReport>
where
    F: FnMut(&'r dyn DemoRunner, &DemoReport),
{
    let _global_pin = (timing.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    demos
        .iter()
        .map(|&demo| {
            let report = DemoReport {
                name: demo.name(),
                outcome: run_demo(demo, config, timing),
            };
            on_report(demo, &report);
            report
        })
        .collect()
}

/// Run the whole registry in order.
pub fn run_suite(
    registry: &DemoRegistry,
    config: &DemoConfig,
    timing: &TimingConfig,
) -> Vec<DemoReport> {
    let demos: Vec<&dyn DemoRunner> = registry.all().iter().map(|d| d.as_ref()).collect();
    run_demos_with(&demos, config, timing, |_, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::buffer::{alloc_filled, AllocBudget};

    fn constant_variant(name: &str, value: f64) -> VariantClosure<'static> {
        VariantClosure {
            name: name.to_string(),
            description: "test",
            run: Box::new(move || Ok((0.0, Some(value)))),
        }
    }

    #[test]
    fn test_run_variants_empty() {
        let results = run_variants(vec![], &TimingConfig::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_run_variants_keeps_order() {
        let variants = vec![
            constant_variant("first", 1.0),
            constant_variant("second", 2.0),
            constant_variant("third", 3.0),
        ];
        let results = run_variants(variants, &TimingConfig::default()).unwrap();
        let labels: Vec<_> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
        assert!(results.iter().all(|r| r.description == "test"));
        assert_eq!(results[2].result_sample, Some(3.0));
    }

    #[test]
    fn test_runs_and_warmup_counts() {
        let mut calls = 0usize;
        let variants = vec![VariantClosure {
            name: "counted".to_string(),
            description: "test",
            run: Box::new(|| {
                calls += 1;
                Ok((calls as f64, None))
            }),
        }];
        let config = TimingConfig {
            runs_per_variant: 3,
            warmup_runs: 2,
            pin_strategy: PinStrategy::Disabled,
        };
        let results = run_variants(variants, &config).unwrap();
        // Timed runs returned 3, 4, 5
        assert_eq!(results[0].elapsed_seconds, 4.0);
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_allocation_failure_stops_remaining_variants() {
        let budget = AllocBudget::capped(8);
        let mut later_ran = false;
        let variants = vec![
            VariantClosure {
                name: "too_big".to_string(),
                description: "test",
                run: Box::new(move || {
                    let buf = alloc_filled("too_big", 1024, 0u8, &budget)?;
                    Ok((0.0, Some(buf.len() as f64)))
                }),
            },
            VariantClosure {
                name: "later".to_string(),
                description: "test",
                run: Box::new(|| {
                    later_ran = true;
                    Ok((0.0, None))
                }),
            },
        ];
        let err = run_variants(variants, &TimingConfig::default()).unwrap_err();
        assert!(err.is_allocation_failure());
        assert!(!later_ran);
    }
}
