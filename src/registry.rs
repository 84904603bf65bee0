//! Demo registry.
//!
//! The suite is data: [`build_registry`] returns the demos in the order they
//! run, and the runner walks that list. Each demo exposes its loop variants
//! as closures so the runner can time them one after another.

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Timing of one executed variant.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    /// Variant label (e.g. "unroll_2")
    pub label: String,
    /// What the variant does differently
    pub description: &'static str,
    /// Elapsed time of the timed loop, in seconds
    pub elapsed_seconds: f64,
    /// Checksum computed by the variant, used for verification and display
    pub result_sample: Option<f64>,
}

/// What one run of a variant yields: elapsed seconds and an optional checksum.
pub type VariantOutput = Result<(f64, Option<f64>), DemoError>;

/// A named, zero-argument timed operation.
pub struct VariantClosure<'a> {
    pub name: String,
    pub description: &'static str,
    /// Allocates the variant's buffer, times the loop, releases the buffer.
    /// Timing happens inside the closure so allocation is never measured.
    pub run: Box<dyn FnMut() -> VariantOutput + 'a>,
}

/// Whether a demo can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoStatus {
    Ready,
    /// Declared but not implemented: listed and reported, never run.
    Pending,
}

/// How a demo's results are summarised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStyle {
    /// Best improvement of any later variant over the first one.
    BestOverFirst,
    /// Per-variant times only.
    PerVariant,
}

/// Trait that every demo implements
pub trait DemoRunner: Send + Sync {
    /// Name of the demo (e.g., "parallel_increment")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "pipeline", "cache")
    fn category(&self) -> &'static str;

    fn status(&self) -> DemoStatus {
        DemoStatus::Ready
    }

    fn report_style(&self) -> ReportStyle {
        ReportStyle::BestOverFirst
    }

    /// Reject a configuration this demo cannot run with. Only the fields the
    /// demo reads are checked.
    fn check_config(&self, _config: &DemoConfig) -> Result<(), DemoError> {
        Ok(())
    }

    /// Variant labels in execution order.
    fn available_variants(&self, config: &DemoConfig) -> Vec<String>;

    /// Get closures for each variant, in execution order.
    /// Each closure does ONE execution of its loop on a freshly allocated buffer.
    fn get_variant_closures<'a>(&'a self, config: &'a DemoConfig) -> Vec<VariantClosure<'a>>;

    /// Verify that every variant computes the same thing as the first one
    fn verify(&self) -> Result<(), DemoError>;
}

/// Ordered collection of demos
pub struct DemoRegistry {
    demos: Vec<Box<dyn DemoRunner>>,
}

impl DemoRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { demos: Vec::new() }
    }

    /// Append a demo; demos run in registration order
    pub fn register<D: DemoRunner + 'static>(&mut self, demo: D) {
        self.demos.push(Box::new(demo));
    }

    /// All registered demos, in order
    pub fn all(&self) -> &[Box<dyn DemoRunner>] {
        &self.demos
    }

    /// Find demo by name
    pub fn find(&self, name: &str) -> Option<&dyn DemoRunner> {
        self.demos
            .iter()
            .find(|d| d.name() == name)
            .map(|d| d.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.demos.iter().map(|d| d.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn DemoRunner> {
        self.demos
            .iter()
            .filter(|d| d.category() == category)
            .map(|d| d.as_ref())
            .collect()
    }
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default suite, in the order it runs
pub fn build_registry() -> DemoRegistry {
    use crate::cache::{line_stride, locality, pending};
    use crate::pipeline::{parallel_increment, unroll_sum};

    let mut registry = DemoRegistry::new();

    registry.register(parallel_increment::ParallelIncrementRunner);
    registry.register(unroll_sum::UnrollSumRunner::<f32>::new());
    registry.register(unroll_sum::UnrollSumRunner::<i32>::new());
    registry.register(line_stride::LineStrideRunner);
    registry.register(locality::LocalityRunner);
    registry.register(pending::CACHE_LINE_BOUNCING);
    registry.register(pending::CACHE_MISS_IMPACT);

    registry
}
