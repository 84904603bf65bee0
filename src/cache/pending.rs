//! Demos that are declared but not implemented yet.
//!
//! They stay in the registry so `--list` and the suite report show the gap.
//! A pending demo has no variants and the runner never executes it.

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::registry::{DemoRunner, DemoStatus, VariantClosure};

/// A registry entry with a name and nothing to run.
pub struct PendingDemo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// False sharing between threads writing to the same cache line.
pub const CACHE_LINE_BOUNCING: PendingDemo = PendingDemo {
    name: "cache_line_bouncing",
    description: "Threads writing to one cache line (false sharing)",
    category: "cache",
};

/// Cost of cache misses as the working set outgrows each cache level.
pub const CACHE_MISS_IMPACT: PendingDemo = PendingDemo {
    name: "cache_miss_impact",
    description: "Access time as the working set outgrows each cache level",
    category: "cache",
};

impl DemoRunner for PendingDemo {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn category(&self) -> &'static str {
        self.category
    }

    fn status(&self) -> DemoStatus {
        DemoStatus::Pending
    }

    fn available_variants(&self, _config: &DemoConfig) -> Vec<String> {
        Vec::new()
    }

    fn get_variant_closures<'a>(&'a self, _config: &'a DemoConfig) -> Vec<VariantClosure<'a>> {
        Vec::new()
    }

    fn verify(&self) -> Result<(), DemoError> {
        Ok(())
    }
}
