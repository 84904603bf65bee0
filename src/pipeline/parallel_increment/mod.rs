//! # Parallel Increment
//!
//! Two loops doing the same number of increments. In the first, both
//! increments of an iteration land on the same array slot and form a single
//! dependency chain. In the second they land on two slots, giving the CPU two
//! independent chains it can overlap in its pipeline. This is still one
//! thread doing the work: the parallelism is inside the core.
//!
//! Adapted from the "instruction-level parallelism" example of Igor
//! Ostrovsky's gallery of processor cache effects.

pub mod code;
#[cfg(test)]
mod test;

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::registry::{DemoRunner, VariantClosure};
use crate::utils::buffer::alloc_filled;

/// Iterations used by `verify`.
const VERIFY_ITERATIONS: usize = 1000;

pub struct ParallelIncrementRunner;

impl DemoRunner for ParallelIncrementRunner {
    fn name(&self) -> &'static str {
        "parallel_increment"
    }

    fn description(&self) -> &'static str {
        "Dependent vs independent increments: same work, different instruction-level parallelism"
    }

    fn category(&self) -> &'static str {
        "pipeline"
    }

    fn check_config(&self, config: &DemoConfig) -> Result<(), DemoError> {
        config.check_increment()
    }

    fn available_variants(&self, _config: &DemoConfig) -> Vec<String> {
        code::available_variants()
            .iter()
            .map(|v| v.name.to_string())
            .collect()
    }

    fn get_variant_closures<'a>(&'a self, config: &'a DemoConfig) -> Vec<VariantClosure<'a>> {
        let iterations = config.increment_iterations;
        let budget = config.budget;

        code::available_variants()
            .into_iter()
            .map(|v| {
                let func = v.function;
                let name = v.name;

                VariantClosure {
                    name: name.to_string(),
                    description: v.description,
                    run: Box::new(move || {
                        let mut slots = alloc_filled(name, code::SLOTS, 0u64, &budget)?;
                        let (elapsed, ()) = crate::measure!(func(&mut slots, iterations))?;
                        let total: u64 = slots.iter().sum();
                        Ok((elapsed, Some(total as f64)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), DemoError> {
        let expected = 2 * VERIFY_ITERATIONS as u64;

        for variant in code::available_variants() {
            let mut slots = [0u64; code::SLOTS];
            (variant.function)(&mut slots, VERIFY_ITERATIONS);
            let total: u64 = slots.iter().sum();

            if total != expected {
                return Err(DemoError::VerificationFailed {
                    variant: variant.name.to_string(),
                    expected: expected as f64,
                    actual: total as f64,
                });
            }
        }

        Ok(())
    }
}
