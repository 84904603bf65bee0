//! # Row vs Column Locality
//!
//! Sums the same square matrix, stored row-major, in both traversal orders.
//! Both orders read every element exactly once; only the distance between
//! consecutive reads changes.

pub mod code;
#[cfg(test)]
mod test;

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::registry::{DemoRunner, VariantClosure};
use crate::utils::buffer::alloc_filled;

/// Side of the matrix used by `verify`; wider than a cache line.
const VERIFY_SIZE: usize = 67;

pub struct LocalityRunner;

impl DemoRunner for LocalityRunner {
    fn name(&self) -> &'static str {
        "row_column_locality"
    }

    fn description(&self) -> &'static str {
        "Square matrix summed column by column vs row by row (spatial locality)"
    }

    fn category(&self) -> &'static str {
        "cache"
    }

    fn check_config(&self, config: &DemoConfig) -> Result<(), DemoError> {
        config.check_matrix()
    }

    fn available_variants(&self, _config: &DemoConfig) -> Vec<String> {
        code::available_variants()
            .iter()
            .map(|v| v.name.to_string())
            .collect()
    }

    fn get_variant_closures<'a>(&'a self, config: &'a DemoConfig) -> Vec<VariantClosure<'a>> {
        let n = config.matrix_size;
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
                        let len = n.checked_mul(n).ok_or_else(|| DemoError::InvalidParameter {
                            name: "matrix_size",
                            reason: format!("{} squared overflows usize", n),
                        })?;
                        let matrix = alloc_filled(name, len, 1i32, &budget)?;
                        let (elapsed, sum) = crate::measure!(func(&matrix, n))?;
                        Ok((elapsed, Some(sum as f64)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), DemoError> {
        let n = VERIFY_SIZE;
        // Distinct values: a skipped or repeated element changes the sum
        let matrix: Vec<i32> = (0..(n * n) as i32).collect();

        let variants = code::available_variants();
        let Some((reference, rest)) = variants.split_first() else {
            return Ok(());
        };
        let expected = (reference.function)(&matrix, n);

        for variant in rest {
            let actual = (variant.function)(&matrix, n);
            if actual != expected {
                return Err(DemoError::VerificationFailed {
                    variant: variant.name.to_string(),
                    expected: expected as f64,
                    actual: actual as f64,
                });
            }
        }

        Ok(())
    }
}
