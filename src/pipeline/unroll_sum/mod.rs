//! # Unrolled Summation
//!
//! Sums a large buffer with 1, 2, 3 and 4 independent accumulators.
//!
//! With one accumulator each addition waits for the previous one to retire,
//! so the loop is bound by add latency rather than throughput. Splitting the
//! sum over several accumulators exposes independent chains that the
//! pipeline can overlap. The effect is strongest for floats, which the
//! compiler may not reassociate on its own; `i32` sums use wrapping adds and
//! are exactly equal across unroll factors.
//!
//! `f32` elements are summed into `f64` accumulators: an `f32` running sum of
//! ones would stop growing at 2^24, well short of the 64Mi-element buffer.

pub mod code;
#[cfg(test)]
mod test;

use std::hint::black_box;
use std::marker::PhantomData;

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::registry::{DemoRunner, VariantClosure};
use crate::utils::buffer::alloc_filled;
use code::Summand;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runner for the unroll demo over element type `T`.
pub struct UnrollSumRunner<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> UnrollSumRunner<T> {
    pub fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T> Default for UnrollSumRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Summand> DemoRunner for UnrollSumRunner<T> {
    fn name(&self) -> &'static str {
        T::DEMO_NAME
    }

    fn description(&self) -> &'static str {
        "Buffer summation with 1 to 4 independent accumulators (loop unrolling)"
    }

    fn category(&self) -> &'static str {
        "pipeline"
    }

    fn check_config(&self, config: &DemoConfig) -> Result<(), DemoError> {
        config.check_unroll()
    }

    fn available_variants(&self, _config: &DemoConfig) -> Vec<String> {
        code::available_variants::<T>()
            .iter()
            .map(|v| v.name.to_string())
            .collect()
    }

    fn get_variant_closures<'a>(&'a self, config: &'a DemoConfig) -> Vec<VariantClosure<'a>> {
        let len = config.unroll_len;
        let budget = config.budget;

        code::available_variants::<T>()
            .into_iter()
            .map(|v| {
                let func = v.function;
                let name = v.name;

                VariantClosure {
                    name: name.to_string(),
                    description: v.description,
                    run: Box::new(move || {
                        let data = alloc_filled(name, len, T::ONE, &budget)?;
                        let data = black_box(data.as_slice());
                        let (elapsed, sum) = crate::measure!(func(data))?;
                        Ok((elapsed, Some(T::acc_to_f64(black_box(sum)))))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), DemoError> {
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
        // Use a size that leaves a remainder for every unroll factor
        let data: Vec<T> = (0..1021).map(|_| T::sample(&mut rng)).collect();
        let magnitude: f64 = data.iter().map(|x| x.to_f64().abs()).sum();

        let variants = code::available_variants::<T>();
        let Some((reference, rest)) = variants.split_first() else {
            return Ok(());
        };
        let expected = (reference.function)(&data);

        for variant in rest {
            let actual = (variant.function)(&data);
            if !T::agrees(actual, expected, magnitude) {
                return Err(DemoError::VerificationFailed {
                    variant: variant.name.to_string(),
                    expected: T::acc_to_f64(expected),
                    actual: T::acc_to_f64(actual),
                });
            }
        }

        Ok(())
    }
}
