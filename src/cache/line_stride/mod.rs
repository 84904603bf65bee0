//! # Cache-Line Stride
//!
//! Runs the same update loop over a fresh buffer once per stride in
//! `1, 2, 4, ..., 256`. Memory moves in whole cache lines, so until the
//! stride spans a full line the loop touches every line regardless of how
//! few elements it updates, and its running time barely moves.
//!
//! Each stride is reported on its own; there is no single baseline to
//! compare against.

pub mod code;
#[cfg(test)]
mod test;

use crate::config::{DemoConfig, DEFAULT_STRIDES};
use crate::error::DemoError;
use crate::registry::{DemoRunner, ReportStyle, VariantClosure};
use crate::utils::buffer::alloc_filled;

pub struct LineStrideRunner;

impl DemoRunner for LineStrideRunner {
    fn name(&self) -> &'static str {
        "cache_line_stride"
    }

    fn description(&self) -> &'static str {
        "Multiply every n-th element: cost follows cache lines touched, not work done"
    }

    fn category(&self) -> &'static str {
        "cache"
    }

    fn report_style(&self) -> ReportStyle {
        ReportStyle::PerVariant
    }

    fn check_config(&self, config: &DemoConfig) -> Result<(), DemoError> {
        config.check_stride()
    }

    fn available_variants(&self, config: &DemoConfig) -> Vec<String> {
        config.strides.iter().map(|&s| code::variant_name(s)).collect()
    }

    fn get_variant_closures<'a>(&'a self, config: &'a DemoConfig) -> Vec<VariantClosure<'a>> {
        let len = config.stride_len;
        let budget = config.budget;

        config
            .strides
            .iter()
            .map(|&step| {
                let name = code::variant_name(step);
                let label = name.clone();

                VariantClosure {
                    name,
                    description: "Multiply every n-th element by 3",
                    run: Box::new(move || {
                        if step == 0 {
                            return Err(DemoError::InvalidParameter {
                                name: "strides",
                                reason: "a stride of zero never advances".to_string(),
                            });
                        }
                        let mut data = alloc_filled(&label, len, 1i32, &budget)?;
                        let (elapsed, touched) =
                            crate::measure!(code::multiply_every(&mut data, step))?;
                        Ok((elapsed, Some(touched as f64)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), DemoError> {
        const LEN: usize = 1024;

        for step in DEFAULT_STRIDES {
            let mut data = vec![1i32; LEN];
            let touched = code::multiply_every(&mut data, step);
            let expected = LEN.div_ceil(step);

            if touched != expected {
                return Err(DemoError::VerificationFailed {
                    variant: code::variant_name(step),
                    expected: expected as f64,
                    actual: touched as f64,
                });
            }

            let tripled = data.iter().filter(|&&x| x == 3).count();
            if tripled != expected {
                return Err(DemoError::VerificationFailed {
                    variant: code::variant_name(step),
                    expected: expected as f64,
                    actual: tripled as f64,
                });
            }
        }

        Ok(())
    }
}
