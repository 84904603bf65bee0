//! Summation variants, one per unroll factor.

mod original;
mod unrolled;

pub use original::sum_unroll_1;
pub use unrolled::{sum_unroll_2, sum_unroll_3, sum_unroll_4};

use crate::utils::VariantInfo;
use rand::Rng;

/// Element type the unroll demo can sum.
///
/// Sums run in a wider accumulator type where the element type would lose
/// precision: an `f32` running sum of ones stops growing at 2^24, far below
/// the demo's buffer size.
pub trait Summand: Copy + Send + Sync + 'static {
    /// Running-sum type.
    type Acc: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    const ZERO: Self::Acc;
    /// Value every element of the demo buffer is initialised to.
    const ONE: Self;
    /// Registry name of the demo over this element type.
    const DEMO_NAME: &'static str;

    /// Add one element into a running sum.
    fn accumulate(acc: Self::Acc, x: Self) -> Self::Acc;

    /// Add two partial sums.
    fn combine(a: Self::Acc, b: Self::Acc) -> Self::Acc;

    fn to_f64(self) -> f64;

    fn acc_to_f64(acc: Self::Acc) -> f64;

    /// Whether two sums of the same elements agree, given the sum of the
    /// elements' magnitudes.
    fn agrees(a: Self::Acc, b: Self::Acc, magnitude: f64) -> bool;

    /// Random element for verification buffers.
    fn sample<R: Rng>(rng: &mut R) -> Self;
}

impl Summand for f32 {
    type Acc = f64;

    const ZERO: f64 = 0.0;
    const ONE: Self = 1.0;
    const DEMO_NAME: &'static str = "unroll_sum_f32";

    #[inline(always)]
    fn accumulate(acc: f64, x: Self) -> f64 {
        acc + x as f64
    }

    #[inline(always)]
    fn combine(a: f64, b: f64) -> f64 {
        a + b
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn acc_to_f64(acc: f64) -> f64 {
        acc
    }

    fn agrees(a: f64, b: f64, magnitude: f64) -> bool {
        // Reassociation only moves the low bits
        (a - b).abs() <= 1e-4 * magnitude.max(1.0)
    }

    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-1.0..1.0)
    }
}

impl Summand for i32 {
    type Acc = i32;

    const ZERO: i32 = 0;
    const ONE: Self = 1;
    const DEMO_NAME: &'static str = "unroll_sum_i32";

    #[inline(always)]
    fn accumulate(acc: i32, x: Self) -> i32 {
        acc.wrapping_add(x)
    }

    #[inline(always)]
    fn combine(a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn acc_to_f64(acc: i32) -> f64 {
        acc as f64
    }

    fn agrees(a: i32, b: i32, _magnitude: f64) -> bool {
        a == b
    }

    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-1000..1000)
    }
}

/// Type alias for the summation signature
pub type SumFn<T> = fn(&[T]) -> <T as Summand>::Acc;

/// Variants in execution order; `unroll_1` is the baseline.
pub fn available_variants<T: Summand>() -> Vec<VariantInfo<SumFn<T>>> {
    vec![
        VariantInfo {
            name: "unroll_1",
            description: "Single accumulator: every add waits for the previous one",
            function: sum_unroll_1::<T>,
        },
        VariantInfo {
            name: "unroll_2",
            description: "Two independent accumulators",
            function: sum_unroll_2::<T>,
        },
        VariantInfo {
            name: "unroll_3",
            description: "Three independent accumulators",
            function: sum_unroll_3::<T>,
        },
        VariantInfo {
            name: "unroll_4",
            description: "Four independent accumulators",
            function: sum_unroll_4::<T>,
        },
    ]
}
