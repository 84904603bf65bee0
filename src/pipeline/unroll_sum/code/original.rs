//! Reference summation with a single accumulator.
//!
//! Every addition depends on the result of the one before it, so the loop
//! runs at the latency of one add per element.

use super::Summand;

/// Sum all elements with one running accumulator.
///
/// # Example
/// ```
/// use memory_access_demos::pipeline::unroll_sum::code::sum_unroll_1;
///
/// assert_eq!(sum_unroll_1(&[1, 2, 3, 4]), 10);
/// assert_eq!(sum_unroll_1(&[0.5f32, 0.25]), 0.75f64);
/// ```
#[inline(never)]
pub fn sum_unroll_1<T: Summand>(data: &[T]) -> T::Acc {
    let mut sum0 = T::ZERO;
    for &x in data {
        sum0 = T::accumulate(sum0, x);
    }
    sum0
}
