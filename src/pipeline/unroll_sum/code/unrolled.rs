//! Unrolled summation with 2, 3 and 4 accumulators.
//!
//! Each accumulator takes every k-th element, so the k chains of adds are
//! independent and the pipeline can keep k of them in flight. Elements left
//! over after the last full group go into the first accumulator. Partial sums
//! are combined pairwise at the end.

use super::Summand;

/// Sum with 2 independent accumulators.
#[inline(never)]
pub fn sum_unroll_2<T: Summand>(data: &[T]) -> T::Acc {
    let chunks = data.len() / 2;

    let mut sum0 = T::ZERO;
    let mut sum1 = T::ZERO;

    for i in 0..chunks {
        let idx = i * 2;
        sum0 = T::accumulate(sum0, data[idx]);
        sum1 = T::accumulate(sum1, data[idx + 1]);
    }

    for &x in &data[chunks * 2..] {
        sum0 = T::accumulate(sum0, x);
    }

    T::combine(sum0, sum1)
}

/// Sum with 3 independent accumulators.
#[inline(never)]
pub fn sum_unroll_3<T: Summand>(data: &[T]) -> T::Acc {
    let chunks = data.len() / 3;

    let mut sum0 = T::ZERO;
    let mut sum1 = T::ZERO;
    let mut sum2 = T::ZERO;

    for i in 0..chunks {
        let idx = i * 3;
        sum0 = T::accumulate(sum0, data[idx]);
        sum1 = T::accumulate(sum1, data[idx + 1]);
        sum2 = T::accumulate(sum2, data[idx + 2]);
    }

    for &x in &data[chunks * 3..] {
        sum0 = T::accumulate(sum0, x);
    }

    T::combine(T::combine(sum0, sum1), sum2)
}

/// Sum with 4 independent accumulators.
#[inline(never)]
pub fn sum_unroll_4<T: Summand>(data: &[T]) -> T::Acc {
    let chunks = data.len() / 4;

    let mut sum0 = T::ZERO;
    let mut sum1 = T::ZERO;
    let mut sum2 = T::ZERO;
    let mut sum3 = T::ZERO;

    for i in 0..chunks {
        let idx = i * 4;
        sum0 = T::accumulate(sum0, data[idx]);
        sum1 = T::accumulate(sum1, data[idx + 1]);
        sum2 = T::accumulate(sum2, data[idx + 2]);
        sum3 = T::accumulate(sum3, data[idx + 3]);
    }

    for &x in &data[chunks * 4..] {
        sum0 = T::accumulate(sum0, x);
    }

    // (sum0 + sum1) + (sum2 + sum3)
    T::combine(T::combine(sum0, sum1), T::combine(sum2, sum3))
}
