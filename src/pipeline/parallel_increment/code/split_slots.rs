//! Independent increments on two different slots.
//!
//! The two chains do not depend on each other, so the pipeline can overlap
//! them:
//! `x = a[0] -> x+1 -> a[0] = x`
//! `y = a[1] -> y+1 -> a[1] = y`

use super::bump;

/// Increment `slots[0]` and `slots[1]` once each per iteration.
///
/// # Panics
/// Panics if `slots` holds fewer than two elements.
#[inline(never)]
pub fn increment_split_slots(slots: &mut [u64], iterations: usize) {
    assert!(slots.len() >= 2, "split_slots needs two slots");

    let (head, tail) = slots.split_at_mut(1);
    let (first, second) = (&mut head[0], &mut tail[0]);
    for _ in 0..iterations {
        bump(first);
        bump(second);
    }
}
