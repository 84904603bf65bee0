//! Baseline: both increments of an iteration hit the same slot.
//!
//! Each increment reads the value the previous one just wrote, so the loop
//! body is one dependency chain:
//! `x = a[0] -> x+1 -> a[0] = x -> y = a[0] -> y+1 -> a[0] = y`

use super::bump;

/// Increment `slots[0]` twice per iteration.
///
/// # Panics
/// Panics if `slots` is empty.
#[inline(never)]
pub fn increment_same_slot(slots: &mut [u64], iterations: usize) {
    let slot = &mut slots[0];
    for _ in 0..iterations {
        bump(slot);
        bump(slot);
    }
}
