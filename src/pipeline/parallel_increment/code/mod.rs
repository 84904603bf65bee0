//! Increment loop variants.

mod same_slot;
mod split_slots;

pub use same_slot::increment_same_slot;
pub use split_slots::increment_split_slots;

use crate::utils::VariantInfo;

/// Slots a variant needs in its buffer.
pub const SLOTS: usize = 2;

/// Type alias for the increment loop signature
pub type IncrementFn = fn(&mut [u64], usize);

/// Increment through volatile accesses so the compiler can neither fold a
/// whole loop into one addition nor keep the slot in a register.
#[inline(always)]
fn bump(slot: &mut u64) {
    // SAFETY: `slot` is a valid, exclusive reference.
    unsafe {
        let value = std::ptr::read_volatile(slot);
        std::ptr::write_volatile(slot, value.wrapping_add(1));
    }
}

/// Variants in execution order; the first is the baseline.
pub fn available_variants() -> Vec<VariantInfo<IncrementFn>> {
    vec![
        VariantInfo {
            name: "same_slot",
            description: "Two dependent increments on one slot per iteration",
            function: increment_same_slot,
        },
        VariantInfo {
            name: "split_slots",
            description: "One increment on each of two independent slots per iteration",
            function: increment_split_slots,
        },
    ]
}
