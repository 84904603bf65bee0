use super::code;
use super::ParallelIncrementRunner;
use crate::config::DemoConfig;
use crate::registry::DemoRunner;
use crate::utils::buffer::AllocBudget;
use proptest::prelude::*;

#[test]
fn test_same_slot_only_touches_first_slot() {
    let mut slots = [0u64; 2];
    code::increment_same_slot(&mut slots, 10);
    assert_eq!(slots, [20, 0]);
}

#[test]
fn test_split_slots_touches_both() {
    let mut slots = [0u64; 2];
    code::increment_split_slots(&mut slots, 10);
    assert_eq!(slots, [10, 10]);
}

#[test]
fn test_zero_iterations_is_a_no_op() {
    for variant in code::available_variants() {
        let mut slots = [7u64, 9u64];
        (variant.function)(&mut slots, 0);
        assert_eq!(slots, [7, 9], "{}", variant.name);
    }
}

#[test]
#[should_panic(expected = "two slots")]
fn test_split_slots_rejects_single_slot() {
    let mut slots = [0u64; 1];
    code::increment_split_slots(&mut slots, 1);
}

#[test]
fn test_verify() {
    ParallelIncrementRunner.verify().unwrap();
}

#[test]
fn test_closures_report_checksum() {
    let config = DemoConfig::reduced(500);
    let mut closures = ParallelIncrementRunner.get_variant_closures(&config);
    assert_eq!(closures.len(), 2);

    for closure in &mut closures {
        let (secs, checksum) = (closure.run)().unwrap();
        assert!(secs >= 0.0);
        assert_eq!(checksum, Some(1000.0), "{}", closure.name);
    }
}

#[test]
fn test_closure_allocation_failure() {
    let config = DemoConfig::reduced(16).with_budget(AllocBudget::capped(8));
    let mut closures = ParallelIncrementRunner.get_variant_closures(&config);
    let err = (closures[0].run)().unwrap_err();
    assert!(err.is_allocation_failure());
}

proptest! {
    #[test]
    fn sum_is_twice_the_iterations(iterations in 1usize..5000) {
        for variant in code::available_variants() {
            let mut slots = [0u64; 2];
            (variant.function)(&mut slots, iterations);
            prop_assert_eq!(slots[0] + slots[1], 2 * iterations as u64);
        }
    }
}
