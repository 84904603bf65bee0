//! Tests for the unroll summation variants.

use super::code::*;
use super::UnrollSumRunner;
use crate::config::DemoConfig;
use crate::registry::DemoRunner;
use proptest::prelude::*;

#[test]
fn test_sum_of_ones() {
    let data = vec![1.0f32; 4099];
    for variant in available_variants::<f32>() {
        assert_eq!((variant.function)(&data), 4099.0, "{}", variant.name);
    }
}

#[test]
fn test_empty_and_short_buffers() {
    for len in 0..8 {
        let data: Vec<i32> = (1..=len).collect();
        let expected: i32 = data.iter().sum();
        for variant in available_variants::<i32>() {
            assert_eq!((variant.function)(&data), expected, "{} len {}", variant.name, len);
        }
    }
}

#[test]
fn test_integer_sums_wrap() {
    let data = vec![i32::MAX, 1, 0, 0, 0];
    for variant in available_variants::<i32>() {
        assert_eq!((variant.function)(&data), i32::MIN, "{}", variant.name);
    }
}

#[test]
fn test_variant_order() {
    let names: Vec<_> = available_variants::<f32>().iter().map(|v| v.name).collect();
    assert_eq!(names, vec!["unroll_1", "unroll_2", "unroll_3", "unroll_4"]);
}

#[test]
fn test_verify_both_element_types() {
    UnrollSumRunner::<f32>::new().verify().unwrap();
    UnrollSumRunner::<i32>::new().verify().unwrap();
}

#[test]
fn test_closures_sum_the_whole_buffer() {
    let config = DemoConfig::reduced(1024);
    let runner = UnrollSumRunner::<i32>::new();
    for mut closure in runner.get_variant_closures(&config) {
        let (_, checksum) = (closure.run)().unwrap();
        assert_eq!(checksum, Some(1024.0), "{}", closure.name);
    }
}

#[test]
fn test_float_sums_past_single_precision_limit() {
    // An f32 running sum of ones stalls at 2^24; the buffer is twice that
    let len = 1usize << 25;
    let mut config = DemoConfig::reduced(1024);
    config.unroll_len = len;
    let runner = UnrollSumRunner::<f32>::new();
    for mut closure in runner.get_variant_closures(&config) {
        let (_, checksum) = (closure.run)().unwrap();
        assert_eq!(checksum, Some(len as f64), "{}", closure.name);
    }
}

fn magnitude(data: &[f32]) -> f64 {
    data.iter().map(|x| x.abs() as f64).sum()
}

proptest! {
    #[test]
    fn integer_sums_match_exactly(data in prop::collection::vec(any::<i32>(), 0..2000)) {
        let expected = sum_unroll_1(&data);
        prop_assert_eq!(sum_unroll_2(&data), expected);
        prop_assert_eq!(sum_unroll_3(&data), expected);
        prop_assert_eq!(sum_unroll_4(&data), expected);
    }

    #[test]
    fn float_sums_match_within_tolerance(data in prop::collection::vec(-1.0f32..1.0, 0..2000)) {
        let expected = sum_unroll_1(&data);
        let scale = magnitude(&data);
        for variant in available_variants::<f32>() {
            let actual = (variant.function)(&data);
            prop_assert!(
                f32::agrees(actual, expected, scale),
                "{}: expected {}, got {}", variant.name, expected, actual
            );
        }
    }
}
