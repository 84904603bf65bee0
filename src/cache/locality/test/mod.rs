//! Tests for the matrix traversal orders.

use super::code::*;
use super::LocalityRunner;
use crate::config::DemoConfig;
use crate::registry::DemoRunner;
use proptest::prelude::*;

#[test]
fn test_small_matrix() {
    // 1 2
    // 3 4
    let matrix = [1, 2, 3, 4];
    assert_eq!(sum_row_major(&matrix, 2), 10);
    assert_eq!(sum_column_major(&matrix, 2), 10);
}

#[test]
fn test_empty_matrix() {
    assert_eq!(sum_row_major(&[], 0), 0);
    assert_eq!(sum_column_major(&[], 0), 0);
}

#[test]
#[should_panic(expected = "n * n")]
fn test_non_square_panics() {
    sum_row_major(&[1, 2, 3], 2);
}

#[test]
fn test_baseline_is_column_major() {
    let names: Vec<_> = available_variants().iter().map(|v| v.name).collect();
    assert_eq!(names, vec!["column_major", "row_major"]);
}

#[test]
fn test_verify() {
    LocalityRunner.verify().unwrap();
}

#[test]
fn test_closures_sum_every_cell() {
    let config = DemoConfig::reduced(1024);
    for mut closure in LocalityRunner.get_variant_closures(&config) {
        let (_, checksum) = (closure.run)().unwrap();
        assert_eq!(checksum, Some(1024.0), "{}", closure.name);
    }
}

proptest! {
    #[test]
    fn traversal_orders_agree(
        n in 0usize..40,
        seed in any::<i32>(),
    ) {
        let matrix: Vec<i32> = (0..n * n)
            .map(|i| seed.wrapping_mul(i as i32 + 1) % 10_000)
            .collect();
        prop_assert_eq!(sum_row_major(&matrix, n), sum_column_major(&matrix, n));
    }
}
