use super::code::{multiply_every, variant_name};
use super::LineStrideRunner;
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::registry::{DemoRunner, ReportStyle};
use proptest::prelude::*;

#[test]
fn test_step_one_touches_everything() {
    let mut data = vec![2i32; 10];
    assert_eq!(multiply_every(&mut data, 1), 10);
    assert!(data.iter().all(|&x| x == 6));
}

#[test]
fn test_step_larger_than_buffer() {
    let mut data = vec![1i32; 10];
    assert_eq!(multiply_every(&mut data, 256), 1);
    assert_eq!(data[0], 3);
    assert!(data[1..].iter().all(|&x| x == 1));
}

#[test]
#[should_panic(expected = "non-zero")]
fn test_zero_step_panics() {
    let mut data = vec![1i32; 4];
    multiply_every(&mut data, 0);
}

#[test]
fn test_variants_follow_configured_strides() {
    let config = DemoConfig::reduced(1024);
    let names = LineStrideRunner.available_variants(&config);
    assert_eq!(names.len(), 9);
    assert_eq!(names.first().map(String::as_str), Some("step_1"));
    assert_eq!(names.last().map(String::as_str), Some("step_256"));
    assert_eq!(LineStrideRunner.report_style(), ReportStyle::PerVariant);
}

#[test]
fn test_closures_count_touched_elements() {
    let config = DemoConfig::reduced(1024);
    for (mut closure, &step) in LineStrideRunner
        .get_variant_closures(&config)
        .into_iter()
        .zip(config.strides.iter())
    {
        assert_eq!(closure.name, variant_name(step));
        let (_, checksum) = (closure.run)().unwrap();
        assert_eq!(checksum, Some((1024 / step) as f64));
    }
}

#[test]
fn test_zero_stride_closure_is_an_error() {
    let mut config = DemoConfig::reduced(64);
    config.strides = vec![0];
    let mut closures = LineStrideRunner.get_variant_closures(&config);
    let err = (closures[0].run)().unwrap_err();
    assert!(matches!(err, DemoError::InvalidParameter { .. }));
}

#[test]
fn test_verify() {
    LineStrideRunner.verify().unwrap();
}

proptest! {
    #[test]
    fn mutated_count_and_untouched_values(
        exp in 0u32..9,
        groups in 1usize..64,
        initial in -1000i32..1000,
    ) {
        let step = 1usize << exp;
        let len = step * groups;
        let mut data = vec![initial; len];

        prop_assert_eq!(multiply_every(&mut data, step), len / step);

        for (i, &x) in data.iter().enumerate() {
            if i % step == 0 {
                prop_assert_eq!(x, initial * 3);
            } else {
                prop_assert_eq!(x, initial);
            }
        }
    }
}
