//! Demos of instruction-level parallelism inside one core.

pub mod parallel_increment;
pub mod unroll_sum;
