//! Matrix traversal orders.

mod column_major;
mod row_major;

pub use column_major::sum_column_major;
pub use row_major::sum_row_major;

use crate::utils::VariantInfo;

/// Type alias for the traversal signature: matrix and side length
pub type TraversalFn = fn(&[i32], usize) -> i64;

/// Variants in execution order; column-major is the baseline.
pub fn available_variants() -> Vec<VariantInfo<TraversalFn>> {
    vec![
        VariantInfo {
            name: "column_major",
            description: "Walk down each column (stride of one row between reads)",
            function: sum_column_major,
        },
        VariantInfo {
            name: "row_major",
            description: "Walk along each row (adjacent reads)",
            function: sum_row_major,
        },
    ]
}
