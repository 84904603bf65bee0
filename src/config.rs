//! Demo sizes.

use crate::error::DemoError;
use crate::utils::buffer::AllocBudget;

/// Iterations of each parallel-increment loop (2^29).
pub const DEFAULT_INCREMENT_ITERATIONS: usize = 512 * 1024 * 1024;

/// Elements summed by the unroll demos.
pub const DEFAULT_UNROLL_LEN: usize = 64 * 1024 * 1024;

/// Elements in the stride demo buffer.
pub const DEFAULT_STRIDE_LEN: usize = 64 * 1024 * 1024;

/// Strides exercised by the cache-line demo, in order.
pub const DEFAULT_STRIDES: [usize; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

/// Side of the square matrix used by the locality demo.
pub const DEFAULT_MATRIX_SIZE: usize = 4096;

/// Sizes and limits for every demo in the suite.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Iterations of each parallel-increment loop
    pub increment_iterations: usize,
    /// Elements summed by the unroll demos
    pub unroll_len: usize,
    /// Elements in the stride demo buffer
    pub stride_len: usize,
    /// Strides for the cache-line demo, run in this order
    pub strides: Vec<usize>,
    /// Side of the locality matrix
    pub matrix_size: usize,
    /// Per-buffer allocation cap
    pub budget: AllocBudget,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            increment_iterations: DEFAULT_INCREMENT_ITERATIONS,
            unroll_len: DEFAULT_UNROLL_LEN,
            stride_len: DEFAULT_STRIDE_LEN,
            strides: DEFAULT_STRIDES.to_vec(),
            matrix_size: DEFAULT_MATRIX_SIZE,
            budget: AllocBudget::unlimited(),
        }
    }
}

impl DemoConfig {
    /// Every size shrunk to about `len` elements, for quick runs and tests.
    ///
    /// The matrix side becomes `floor(sqrt(len))` (at least 1).
    pub fn reduced(len: usize) -> Self {
        let len = len.max(1);
        Self {
            increment_iterations: len,
            unroll_len: len,
            stride_len: len,
            strides: DEFAULT_STRIDES.to_vec(),
            matrix_size: (len as f64).sqrt().floor().max(1.0) as usize,
            budget: AllocBudget::unlimited(),
        }
    }

    /// Same sizes with a per-buffer allocation cap.
    pub fn with_budget(mut self, budget: AllocBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Reject sizes no demo can run with.
    ///
    /// The runner checks each demo against its own fields only (see
    /// [`DemoRunner::check_config`](crate::registry::DemoRunner::check_config)),
    /// so one bad field never skips an unrelated demo.
    pub fn validate(&self) -> Result<(), DemoError> {
        self.check_increment()?;
        self.check_unroll()?;
        self.check_stride()?;
        self.check_matrix()
    }

    pub fn check_increment(&self) -> Result<(), DemoError> {
        non_zero("increment_iterations", self.increment_iterations)
    }

    pub fn check_unroll(&self) -> Result<(), DemoError> {
        non_zero("unroll_len", self.unroll_len)
    }

    /// Buffer length and stride list of the cache-line demo.
    pub fn check_stride(&self) -> Result<(), DemoError> {
        non_zero("stride_len", self.stride_len)?;

        if self.strides.is_empty() {
            return Err(DemoError::InvalidParameter {
                name: "strides",
                reason: "at least one stride is required".to_string(),
            });
        }
        if self.strides.contains(&0) {
            return Err(DemoError::InvalidParameter {
                name: "strides",
                reason: "a stride of zero never advances".to_string(),
            });
        }
        Ok(())
    }

    pub fn check_matrix(&self) -> Result<(), DemoError> {
        non_zero("matrix_size", self.matrix_size)?;

        if self.matrix_size.checked_mul(self.matrix_size).is_none() {
            return Err(DemoError::InvalidParameter {
                name: "matrix_size",
                reason: format!("{} squared overflows usize", self.matrix_size),
            });
        }
        Ok(())
    }
}

fn non_zero(name: &'static str, value: usize) -> Result<(), DemoError> {
    if value == 0 {
        return Err(DemoError::InvalidParameter {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
