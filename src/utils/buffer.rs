//! Fallible buffer allocation.
//!
//! Every demo buffer goes through [`alloc_filled`]: the reservation is
//! fallible, so running out of memory becomes a [`DemoError`] for that demo
//! instead of an abort. The returned `Vec` owns the memory and releases it
//! on every exit path.

use crate::error::DemoError;

/// Optional cap on the size of a single buffer.
///
/// A request over the cap fails exactly like a real allocation failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocBudget {
    /// Largest allowed buffer in bytes (`None` = no cap).
    pub max_bytes: Option<usize>,
}

impl AllocBudget {
    /// No cap: only the allocator can refuse.
    pub const fn unlimited() -> Self {
        Self { max_bytes: None }
    }

    /// Refuse any buffer larger than `max_bytes`.
    pub const fn capped(max_bytes: usize) -> Self {
        Self {
            max_bytes: Some(max_bytes),
        }
    }

    fn allows(&self, bytes: usize) -> bool {
        self.max_bytes.map_or(true, |max| bytes <= max)
    }
}

/// Allocate `len` elements, each set to `fill`.
pub fn alloc_filled<T: Copy>(
    label: &str,
    len: usize,
    fill: T,
    budget: &AllocBudget,
) -> Result<Vec<T>, DemoError> {
    let failed = |bytes: usize| DemoError::AllocationFailed {
        label: label.to_string(),
        elements: len,
        bytes,
    };

    let bytes = len
        .checked_mul(std::mem::size_of::<T>())
        .ok_or_else(|| failed(usize::MAX))?;

    if !budget.allows(bytes) {
        return Err(failed(bytes));
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| failed(bytes))?;
    buf.resize(len, fill);
    Ok(buf)
}
