//! Strided update loop.

/// Multiply every `step`-th element by 3, starting at index 0, and return
/// how many elements were touched. Elements in between are left alone.
///
/// While `step * size_of::<i32>()` stays under the cache-line size, every
/// line of the buffer is still fetched, so the loop costs about the same
/// for steps 1 through 16 on a 64-byte line even though it does 16 times
/// less arithmetic. Past the line size the time drops with the number of
/// lines touched.
///
/// # Panics
/// Panics if `step` is zero.
///
/// # Example
/// ```
/// use memory_access_demos::cache::line_stride::code::multiply_every;
///
/// let mut data = [1, 1, 1, 1, 1];
/// assert_eq!(multiply_every(&mut data, 2), 3);
/// assert_eq!(data, [3, 1, 3, 1, 3]);
/// ```
#[inline(never)]
pub fn multiply_every(data: &mut [i32], step: usize) -> usize {
    assert!(step > 0, "stride must be non-zero");

    let mut touched = 0;
    for x in data.iter_mut().step_by(step) {
        *x = x.wrapping_mul(3);
        touched += 1;
    }
    touched
}

/// Label of the variant running with `step`.
pub fn variant_name(step: usize) -> String {
    format!("step_{}", step)
}
