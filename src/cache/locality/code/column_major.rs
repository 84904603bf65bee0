/// Sum an `n × n` row-major matrix column by column.
///
/// Consecutive reads are `n` elements apart. Once a row is wider than a
/// cache line, each read lands on a different line, and for large `n` the
/// line is evicted before the next column comes back to it.
///
/// # Panics
/// Panics if `matrix.len() != n * n`.
#[inline(never)]
pub fn sum_column_major(matrix: &[i32], n: usize) -> i64 {
    assert_eq!(matrix.len(), n * n, "matrix must hold n * n elements");

    let mut sum = 0i64;
    for col in 0..n {
        for row in 0..n {
            sum += matrix[row * n + col] as i64;
        }
    }
    sum
}
