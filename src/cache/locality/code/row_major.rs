/// Sum an `n × n` row-major matrix row by row.
///
/// Consecutive reads are adjacent in memory, so every fetched cache line is
/// fully used before the next one is needed.
///
/// # Panics
/// Panics if `matrix.len() != n * n`.
#[inline(never)]
pub fn sum_row_major(matrix: &[i32], n: usize) -> i64 {
    assert_eq!(matrix.len(), n * n, "matrix must hold n * n elements");

    let mut sum = 0i64;
    for row in 0..n {
        for col in 0..n {
            sum += matrix[row * n + col] as i64;
        }
    }
    sum
}
