/// Matrix multiplication using i-j-k loop order.
///
/// The textbook triple loop. The inner loop walks a row of A sequentially but
/// a column of B with stride `n`, so B misses cache on nearly every step once
/// a column no longer fits.
///
/// Each C element is summed in a local and added to C once, so there are no
/// intermediate writes to C.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_ijk(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] += sum;
        }
    }
}
