/// Matrix multiplication using k-j-i loop order.
///
/// The outer loop picks a column of A and a row of B, then scatters their
/// outer product into C. The inner loop still strides down a column of C, so
/// locality is poor on C and A while the single B element is reused `m` times.
///
/// Same arguments and accumulation contract as [`super::matmul_ijk`].
pub fn matmul_kji(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for p in 0..k {
        for j in 0..n {
            let b_pj = b[p * n + j];
            for i in 0..m {
                c[i * n + j] += a[i * k + p] * b_pj;
            }
        }
    }
}
