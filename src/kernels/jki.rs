/// Matrix multiplication using j-k-i loop order.
///
/// For each column j of C and each p, the inner loop runs down column j of C
/// and column p of A. Both are stride-`n`/stride-`k` walks in row-major
/// storage, which makes this the worst of the three orders for large sizes.
/// The B element `b[p][j]` stays fixed across the inner loop.
///
/// Same arguments and accumulation contract as [`super::matmul_ijk`].
pub fn matmul_jki(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for j in 0..n {
        for p in 0..k {
            let b_pj = b[p * n + j];
            for i in 0..m {
                c[i * n + j] += a[i * k + p] * b_pj;
            }
        }
    }
}
