use loopbench::kernels::{LoopOrder, matmul_ijk, matmul_jki, matmul_kji};
use loopbench::matrix::Matrix;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_matrices_close(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        let tol = 1e-9 * expected[i].abs().max(1.0);
        assert!(
            (expected[i] - actual[i]).abs() <= tol,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

/// Product of A (m×k) and B (k×n) under every loop order, starting from zero.
fn all_orders(a: &[f64], b: &[f64], m: usize, n: usize, k: usize) -> Vec<(LoopOrder, Vec<f64>)> {
    LoopOrder::ALL
        .iter()
        .map(|&order| {
            let mut c = vec![0.0; m * n];
            order.apply(a, b, &mut c, m, n, k);
            (order, c)
        })
        .collect()
}

// ============================================================
// Hand-computed products
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![5.0, 6.0, 7.0, 8.0];

    for (order, c) in all_orders(&a, &b, 2, 2, 2) {
        assert_matrices_close(&[19.0, 22.0, 43.0, 50.0], &c, order.name());
    }
}

#[test]
fn test_2x3_times_3x2() {
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2x3
    let b = vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]; // 3x2

    let mut c = vec![0.0; 4];
    matmul_ijk(&a, &b, &mut c, 2, 2, 3);
    assert_eq!(c, vec![58.0, 64.0, 139.0, 154.0]);

    let mut c = vec![0.0; 4];
    matmul_jki(&a, &b, &mut c, 2, 2, 3);
    assert_eq!(c, vec![58.0, 64.0, 139.0, 154.0]);

    let mut c = vec![0.0; 4];
    matmul_kji(&a, &b, &mut c, 2, 2, 3);
    assert_eq!(c, vec![58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn test_1x1x1_scalar() {
    for (order, c) in all_orders(&[3.5], &[-2.0], 1, 1, 1) {
        assert_eq!(c, vec![-7.0], "{}", order);
    }
}

#[test]
fn test_seeded_2x2_matches_hand_product() {
    let mut rng = StdRng::seed_from_u64(2024);
    let a = Matrix::random(2, 2, &mut rng).unwrap();
    let b = Matrix::random(2, 2, &mut rng).unwrap();

    let (a00, a01, a10, a11) = (a.get(0, 0), a.get(0, 1), a.get(1, 0), a.get(1, 1));
    let (b00, b01, b10, b11) = (b.get(0, 0), b.get(0, 1), b.get(1, 0), b.get(1, 1));
    let expected = [
        a00 * b00 + a01 * b10,
        a00 * b01 + a01 * b11,
        a10 * b00 + a11 * b10,
        a10 * b01 + a11 * b11,
    ];

    for order in LoopOrder::ALL {
        let mut c = Matrix::zeros(2, 2).unwrap();
        order.multiply(&a, &b, &mut c);
        assert_matrices_close(&expected, c.as_slice(), order.name());
    }
}

// ============================================================
// Cross-order agreement
// ============================================================

#[test]
fn test_orders_agree_on_random_operands() {
    let test_sizes = [
        (3, 3, 3),
        (5, 7, 3),
        (16, 16, 16),
        (17, 9, 31),
        (64, 32, 48),
        (1, 50, 1),
        (50, 1, 50),
    ];
    let mut rng = StdRng::seed_from_u64(11);

    for (m, k, n) in test_sizes {
        let a = Matrix::random(m, k, &mut rng).unwrap();
        let b = Matrix::random(k, n, &mut rng).unwrap();
        let results = all_orders(a.as_slice(), b.as_slice(), m, n, k);

        let (_, reference) = &results[0];
        for (order, c) in &results[1..] {
            assert_matrices_close(reference, c, &format!("{}_{}x{}x{}", order, m, k, n));
        }
    }
}

#[test]
fn test_zero_operands_give_zero_product() {
    let (m, k, n) = (6, 4, 5);
    let a = Matrix::zeros(m, k).unwrap();
    let b = Matrix::zeros(k, n).unwrap();

    for order in LoopOrder::ALL {
        let mut c = Matrix::zeros(m, n).unwrap();
        order.multiply(&a, &b, &mut c);
        assert!(c.as_slice().iter().all(|&v| v == 0.0), "{}", order);
    }
}

// ============================================================
// Accumulation test (C += A*B, not C = A*B)
// ============================================================

#[test]
fn test_accumulation() {
    let size = 8;
    let a: Vec<f64> = (0..size * size).map(|i| (i % 10) as f64).collect();
    let b: Vec<f64> = (0..size * size).map(|i| (i % 7) as f64).collect();

    let fresh = all_orders(&a, &b, size, size, size);
    for (order, product) in fresh {
        let mut c = vec![5.0; size * size];
        order.apply(&a, &b, &mut c, size, size, size);

        let expected: Vec<f64> = product.iter().map(|v| v + 5.0).collect();
        assert_matrices_close(&expected, &c, &format!("accumulate_{}", order));
    }
}

#[test]
fn test_rezeroed_output_is_fresh_product() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = Matrix::random(4, 4, &mut rng).unwrap();
    let b = Matrix::random(4, 4, &mut rng).unwrap();
    let mut c = Matrix::zeros(4, 4).unwrap();

    LoopOrder::Ijk.multiply(&a, &b, &mut c);
    let first = c.clone();
    c.zero();
    LoopOrder::Ijk.multiply(&a, &b, &mut c);
    assert_eq!(first, c);
}
