//! Loop-order multiplication kernels.
//!
//! All three compute C += A × B with the same O(m·k·n) work; they differ only
//! in loop nesting and therefore in memory-access pattern. Results agree to
//! within floating-point reassociation, not bit for bit.
//!
//! Available kernels:
//! - `ijk`: scalar dot product per C element
//! - `jki`: column sweep over C and A
//! - `kji`: outer-product updates of C

pub mod ijk;
pub mod jki;
pub mod kji;

use std::fmt;

pub use ijk::matmul_ijk;
pub use jki::matmul_jki;
pub use kji::matmul_kji;

use crate::matrix::Matrix;

/// The closed set of loop orders being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopOrder {
    Ijk,
    Jki,
    Kji,
}

impl LoopOrder {
    /// Every order, in report column order.
    pub const ALL: [LoopOrder; 3] = [LoopOrder::Ijk, LoopOrder::Jki, LoopOrder::Kji];

    pub fn name(self) -> &'static str {
        match self {
            LoopOrder::Ijk => "ijk",
            LoopOrder::Jki => "jki",
            LoopOrder::Kji => "kji",
        }
    }

    /// Run this kernel on raw row-major slices: C += A * B.
    pub fn apply(self, a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
        match self {
            LoopOrder::Ijk => matmul_ijk(a, b, c, m, n, k),
            LoopOrder::Jki => matmul_jki(a, b, c, m, n, k),
            LoopOrder::Kji => matmul_kji(a, b, c, m, n, k),
        }
    }

    /// C += A * B on [`Matrix`] operands.
    ///
    /// Shapes must agree (A is m×k, B is k×n, C is m×n). That is the caller's
    /// job; it is only checked in debug builds.
    pub fn multiply(self, a: &Matrix, b: &Matrix, c: &mut Matrix) {
        let (m, k, n) = (a.rows(), a.cols(), b.cols());
        debug_assert_eq!(b.rows(), k, "B: expected {} rows", k);
        debug_assert_eq!((c.rows(), c.cols()), (m, n), "C: expected {}x{}", m, n);
        self.apply(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k);
    }
}

impl fmt::Display for LoopOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
